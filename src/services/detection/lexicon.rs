// Closed word lists used by the feature extractor.
// All entries are lower-case and compared against case-folded tokens.

/// Coordinating, subordinating and transitional connectives.
pub const CONNECTIVES: &[&str] = &[
    "and", "but", "or", "so", "yet", "nor", "although", "because", "since", "while",
    "whereas", "however", "therefore", "moreover", "furthermore", "additionally",
    "consequently", "thus", "hence", "nevertheless", "nonetheless", "meanwhile",
    "ultimately", "accordingly", "likewise", "similarly", "notably", "overall",
];

/// Multi-word connectives, matched before single words.
pub const CONNECTIVE_PHRASES: &[&[&str]] = &[
    &["on", "the", "other", "hand"],
    &["as", "a", "result"],
    &["in", "addition"],
    &["in", "conclusion"],
    &["in", "contrast"],
    &["in", "summary"],
    &["for", "example"],
    &["for", "instance"],
];

pub const FIRST_PERSON: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves",
    "i'm", "i've", "i'd", "i'll", "we're", "we've", "we'll", "we'd",
];

pub const BE_FORMS: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];

/// Past participles that do not end in "-ed".
pub const IRREGULAR_PARTICIPLES: &[&str] = &[
    "known", "given", "taken", "seen", "made", "done", "written", "shown", "built",
    "found", "held", "kept", "led", "left", "paid", "said", "sent", "told", "thought",
    "understood", "brought", "bought", "caught", "taught", "chosen", "driven", "eaten",
    "fallen", "forgotten", "gotten", "grown", "hidden", "spoken", "stolen", "worn",
    "begun", "broken", "frozen", "ridden", "risen", "shaken", "sung", "sworn", "thrown",
    "woken",
];

/// Conversational markers that lower formality.
pub const INFORMAL_MARKERS: &[&str] = &[
    "gonna", "wanna", "kinda", "sorta", "yeah", "yep", "nope", "ok", "okay", "hey",
    "hi", "well", "like", "actually", "basically", "literally", "totally", "honestly",
    "stuff",
];

pub fn contains(list: &[&str], word: &str) -> bool {
    list.iter().any(|entry| *entry == word)
}
