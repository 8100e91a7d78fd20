// Text Processing Service
// Sentence and word segmentation shared by the feature extractor

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

const SENTENCE_TERMINALS: [char; 3] = ['.', '!', '?'];

/// A whitespace-delimited token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken<'a> {
    /// Token exactly as it appears in the text, punctuation included.
    pub raw: &'a str,
    /// Token with surrounding punctuation trimmed and apostrophes normalized.
    pub lexical: String,
    /// Case-folded lexical form used for vocabulary comparisons.
    pub folded: String,
}

impl WordToken<'_> {
    pub fn char_len(&self) -> usize {
        self.lexical.chars().count()
    }
}

fn normalize_apostrophes(s: &str) -> String {
    s.replace(['\u{2019}', '\u{2018}', '\u{02bc}'], "'")
}

fn lexical_form(token: &str) -> String {
    let normalized = normalize_apostrophes(token);
    normalized
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}

/// Split text on whitespace, dropping tokens with no alphanumeric content.
pub fn tokenize_words(text: &str) -> Vec<WordToken<'_>> {
    text.split_whitespace()
        .filter_map(|raw| {
            let lexical = lexical_form(raw);
            if lexical.is_empty() {
                return None;
            }
            let folded = lexical.to_lowercase();
            Some(WordToken { raw, lexical, folded })
        })
        .collect()
}

/// Count words the way the extractor does.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|raw| raw.chars().any(|c| c.is_alphanumeric()))
        .count()
}

/// Split text into sentences on `.`, `!` and `?`.
///
/// A run of terminators closes one sentence and a period between two digits
/// is kept as a decimal point. Segments without any word are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if !SENTENCE_TERMINALS.contains(&ch) {
            buffer.push(ch);
            i += 1;
            continue;
        }

        if ch == '.' && i > 0 && i + 1 < chars.len() {
            if chars[i - 1].is_ascii_digit() && chars[i + 1].is_ascii_digit() {
                buffer.push(ch);
                i += 1;
                continue;
            }
        }

        // Swallow "?!", "..." and similar runs.
        while i + 1 < chars.len() && SENTENCE_TERMINALS.contains(&chars[i + 1]) {
            i += 1;
        }

        push_sentence(&mut sentences, &buffer);
        buffer.clear();
        i += 1;
    }

    push_sentence(&mut sentences, &buffer);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if count_words(trimmed) > 0 {
        sentences.push(trimmed.to_string());
    }
}

fn contraction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-z]+'(t|s|re|ve|ll|d|m)$").expect("contraction regex")
    })
}

/// True for forms like "don't", "it's", "we'll".
pub fn is_contraction(lexical: &str) -> bool {
    contraction_re().is_match(lexical)
}

/// Fraction of n-grams that repeat an earlier n-gram.
///
/// Returns 0 when there are fewer than `n + 1` tokens.
pub fn ngram_repeat_rate(tokens: &[&str], n: usize) -> f64 {
    if n == 0 || tokens.len() < n + 1 {
        return 0.0;
    }
    let mut counts: HashMap<&[&str], usize> = HashMap::new();
    let mut total = 0usize;
    for window in tokens.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
        total += 1;
    }
    let repeats = counts.values().map(|&c| c - 1).sum::<usize>();
    repeats as f64 / total.max(1) as f64
}
