// Feature Extractor
// Turns raw text into the fixed FeatureVector consumed by the scorer.
//
// Every ratio has an explicit fallback for a zero denominator so that
// single-sentence or punctuation-free input always yields finite values.

use std::collections::HashSet;

use tracing::debug;

use super::lexicon::{
    contains, BE_FORMS, CONNECTIVES, CONNECTIVE_PHRASES, FIRST_PERSON, INFORMAL_MARKERS,
    IRREGULAR_PARTICIPLES,
};
use crate::error::DetectError;
use crate::models::FeatureVector;
use crate::services::text_processor::{
    count_words, is_contraction, ngram_repeat_rate, split_sentences, tokenize_words, WordToken,
};

const PUNCTUATION_CHARS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '-', '(', ')', '[', ']', '{', '}', '\u{2014}', '\u{2013}',
];
const CLAUSE_MARKERS: &[char] = &[',', ';', ':'];

const REPETITION_NGRAM: usize = 3;
const LONG_WORD_CHARS: usize = 8;

/// Used when fewer than two sentences make variation meaningless.
pub const NEUTRAL_SENTENCE_VARIATION: f64 = 0.45;
const NEUTRAL_FORMALITY: f64 = 50.0;

/// Extract the feature vector for a document.
///
/// Fails when the text is empty, whitespace-only, or has no word tokens
/// (punctuation or symbols only).
pub fn extract(text: &str) -> Result<FeatureVector, DetectError> {
    if text.trim().is_empty() {
        return Err(DetectError::InvalidInput(
            "text is empty or contains only whitespace".to_string(),
        ));
    }

    let words = tokenize_words(text);
    if words.is_empty() {
        return Err(DetectError::InvalidInput("text contains no words".to_string()));
    }
    let sentences = split_sentences(text);
    let sentence_lengths: Vec<usize> = sentences.iter().map(|s| count_words(s)).collect();
    let folded: Vec<&str> = words.iter().map(|w| w.folded.as_str()).collect();
    let word_count = words.len();

    let avg_sentence_length = mean(&sentence_lengths);

    let features = FeatureVector {
        avg_sentence_length,
        sentence_length_variation: sentence_length_variation(&sentence_lengths, avg_sentence_length),
        vocabulary_richness: vocabulary_richness(&folded),
        punctuation_density: per_hundred(count_chars(text, PUNCTUATION_CHARS), word_count),
        connective_rate: per_hundred(count_connectives(&folded), word_count),
        first_person_rate: per_hundred(
            folded.iter().filter(|w| contains(FIRST_PERSON, w)).count(),
            word_count,
        ),
        passive_voice_rate: per_hundred(count_passive(&folded), word_count),
        avg_word_length: avg_word_length(&words),
        sentence_complexity: ratio(count_chars(text, CLAUSE_MARKERS), sentences.len()),
        repetition_score: ngram_repeat_rate(&folded, REPETITION_NGRAM),
        formality_score: formality_score(&words),
    };

    debug!(
        word_count,
        sentence_count = sentences.len(),
        repetition = features.repetition_score,
        formality = features.formality_score,
        "features.extracted"
    );

    Ok(features)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

fn per_hundred(count: usize, word_count: usize) -> f64 {
    ratio(count, word_count) * 100.0
}

fn mean(values: &[usize]) -> f64 {
    ratio(values.iter().sum(), values.len())
}

fn count_chars(text: &str, set: &[char]) -> usize {
    text.chars().filter(|c| set.contains(c)).count()
}

fn sentence_length_variation(lengths: &[usize], mean: f64) -> f64 {
    if lengths.len() < 2 || mean <= 0.0 {
        return NEUTRAL_SENTENCE_VARIATION;
    }
    let variance = lengths
        .iter()
        .map(|&l| (l as f64 - mean).powi(2))
        .sum::<f64>()
        / lengths.len() as f64;
    variance.sqrt() / mean
}

fn vocabulary_richness(folded: &[&str]) -> f64 {
    let distinct: HashSet<&str> = folded.iter().copied().collect();
    per_hundred(distinct.len(), folded.len())
}

fn avg_word_length(words: &[WordToken<'_>]) -> f64 {
    ratio(words.iter().map(|w| w.char_len()).sum(), words.len())
}

/// Connective matches, longest phrase first, without overlap.
fn count_connectives(folded: &[&str]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < folded.len() {
        if let Some(phrase) = CONNECTIVE_PHRASES
            .iter()
            .find(|p| folded[i..].starts_with(**p))
        {
            count += 1;
            i += phrase.len();
            continue;
        }
        if contains(CONNECTIVES, folded[i]) {
            count += 1;
        }
        i += 1;
    }
    count
}

fn is_participle(word: &str) -> bool {
    (word.len() > 3 && word.ends_with("ed")) || contains(IRREGULAR_PARTICIPLES, word)
}

/// "be" form + past participle, allowing one "-ly" adverb in between.
fn count_passive(folded: &[&str]) -> usize {
    let mut count = 0;
    for (i, word) in folded.iter().enumerate() {
        if !contains(BE_FORMS, word) {
            continue;
        }
        match (folded.get(i + 1), folded.get(i + 2)) {
            (Some(next), _) if is_participle(next) => count += 1,
            (Some(adverb), Some(after)) if adverb.ends_with("ly") && is_participle(after) => {
                count += 1
            }
            _ => {}
        }
    }
    count
}

fn formality_score(words: &[WordToken<'_>]) -> f64 {
    if words.is_empty() {
        return NEUTRAL_FORMALITY;
    }
    let total = words.len() as f64;
    let contractions = words.iter().filter(|w| is_contraction(&w.lexical)).count() as f64;
    let informal = words
        .iter()
        .filter(|w| contains(INFORMAL_MARKERS, &w.folded))
        .count() as f64;
    let long_words = words.iter().filter(|w| w.char_len() >= LONG_WORD_CHARS).count() as f64;

    let contraction_absence = (1.0 - contractions / total * 10.0).clamp(0.0, 1.0);
    let informal_absence = (1.0 - informal / total * 10.0).clamp(0.0, 1.0);
    let word_length = ((avg_word_length(words) - 3.0) / 3.0).clamp(0.0, 1.0);
    let sophistication = (long_words / total * 5.0).clamp(0.0, 1.0);

    100.0
        * (0.4 * contraction_absence
            + 0.2 * informal_absence
            + 0.2 * word_length
            + 0.2 * sophistication)
}
