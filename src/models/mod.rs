// Detection Data Models
// Request/response shapes and the fixed feature schema

use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Detection Request ============

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetectRequest {
    #[serde(default)]
    pub text: String,
    /// Optional per-request override of the configured sensitivity preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,
}

// ============ Prediction ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    #[serde(rename = "AI")]
    Ai,
    Human,
    Uncertain,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Ai => "AI",
            Prediction::Human => "Human",
            Prediction::Uncertain => "Uncertain",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Feature Vector ============

/// Number of features in [`FeatureVector`].
pub const FEATURE_COUNT: usize = 11;

/// Fixed-schema linguistic summary of a document.
///
/// Field order is the order of the model dot-product. The same record is
/// reused for per-feature model parameters (centers, scales, coefficients).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    /// Mean words per sentence.
    pub avg_sentence_length: f64,
    /// Coefficient of variation of sentence lengths.
    pub sentence_length_variation: f64,
    /// Distinct case-folded words per total words, 0-100.
    pub vocabulary_richness: f64,
    /// Punctuation characters per 100 words.
    pub punctuation_density: f64,
    /// Connective words/phrases per 100 words.
    pub connective_rate: f64,
    /// First-person pronouns per 100 words.
    pub first_person_rate: f64,
    /// Passive constructions per 100 words.
    pub passive_voice_rate: f64,
    /// Mean characters per word.
    pub avg_word_length: f64,
    /// Clause markers per sentence.
    pub sentence_complexity: f64,
    /// Repeated trigrams per total trigrams, 0-1.
    pub repetition_score: f64,
    /// Composite formality, 0-100.
    pub formality_score: f64,
}

impl FeatureVector {
    pub const NAMES: [&'static str; FEATURE_COUNT] = [
        "avg_sentence_length",
        "sentence_length_variation",
        "vocabulary_richness",
        "punctuation_density",
        "connective_rate",
        "first_person_rate",
        "passive_voice_rate",
        "avg_word_length",
        "sentence_complexity",
        "repetition_score",
        "formality_score",
    ];

    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.avg_sentence_length,
            self.sentence_length_variation,
            self.vocabulary_richness,
            self.punctuation_density,
            self.connective_rate,
            self.first_person_rate,
            self.passive_voice_rate,
            self.avg_word_length,
            self.sentence_complexity,
            self.repetition_score,
            self.formality_score,
        ]
    }

    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [avg_sentence_length, sentence_length_variation, vocabulary_richness, punctuation_density, connective_rate, first_person_rate, passive_voice_rate, avg_word_length, sentence_complexity, repetition_score, formality_score] =
            values;
        Self {
            avg_sentence_length,
            sentence_length_variation,
            vocabulary_richness,
            punctuation_density,
            connective_rate,
            first_person_rate,
            passive_voice_rate,
            avg_word_length,
            sentence_complexity,
            repetition_score,
            formality_score,
        }
    }

    /// Same value for every feature.
    pub fn splat(value: f64) -> Self {
        Self::from_array([value; FEATURE_COUNT])
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Caller-facing subset, rounded for display.
    pub fn summary(&self) -> FeatureSummary {
        FeatureSummary {
            avg_sentence_length: round_to(self.avg_sentence_length, 2),
            vocabulary_richness: round_to(self.vocabulary_richness, 1),
            formality_score: round_to(self.formality_score, 1),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub avg_sentence_length: f64,
    pub vocabulary_richness: f64,
    pub formality_score: f64,
}

// ============ Score Result ============

/// Uncalibrated linear scores per class.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    pub ai: f64,
    pub human: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub prediction: Prediction,
    pub confidence: f64,
    pub ai_probability: f64,
    pub human_probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSummary>,
    pub message: String,
}

// ============ API Payloads ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub status: String,
    pub message: String,
    pub usage: String,
    pub reference: String,
    pub version: String,
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_serializes_as_labels() {
        assert_eq!(serde_json::to_string(&Prediction::Ai).unwrap(), "\"AI\"");
        assert_eq!(serde_json::to_string(&Prediction::Human).unwrap(), "\"Human\"");
        assert_eq!(serde_json::to_string(&Prediction::Uncertain).unwrap(), "\"Uncertain\"");
    }

    #[test]
    fn test_feature_array_order_matches_names() {
        let mut values = [0.0; FEATURE_COUNT];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f64;
        }
        let fv = FeatureVector::from_array(values);
        assert_eq!(fv.avg_sentence_length, 0.0);
        assert_eq!(fv.vocabulary_richness, 2.0);
        assert_eq!(fv.formality_score, 10.0);
        assert_eq!(fv.to_array(), values);
        assert_eq!(FeatureVector::NAMES[10], "formality_score");
    }

    #[test]
    fn test_score_result_omits_missing_optionals() {
        let result = ScoreResult {
            prediction: Prediction::Human,
            confidence: 80.0,
            ai_probability: 20.0,
            human_probability: 80.0,
            word_count: None,
            features: None,
            message: "ok".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("word_count").is_none());
        assert!(json.get("features").is_none());
        assert_eq!(json["prediction"], "Human");
        assert_eq!(json["ai_probability"], 20.0);
    }

    #[test]
    fn test_summary_rounding() {
        let fv = FeatureVector {
            avg_sentence_length: 12.3456,
            vocabulary_richness: 64.66666,
            formality_score: 48.98,
            ..FeatureVector::default()
        };
        let s = fv.summary();
        assert_eq!(s.avg_sentence_length, 12.35);
        assert_eq!(s.vocabulary_richness, 64.7);
        assert_eq!(s.formality_score, 49.0);
    }
}
