// Model Weights
// Pre-fit linear model parameters, kept as data so they can be swapped
// without touching the scoring code.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{FeatureVector, FEATURE_COUNT};

/// Coefficients and bias for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassWeights {
    pub coefficients: FeatureVector,
    pub bias: f64,
}

impl ClassWeights {
    /// Linear score over already-standardized feature values.
    pub fn linear_score(&self, standardized: &[f64; FEATURE_COUNT]) -> f64 {
        self.coefficients
            .to_array()
            .iter()
            .zip(standardized.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias
    }

    /// Weights of the complementary class in a two-class logistic model.
    pub fn negated(&self) -> Self {
        Self {
            coefficients: FeatureVector::from_array(self.coefficients.to_array().map(|w| -w)),
            bias: -self.bias,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelWeights {
    pub version: String,
    /// Per-feature centering applied before the dot product.
    pub center: FeatureVector,
    /// Per-feature scale applied before the dot product; must be positive.
    pub scale: FeatureVector,
    pub ai: ClassWeights,
    pub human: ClassWeights,
}

impl Default for ModelWeights {
    fn default() -> Self {
        let center = FeatureVector {
            avg_sentence_length: 15.0,
            sentence_length_variation: 0.45,
            vocabulary_richness: 60.0,
            punctuation_density: 12.0,
            connective_rate: 5.0,
            first_person_rate: 2.0,
            passive_voice_rate: 1.0,
            avg_word_length: 4.8,
            sentence_complexity: 1.0,
            repetition_score: 0.05,
            formality_score: 60.0,
        };
        let scale = FeatureVector {
            avg_sentence_length: 10.0,
            sentence_length_variation: 0.2,
            vocabulary_richness: 15.0,
            punctuation_density: 6.0,
            connective_rate: 3.0,
            first_person_rate: 3.0,
            passive_voice_rate: 1.5,
            avg_word_length: 1.0,
            sentence_complexity: 1.0,
            repetition_score: 0.1,
            formality_score: 20.0,
        };
        // Positive coefficients push toward AI.
        let ai = ClassWeights {
            coefficients: FeatureVector {
                avg_sentence_length: 0.3,
                sentence_length_variation: -0.5,
                vocabulary_richness: -0.4,
                punctuation_density: -0.4,
                connective_rate: 0.8,
                first_person_rate: -1.2,
                passive_voice_rate: 0.4,
                avg_word_length: 0.6,
                sentence_complexity: 0.2,
                repetition_score: 0.5,
                formality_score: 0.9,
            },
            bias: 0.0,
        };
        let human = ai.negated();
        Self {
            version: "stylometric-lr-v1".to_string(),
            center,
            scale,
            ai,
            human,
        }
    }
}

impl ModelWeights {
    /// Reject weights that would make scoring non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let params = [
            ("center", &self.center),
            ("ai.coefficients", &self.ai.coefficients),
            ("human.coefficients", &self.human.coefficients),
        ];
        for (label, values) in params {
            if !values.is_finite() {
                return Err(ConfigError::InvalidModel(format!("{} contains non-finite values", label)));
            }
        }
        for (name, scale) in FeatureVector::NAMES.iter().zip(self.scale.to_array()) {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ConfigError::InvalidModel(format!(
                    "scale for {} must be positive, got {}",
                    name, scale
                )));
            }
        }
        if !self.ai.bias.is_finite() || !self.human.bias.is_finite() {
            return Err(ConfigError::InvalidModel("bias must be finite".to_string()));
        }
        Ok(())
    }

    /// Center and scale each feature.
    pub fn standardize(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let values = features.to_array();
        let center = self.center.to_array();
        let scale = self.scale.to_array();
        std::array::from_fn(|i| (values[i] - center[i]) / scale[i])
    }
}
