// Scorer
// Linear model -> logistic calibration -> verdict, confidence and message.

use tracing::debug;

use super::report::build_message;
use super::sensitivity::VerdictPolicy;
use super::weights::ModelWeights;
use crate::models::{round_to, FeatureVector, Prediction, RawScores, ScoreResult};

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: ModelWeights,
    policy: VerdictPolicy,
}

impl Scorer {
    pub fn new(weights: ModelWeights, policy: VerdictPolicy) -> Self {
        Self { weights, policy }
    }

    pub fn weights(&self) -> &ModelWeights {
        &self.weights
    }

    pub fn policy(&self) -> &VerdictPolicy {
        &self.policy
    }

    /// Uncalibrated per-class linear scores.
    pub fn raw_scores(&self, features: &FeatureVector) -> RawScores {
        let standardized = self.weights.standardize(features);
        RawScores {
            ai: self.weights.ai.linear_score(&standardized),
            human: self.weights.human.linear_score(&standardized),
        }
    }

    /// AI probability in percent, unrounded.
    pub fn ai_probability(&self, features: &FeatureVector) -> f64 {
        (sigmoid_clamped(self.raw_scores(features).ai) * 100.0).clamp(0.0, 100.0)
    }

    pub fn score(&self, features: &FeatureVector) -> ScoreResult {
        self.score_with_policy(features, &self.policy)
    }

    /// Score using a policy other than the configured one.
    pub fn score_with_policy(&self, features: &FeatureVector, policy: &VerdictPolicy) -> ScoreResult {
        let raw = self.raw_scores(features);
        let ai_probability = round_to((sigmoid_clamped(raw.ai) * 100.0).clamp(0.0, 100.0), 1);
        let human_probability = round_to(100.0 - ai_probability, 1);

        let prediction = policy.decide(ai_probability);
        let confidence = round_to(confidence_for(prediction, ai_probability, human_probability), 1);

        debug!(
            raw_ai = raw.ai,
            raw_human = raw.human,
            ai_probability,
            prediction = %prediction,
            "features.scored"
        );

        ScoreResult {
            prediction,
            confidence,
            ai_probability,
            human_probability,
            word_count: None,
            features: Some(features.summary()),
            message: build_message(prediction, confidence),
        }
    }
}

/// Certainty for a decided class; closeness to the midpoint when uncertain.
pub fn confidence_for(prediction: Prediction, ai_probability: f64, human_probability: f64) -> f64 {
    match prediction {
        Prediction::Uncertain => 100.0 - (ai_probability - 50.0).abs() * 2.0,
        Prediction::Ai | Prediction::Human => ai_probability.max(human_probability),
    }
}

fn sigmoid_clamped(x: f64) -> f64 {
    if x > 40.0 {
        1.0
    } else if x < -40.0 {
        0.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}
