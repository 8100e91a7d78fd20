// Sensitivity utilities
// Sensitivity selects the verdict policy; it never changes probabilities.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Prediction;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSensitivity {
    Low,
    #[default]
    Medium,
    High,
}

impl DetectionSensitivity {
    /// Lenient parse: anything unrecognized is `Medium`.
    pub fn from_str(val: &str) -> Self {
        match val.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// `(ai_above, human_below)` probability thresholds, in percent.
    pub fn thresholds(self) -> (f64, f64) {
        match self {
            Self::Low => (70.0, 30.0),
            Self::Medium => (65.0, 35.0),
            Self::High => (60.0, 40.0),
        }
    }

    pub fn policy(self) -> VerdictPolicy {
        let (ai_above, human_below) = self.thresholds();
        VerdictPolicy::from_thresholds(ai_above, human_below)
    }
}

/// Predicate over the AI probability (0-100).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "camelCase")]
pub enum ProbabilityCondition {
    /// Strictly greater than the threshold.
    Above { threshold: f64 },
    /// Strictly less than the threshold.
    Below { threshold: f64 },
    Otherwise,
}

impl ProbabilityCondition {
    pub fn matches(&self, ai_probability: f64) -> bool {
        match *self {
            Self::Above { threshold } => ai_probability > threshold,
            Self::Below { threshold } => ai_probability < threshold,
            Self::Otherwise => true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictRule {
    pub condition: ProbabilityCondition,
    pub prediction: Prediction,
}

/// Ordered rule table, evaluated top to bottom; first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictPolicy {
    pub rules: Vec<VerdictRule>,
}

impl Default for VerdictPolicy {
    fn default() -> Self {
        DetectionSensitivity::Medium.policy()
    }
}

impl VerdictPolicy {
    pub fn from_thresholds(ai_above: f64, human_below: f64) -> Self {
        Self {
            rules: vec![
                VerdictRule {
                    condition: ProbabilityCondition::Above { threshold: ai_above },
                    prediction: Prediction::Ai,
                },
                VerdictRule {
                    condition: ProbabilityCondition::Below { threshold: human_below },
                    prediction: Prediction::Human,
                },
                VerdictRule {
                    condition: ProbabilityCondition::Otherwise,
                    prediction: Prediction::Uncertain,
                },
            ],
        }
    }

    /// First matching rule's prediction; `Uncertain` when nothing matches.
    pub fn decide(&self, ai_probability: f64) -> Prediction {
        self.rules
            .iter()
            .find(|rule| rule.condition.matches(ai_probability))
            .map(|rule| rule.prediction)
            .unwrap_or(Prediction::Uncertain)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.is_empty() {
            return Err(ConfigError::InvalidModel("verdict policy has no rules".to_string()));
        }
        for rule in &self.rules {
            let threshold = match rule.condition {
                ProbabilityCondition::Above { threshold } | ProbabilityCondition::Below { threshold } => threshold,
                ProbabilityCondition::Otherwise => continue,
            };
            if !(0.0..=100.0).contains(&threshold) {
                return Err(ConfigError::InvalidModel(format!(
                    "verdict threshold {} is outside 0-100",
                    threshold
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_order() {
        let (low_ai, low_human) = DetectionSensitivity::Low.thresholds();
        let (mid_ai, mid_human) = DetectionSensitivity::Medium.thresholds();
        let (high_ai, high_human) = DetectionSensitivity::High.thresholds();
        assert!(low_ai > mid_ai && mid_ai > high_ai);
        assert!(low_human < mid_human && mid_human < high_human);
    }

    #[test]
    fn test_from_str_defaults_to_medium() {
        assert_eq!(DetectionSensitivity::from_str(" HIGH "), DetectionSensitivity::High);
        assert_eq!(DetectionSensitivity::from_str("low"), DetectionSensitivity::Low);
        assert_eq!(DetectionSensitivity::from_str("extreme"), DetectionSensitivity::Medium);
    }

    #[test]
    fn test_default_policy_boundaries() {
        let policy = VerdictPolicy::default();
        assert_eq!(policy.decide(65.1), Prediction::Ai);
        assert_eq!(policy.decide(65.0), Prediction::Uncertain);
        assert_eq!(policy.decide(50.0), Prediction::Uncertain);
        assert_eq!(policy.decide(35.0), Prediction::Uncertain);
        assert_eq!(policy.decide(34.9), Prediction::Human);
        assert_eq!(policy.decide(0.0), Prediction::Human);
        assert_eq!(policy.decide(100.0), Prediction::Ai);
    }

    #[test]
    fn test_threshold_consistency_sweep() {
        let policy = VerdictPolicy::default();
        for tenth in 0..=1000 {
            let p = tenth as f64 / 10.0;
            let expected = if p > 65.0 {
                Prediction::Ai
            } else if p < 35.0 {
                Prediction::Human
            } else {
                Prediction::Uncertain
            };
            assert_eq!(policy.decide(p), expected, "p = {}", p);
        }
    }

    #[test]
    fn test_rules_evaluate_in_order() {
        let policy = VerdictPolicy {
            rules: vec![
                VerdictRule {
                    condition: ProbabilityCondition::Otherwise,
                    prediction: Prediction::Human,
                },
                VerdictRule {
                    condition: ProbabilityCondition::Above { threshold: 10.0 },
                    prediction: Prediction::Ai,
                },
            ],
        };
        assert_eq!(policy.decide(99.0), Prediction::Human);
    }

    #[test]
    fn test_no_matching_rule_is_uncertain() {
        let policy = VerdictPolicy {
            rules: vec![VerdictRule {
                condition: ProbabilityCondition::Above { threshold: 90.0 },
                prediction: Prediction::Ai,
            }],
        };
        assert_eq!(policy.decide(40.0), Prediction::Uncertain);
    }

    #[test]
    fn test_policy_parses_from_json() {
        let json = r#"{"rules":[
            {"condition":{"when":"above","threshold":80.0},"prediction":"AI"},
            {"condition":{"when":"below","threshold":20.0},"prediction":"Human"},
            {"condition":{"when":"otherwise"},"prediction":"Uncertain"}
        ]}"#;
        let policy: VerdictPolicy = serde_json::from_str(json).unwrap();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.decide(70.0), Prediction::Uncertain);
        assert_eq!(policy.decide(81.0), Prediction::Ai);
    }

    #[test]
    fn test_validate_rejects_bad_policies() {
        assert!(VerdictPolicy { rules: vec![] }.validate().is_err());
        assert!(VerdictPolicy::from_thresholds(120.0, 35.0).validate().is_err());
    }
}
