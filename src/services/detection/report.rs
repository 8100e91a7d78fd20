// Result messages
// Presentational text only; carries no information beyond the verdict.

use crate::models::Prediction;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConfidenceBand {
    High,
    Moderate,
    Low,
    Borderline,
}

impl ConfidenceBand {
    pub fn classify(prediction: Prediction, confidence: f64) -> Self {
        if prediction == Prediction::Uncertain {
            return Self::Borderline;
        }
        if confidence >= 85.0 {
            Self::High
        } else if confidence >= 70.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high confidence",
            Self::Moderate => "moderate confidence",
            Self::Low => "low confidence",
            Self::Borderline => "borderline",
        }
    }
}

pub fn build_message(prediction: Prediction, confidence: f64) -> String {
    let band = ConfidenceBand::classify(prediction, confidence);
    match prediction {
        Prediction::Ai => format!(
            "Analysis complete. The text appears to be AI-generated ({}, {:.1}%).",
            band.label(),
            confidence
        ),
        Prediction::Human => format!(
            "Analysis complete. The text appears to be human-written ({}, {:.1}%).",
            band.label(),
            confidence
        ),
        Prediction::Uncertain => format!(
            "Analysis complete. The result is {}; the text could be either AI-generated or human-written.",
            band.label()
        ),
    }
}
