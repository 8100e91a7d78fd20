// Detection Module
// Stylometric AI-text detection organized into specialized submodules:
// - features: raw text -> FeatureVector
// - weights: pre-fit linear model parameters
// - scorer: logistic calibration, verdict and confidence
// - sensitivity: verdict rule tables and sensitivity presets
// - report: presentational messages
// - detector: extract + score bound to one configuration

pub mod detector;
pub mod features;
pub mod lexicon;
pub mod report;
pub mod scorer;
pub mod sensitivity;
pub mod weights;

#[cfg(test)]
pub(crate) mod samples;

pub use detector::Detector;
pub use features::extract;
pub use report::{build_message, ConfidenceBand};
pub use scorer::{confidence_for, Scorer};
pub use sensitivity::{DetectionSensitivity, ProbabilityCondition, VerdictPolicy, VerdictRule};
pub use weights::{ClassWeights, ModelWeights};
