// Detector Core Services

pub mod config_store;
pub mod detection;
pub mod text_processor;

pub use config_store::*;
pub use text_processor::*;

pub use detection::{
    build_message,
    confidence_for,
    extract,
    ClassWeights,
    ConfidenceBand,
    DetectionSensitivity,
    Detector,
    ModelWeights,
    ProbabilityCondition,
    Scorer,
    VerdictPolicy,
    VerdictRule,
};
