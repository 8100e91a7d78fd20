// Detector
// Extract -> score pipeline bound to one immutable model configuration.

use std::sync::OnceLock;
use std::time::Instant;

use tracing::{info, warn};

use super::features::extract;
use super::scorer::Scorer;
use super::sensitivity::DetectionSensitivity;
use crate::error::{ConfigError, DetectError};
use crate::models::ScoreResult;
use crate::services::config_store::{AppConfig, ConfigStore};
use crate::services::text_processor::count_words;

#[derive(Debug, Clone)]
pub struct Detector {
    scorer: Scorer,
    min_text_chars: usize,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            scorer: Scorer::default(),
            min_text_chars: AppConfig::default().detection.min_text_chars,
        }
    }
}

impl Detector {
    pub fn new(scorer: Scorer, min_text_chars: usize) -> Self {
        Self { scorer, min_text_chars }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            scorer: Scorer::new(config.model.clone(), config.effective_policy()),
            min_text_chars: config.detection.min_text_chars,
        })
    }

    /// Process-wide detector, configured once from the config store.
    ///
    /// A missing or unreadable config falls back to the built-in model.
    pub fn shared() -> &'static Detector {
        static DETECTOR: OnceLock<Detector> = OnceLock::new();
        DETECTOR.get_or_init(|| {
            let Some(store) = ConfigStore::from_env() else {
                info!("detector.config_dir_unavailable; using built-in model");
                return Detector::default();
            };
            match store.load().and_then(|config| Detector::from_config(&config)) {
                Ok(detector) => detector,
                Err(e) => {
                    warn!(error = %e, path = %store.config_file().display(), "detector.config_invalid; using built-in model");
                    Detector::default()
                }
            }
        })
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Minimum trimmed length enforced at the request boundary.
    pub fn min_text_chars(&self) -> usize {
        self.min_text_chars
    }

    /// Full pipeline with the configured verdict policy.
    pub fn detect(&self, text: &str) -> Result<ScoreResult, DetectError> {
        self.run(text, None)
    }

    /// Full pipeline with a sensitivity preset instead of the configured policy.
    pub fn detect_with_sensitivity(
        &self,
        text: &str,
        sensitivity: DetectionSensitivity,
    ) -> Result<ScoreResult, DetectError> {
        self.run(text, Some(sensitivity))
    }

    fn run(&self, text: &str, sensitivity: Option<DetectionSensitivity>) -> Result<ScoreResult, DetectError> {
        let t0 = Instant::now();
        let features = extract(text)?;
        let mut result = match sensitivity {
            Some(s) => self.scorer.score_with_policy(&features, &s.policy()),
            None => self.scorer.score(&features),
        };
        result.word_count = Some(count_words(text));

        info!(
            prediction = %result.prediction,
            ai_probability = result.ai_probability,
            confidence = result.confidence,
            word_count = result.word_count.unwrap_or(0),
            elapsed_us = t0.elapsed().as_micros() as u64,
            "detection.complete"
        );
        Ok(result)
    }
}
