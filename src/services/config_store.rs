// Configuration Storage Service
// Handles config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::services::detection::sensitivity::{DetectionSensitivity, VerdictPolicy};
use crate::services::detection::weights::ModelWeights;

const CONFIG_DIR_ENV: &str = "AI_DETECTOR_CONFIG_DIR";
const BACKUPS_TO_KEEP: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub model: ModelWeights,
    /// Explicit rule table; overrides the sensitivity preset when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict_policy: Option<VerdictPolicy>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            detection: DetectionConfig::default(),
            model: ModelWeights::default(),
            verdict_policy: None,
        }
    }
}

impl AppConfig {
    /// Policy in effect: the explicit table, else the sensitivity preset.
    pub fn effective_policy(&self) -> VerdictPolicy {
        self.verdict_policy
            .clone()
            .unwrap_or_else(|| DetectionSensitivity::from_str(&self.detection.sensitivity).policy())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;
        self.effective_policy().validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionConfig {
    #[serde(default = "default_sensitivity")]
    pub sensitivity: String,
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
            min_text_chars: default_min_text_chars(),
        }
    }
}

fn default_version() -> String { "1.0.0".to_string() }
fn default_sensitivity() -> String { "medium".to_string() }
fn default_min_text_chars() -> usize { 50 }

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Store rooted at `AI_DETECTOR_CONFIG_DIR`, else the platform config dir.
    pub fn from_env() -> Option<Self> {
        match std::env::var(CONFIG_DIR_ENV) {
            Ok(p) if !p.trim().is_empty() => Some(Self::new(PathBuf::from(p))),
            _ => Self::default_config_dir().map(Self::new),
        }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ai-text-detector"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }

    /// Load configuration from file; defaults when the file is absent.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.config_file.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        info!(
            path = %self.config_file.display(),
            model = %config.model.version,
            sensitivity = %config.detection.sensitivity,
            "config.loaded"
        );
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.ensure_dir()?;

        // Create backup if file exists
        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    fn create_backup(&self) -> Result<(), ConfigError> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir)?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));
        fs::copy(&self.config_file, &backup_file)?;

        self.cleanup_old_backups(&backup_dir, BACKUPS_TO_KEEP)
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &Path, keep: usize) -> Result<(), ConfigError> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Oldest first
        entries.sort_by_key(|e| {
            e.metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
        });

        let remove_count = entries.len() - keep;
        for entry in entries.iter().take(remove_count) {
            if let Err(e) = fs::remove_file(entry.path()) {
                warn!(path = %entry.path().display(), error = %e, "config.backup_cleanup_failed");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Prediction;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ai_detector_{}_{}_{}",
            name,
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.detection.sensitivity, "medium");
        assert_eq!(config.detection.min_text_chars, 50);
        assert!(config.verdict_policy.is_none());
        assert_eq!(config.effective_policy(), VerdictPolicy::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"detection":{"sensitivity":"high"}}"#).unwrap();
        assert_eq!(config.detection.min_text_chars, 50);
        assert_eq!(config.model.version, ModelWeights::default().version);
        assert_eq!(config.effective_policy().decide(62.0), Prediction::Ai);
    }

    #[test]
    fn test_explicit_policy_overrides_sensitivity() {
        let config = AppConfig {
            detection: DetectionConfig {
                sensitivity: "low".to_string(),
                min_text_chars: 50,
            },
            verdict_policy: Some(VerdictPolicy::from_thresholds(55.0, 45.0)),
            ..AppConfig::default()
        };
        assert_eq!(config.effective_policy().decide(56.0), Prediction::Ai);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let store = ConfigStore::new(scratch_dir("missing"));
        let config = store.load().unwrap();
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn test_save_then_load_and_backup() {
        let dir = scratch_dir("save");
        let store = ConfigStore::new(dir.clone());

        let mut config = AppConfig::default();
        config.detection.sensitivity = "high".to_string();
        store.save(&config).unwrap();
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.detection.sensitivity, "high");
        let backups = fs::read_dir(dir.join("backups")).unwrap().count();
        assert_eq!(backups, 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_invalid_model() {
        let dir = scratch_dir("invalid");
        fs::create_dir_all(&dir).unwrap();
        let mut config = AppConfig::default();
        config.model.scale.connective_rate = -1.0;
        fs::write(dir.join("config.json"), serde_json::to_string(&config).unwrap()).unwrap();

        let store = ConfigStore::new(dir.clone());
        assert!(matches!(store.load(), Err(ConfigError::InvalidModel(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.json"), "{ not json").unwrap();

        let store = ConfigStore::new(dir.clone());
        assert!(matches!(store.load(), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
