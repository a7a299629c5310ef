use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::{
    price_list::{DEFAULT_PLACEHOLDER_NAME, PriceList},
    price_tier::{TierThresholds, TierThresholdsError},
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid tier thresholds: {0}")]
    Tiers(#[from] TierThresholdsError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency: String,
    pub placeholder_name: String,
    pub tiers: TierThresholds,
}

impl Settings {
    pub fn load(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let default = Self::default();

        match Self::load_from_file(config_path) {
            Ok(settings) => Ok(settings),
            Err(err) if config_path.is_none() => {
                warn!("Could not read config file: {err}. Using default configuration.",);
                Ok(default)
            }
            Err(err) => Err(err),
        }
    }

    fn load_from_file(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let path = config_path.as_deref().unwrap_or("config.toml");

        let settings = Config::builder()
            .add_source(File::with_name(path).required(config_path.is_some()))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.tiers.validate()?;

        Ok(settings)
    }

    pub fn price_list(&self) -> PriceList {
        PriceList::new(self.placeholder_name.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "BYN".to_string(),
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
            tiers: TierThresholds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let settings = Settings::default();
        assert_eq!(settings.currency, "BYN");
        assert_eq!(settings.placeholder_name, "Item");
        assert_eq!(settings.tiers, TierThresholds::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("placeholder_name = \"Товар\"\n\n[tiers]\nexcellent = 15.0\n");
        let path = file.path().to_string_lossy().to_string();

        let settings = Settings::load(&Some(path)).unwrap();
        assert_eq!(settings.placeholder_name, "Товар");
        assert_eq!(settings.currency, "BYN");
        assert_eq!(settings.tiers.excellent, 15.0);
        assert_eq!(settings.tiers.very_expensive, 60.0);
    }

    #[test]
    fn rejects_unordered_tiers() {
        let file = write_config("[tiers]\nnormal = 100.0\n");
        let path = file.path().to_string_lossy().to_string();

        let err = Settings::load(&Some(path)).unwrap_err();
        assert!(matches!(err, SettingsError::Tiers(_)));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml").to_string_lossy().to_string();

        assert!(matches!(
            Settings::load(&Some(path)),
            Err(SettingsError::Load(_))
        ));
    }
}
