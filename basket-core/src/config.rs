//! Basket configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. An explicit path (`basket --config <path>`)
//! 2. `.basket/config.yml` in the current directory - project-level config
//! 3. `<platform config dir>/basket/config.yml` - user-level config
//! 4. Built-in defaults
//!
//! Only the first file found is read; files are not merged.
//!
//! ## Example
//!
//! ```yaml
//! languages: [en, es, fr]
//! fallback_language: en
//! detector:
//!   min_chars: 3
//!   lexicon_weight: 1.0
//! suggestion_count: 3
//! catalog_path: ./my-store.yml
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::language::Language;

/// Project-level config location, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".basket/config.yml";

/// Config file name inside the platform config directory
pub const USER_CONFIG_FILE: &str = "config.yml";

/// Tuning for [`crate::LanguageDetector`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorSettings {
    /// Minimum number of letters before detection is attempted
    pub min_chars: usize,

    /// Weight of one lexicon hit relative to the whole trigram signal
    pub lexicon_weight: f64,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            min_chars: 3,
            lexicon_weight: 1.0,
        }
    }
}

/// Top-level Basket configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Languages detection may return; must be non-empty
    pub languages: Vec<Language>,

    /// Language used when detection is inconclusive; must be enabled
    pub fallback_language: Language,

    /// Detector tuning
    pub detector: DetectorSettings,

    /// How many random catalog items to suggest next to the seasonal ones
    pub suggestion_count: usize,

    /// External catalog file, replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            fallback_language: Language::BASE,
            detector: DetectorSettings::default(),
            suggestion_count: 3,
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Parse settings from a YAML string and validate them
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings =
            serde_yaml_ng::from_str(content).context("Failed to parse settings YAML")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut settings = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        // Relative catalog paths are relative to the config file
        if let Some(catalog_path) = settings.catalog_path.take() {
            let resolved = if catalog_path.is_relative() {
                path.parent()
                    .map(|dir| dir.join(&catalog_path))
                    .unwrap_or(catalog_path)
            } else {
                catalog_path
            };
            settings.catalog_path = Some(resolved);
        }

        info!("Loaded configuration from {}", path.display());
        Ok(settings)
    }

    /// Discover and load settings
    ///
    /// Resolution order:
    /// 1. `explicit` (must exist)
    /// 2. `.basket/config.yml` under the current directory
    /// 3. the platform config directory
    /// 4. defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file does not exist: {}", path.display());
            }
            return Self::load_from_path(path);
        }

        let project = PathBuf::from(PROJECT_CONFIG_PATH);
        if project.is_file() {
            return Self::load_from_path(&project);
        }

        if let Some(user) = Self::user_config_path() {
            if user.is_file() {
                return Self::load_from_path(&user);
            }
            debug!("No user configuration at {}", user.display());
        }

        debug!("Using default configuration");
        Ok(Self::default())
    }

    /// Platform config file location (e.g. `~/.config/basket/config.yml` on Linux)
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "basket")
            .map(|dirs| dirs.config_dir().join(USER_CONFIG_FILE))
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("At least one language must be enabled");
        }
        if !self.languages.contains(&self.fallback_language) {
            bail!(
                "Fallback language '{}' is not in the enabled languages",
                self.fallback_language
            );
        }
        if !self.detector.lexicon_weight.is_finite() || self.detector.lexicon_weight < 0.0 {
            bail!(
                "detector.lexicon_weight must be a non-negative number (got {})",
                self.detector.lexicon_weight
            );
        }
        Ok(())
    }

    /// Whether `language` is enabled
    pub fn is_enabled(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Load the configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display())),
            None => Catalog::builtin().context("Built-in catalog is invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.languages, Language::ALL.to_vec());
        assert_eq!(settings.fallback_language, Language::En);
        assert_eq!(settings.suggestion_count, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("languages: [en, es]\n").unwrap();
        assert_eq!(settings.languages, vec![Language::En, Language::Es]);
        assert_eq!(settings.detector, DetectorSettings::default());
        assert_eq!(settings.suggestion_count, 3);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let result = Settings::from_yaml("languages: [en, de]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_fallback_must_be_enabled() {
        let result = Settings::from_yaml("languages: [es, fr]\nfallback_language: en\n");
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("not in the enabled languages"));
    }

    #[test]
    fn test_empty_language_set_is_rejected() {
        assert!(Settings::from_yaml("languages: []\n").is_err());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Settings::load(Some(&temp_dir.path().join("nope.yml")));
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_relative_catalog_path_resolves_against_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yml");
        std::fs::write(&config_path, "catalog_path: store.yml\n").unwrap();

        let settings = Settings::load(Some(&config_path)).unwrap();
        assert_eq!(
            settings.catalog_path,
            Some(temp_dir.path().join("store.yml"))
        );
    }

    #[test]
    fn test_default_catalog_is_builtin() {
        let catalog = Settings::default().catalog().unwrap();
        assert!(catalog.lookup("milk").is_some());
    }
}
