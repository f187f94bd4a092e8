//! Calculator configuration.
//!
//! A small TOML file names the realm documents to load and the label
//! style used for display fields:
//!
//! ```toml
//! labels = "classic"
//! realm_files = ["data/abyss.json", "data/dream.json"]
//! ```
//!
//! Relative realm paths resolve against the directory of the config file.

use crate::calculator::MaterialCalculator;
use crate::error::CalcError;
use crate::labels::LabelStyle;
use crate::loader::load_realm_files;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings for building a [`MaterialCalculator`].
///
/// # Examples
///
/// ```rust
/// use dropcalc::config::CalculatorConfig;
/// use dropcalc::labels::LabelStyle;
///
/// let config = CalculatorConfig::from_toml_str(r#"realm_files = ["abyss.json"]"#).unwrap();
/// assert_eq!(config.labels, LabelStyle::Codes);
/// assert_eq!(config.realm_files.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Label style for display fields.
    #[serde(default)]
    pub labels: LabelStyle,

    /// Realm documents to load, in order.
    #[serde(default)]
    pub realm_files: Vec<PathBuf>,
}

impl CalculatorConfig {
    /// Parse a config from TOML text. Paths are kept as written.
    pub fn from_toml_str(text: &str) -> Result<Self, CalcError> {
        toml::from_str(text).map_err(|e| CalcError::parse("calculator config", e))
    }

    /// Read a config file, resolving relative realm paths against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CalcError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CalcError::io(path, e))?;
        let mut config: Self =
            toml::from_str(&text).map_err(|e| CalcError::parse(path.display().to_string(), e))?;

        if let Some(base) = path.parent() {
            config.realm_files = config
                .realm_files
                .into_iter()
                .map(|file| if file.is_relative() { base.join(file) } else { file })
                .collect();
        }
        Ok(config)
    }

    /// Load every configured realm into a calculator.
    pub fn build(&self) -> Result<MaterialCalculator, CalcError> {
        let realms = load_realm_files(&self.realm_files)?;
        info!(realms = realms.len(), labels = ?self.labels, "building calculator");
        Ok(MaterialCalculator::new(realms).with_labels(self.labels.labels()))
    }
}

impl MaterialCalculator {
    /// Build a calculator from a config file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, CalcError> {
        CalculatorConfig::load(path)?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            labels = "classic"
            realm_files = ["a.json", "/abs/b.json"]
            "#,
        )
        .unwrap();
        assert_eq!(config.labels, LabelStyle::Classic);
        assert_eq!(
            config.realm_files,
            vec![PathBuf::from("a.json"), PathBuf::from("/abs/b.json")]
        );
    }

    #[test]
    fn test_empty_config() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CalculatorConfig::from_toml_str("realms = []").unwrap_err();
        assert!(matches!(err, CalcError::Parse { .. }));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("abyss.json"),
            r#"{"realm_name": "Abyss", "layers": {"layer_1": {}}}"#,
        )
        .unwrap();
        let config_path = dir.path().join("calc.toml");
        let contents = "labels = \"classic\"\nrealm_files = [\"abyss.json\"]\n";
        std::fs::write(&config_path, contents).unwrap();

        let config = CalculatorConfig::load(&config_path).unwrap();
        assert_eq!(config.realm_files, vec![dir.path().join("abyss.json")]);

        let calculator = MaterialCalculator::from_config_file(&config_path).unwrap();
        assert_eq!(calculator.realm_names(), vec!["Abyss"]);
    }
}
