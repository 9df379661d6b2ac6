//! Widget configuration.
//!
//! [`FormsConfig`] gathers the tunables the widgets use. Every field has a
//! default, so a host can deserialize a partial TOML document:
//!
//! ```
//! use horizon_forms::FormsConfig;
//!
//! let config = FormsConfig::from_toml_str(r#"
//!     [date_picker]
//!     year_window = 5
//! "#).unwrap();
//!
//! assert_eq!(config.date_picker.year_window, 5);
//! assert_eq!(config.validation.min_length, 9);
//! ```

use std::path::Path;
use std::time::Duration;

use horizon_forms_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level configuration for the form widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Input validation settings.
    pub validation: ValidationConfig,
    /// Date picker settings.
    pub date_picker: DatePickerConfig,
    /// Hour picker settings.
    pub hour_picker: HourPickerConfig,
    /// Initial data source settings.
    pub data: DataConfig,
}

impl FormsConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

/// Input validation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum number of characters the length rule requires.
    pub min_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { min_length: 9 }
    }
}

/// Date picker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerConfig {
    /// Number of years offered on each side of the current year.
    pub year_window: u32,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self { year_window: 10 }
    }
}

/// Hour picker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourPickerConfig {
    /// Delay before the first scroll settle pass after mount, in milliseconds.
    pub settle_delay_ms: u64,
    /// Delay of the correction pass after the first one, in milliseconds.
    pub correction_delay_ms: u64,
    /// How many times each wheel repeats its values.
    pub wheel_cycles: usize,
}

impl HourPickerConfig {
    /// The first settle delay.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// The correction pass delay.
    pub fn correction_delay(&self) -> Duration {
        Duration::from_millis(self.correction_delay_ms)
    }
}

impl Default for HourPickerConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
            correction_delay_ms: 50,
            wheel_cycles: 1,
        }
    }
}

/// Initial data source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Simulated latency of the mock data service, in milliseconds.
    pub mock_delay_ms: u64,
}

impl DataConfig {
    /// The mock latency.
    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            mock_delay_ms: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FormsConfig::default();
        assert_eq!(config.validation.min_length, 9);
        assert_eq!(config.date_picker.year_window, 10);
        assert_eq!(config.hour_picker.settle_delay(), Duration::from_millis(100));
        assert_eq!(config.hour_picker.correction_delay(), Duration::from_millis(50));
        assert_eq!(config.hour_picker.wheel_cycles, 1);
        assert_eq!(config.data.mock_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = FormsConfig::from_toml_str("").unwrap();
        assert_eq!(config, FormsConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = FormsConfig::from_toml_str(
            r#"
            [validation]
            min_length = 12

            [hour_picker]
            wheel_cycles = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.validation.min_length, 12);
        assert_eq!(config.hour_picker.wheel_cycles, 3);
        assert_eq!(config.hour_picker.settle_delay_ms, 100);
        assert_eq!(config.date_picker.year_window, 10);
    }

    #[test]
    fn test_invalid_document() {
        let err = FormsConfig::from_toml_str("[validation]\nmin_length = \"nine\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[data]\nmock_delay_ms = 10").unwrap();

        let config = FormsConfig::load(file.path()).unwrap();
        assert_eq!(config.data.mock_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FormsConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
