//! User settings
//!
//! Stored as a small JSON document. Every field has a default so older or
//! hand-written files with missing keys still load.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::curves::{CurveOptions, TorqueThreshold};
use crate::unit_conversion::MAX_DISPLAY_DECIMALS;
use crate::units::UnitSelection;

/// Errors from loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document could not be parsed or written
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display units
    pub units: UnitSelection,

    /// Whether zero-torque samples are plotted
    pub torque_threshold: TorqueThreshold,

    /// Decimal places for power values
    pub power_decimals: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            units: UnitSelection::default(),
            torque_threshold: TorqueThreshold::default(),
            power_decimals: 2,
        }
    }
}

impl Settings {
    /// Parse settings, filling in defaults for missing keys.
    /// `power_decimals` is capped at [`MAX_DISPLAY_DECIMALS`].
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(text)?;
        if settings.power_decimals > MAX_DISPLAY_DECIMALS {
            tracing::warn!(
                "power_decimals {} capped at {}",
                settings.power_decimals,
                MAX_DISPLAY_DECIMALS
            );
            settings.power_decimals = MAX_DISPLAY_DECIMALS;
        }
        Ok(settings)
    }

    /// Load settings from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let settings = Self::from_json(&content)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to disk as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Options for curve derivation under these settings
    pub fn curve_options(&self) -> CurveOptions {
        CurveOptions {
            units: self.units,
            torque_threshold: self.torque_threshold,
            power_decimals: self.power_decimals.min(MAX_DISPLAY_DECIMALS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{PowerUnit, UnitStandard};

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.units.standard(), UnitStandard::Imperial);
    }

    #[test]
    fn test_partial_units() {
        let settings = Settings::from_json(r#"{"units":{"standard":"metric-ps"},"power_decimals":1}"#).unwrap();
        assert_eq!(settings.units.power(), PowerUnit::Ps);
        assert_eq!(settings.power_decimals, 1);
        assert_eq!(settings.torque_threshold, TorqueThreshold::NonNegative);
    }

    #[test]
    fn test_power_decimals_capped() {
        let settings = Settings::from_json(r#"{"power_decimals":400}"#).unwrap();
        assert_eq!(settings.power_decimals, MAX_DISPLAY_DECIMALS);

        let hand_built = Settings {
            power_decimals: u32::MAX,
            ..Settings::default()
        };
        assert_eq!(hand_built.curve_options().power_decimals, MAX_DISPLAY_DECIMALS);
    }

    #[test]
    fn test_invalid_unit_rejected() {
        let err = Settings::from_json(r#"{"units":{"standard":"furlongs"}}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }
}
