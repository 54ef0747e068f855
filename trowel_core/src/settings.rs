//! # Estimator Settings
//!
//! Material constants that are not part of a job's input: mortar densities
//! and bulking factor, grout density, adhesive rates and the adhesive
//! catalog. Defaults are built in; a TOML file can override any subset.
//!
//! ```toml
//! [mortar]
//! cement_bag_kg = 20.0
//!
//! [grout]
//! density = 1.6
//! ```
//!
//! Sections and keys left out of the file keep their defaults.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::adhesive::AdhesiveSettings;
use crate::calculations::grout::GroutSettings;
use crate::calculations::masonry::MortarSettings;
use crate::errors::{CalcError, CalcResult};

/// Built-in settings, used by every `calculate` that has no `_with` argument.
pub static DEFAULT_SETTINGS: Lazy<EstimatorSettings> = Lazy::new(EstimatorSettings::default);

/// All tunable estimator constants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    pub mortar: MortarSettings,
    pub grout: GroutSettings,
    pub adhesive: AdhesiveSettings,
}

impl EstimatorSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let settings: EstimatorSettings =
            toml::from_str(text).map_err(|e| CalcError::serialization(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded estimator settings");
        Ok(settings)
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.mortar.validate()?;
        self.grout.validate()?;
        self.adhesive.validate()?;
        Ok(())
    }

    /// Render as TOML (all keys, defaults included).
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DEFAULT_SETTINGS.validate().is_ok());
        assert_eq!(DEFAULT_SETTINGS.grout.density, 2.0);
        assert_eq!(DEFAULT_SETTINGS.mortar.cement_bag_kg, 25.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = EstimatorSettings::from_toml_str(
            r#"
            [mortar]
            cement_bag_kg = 20.0

            [grout]
            density = 1.6
            "#,
        )
        .unwrap();
        assert_eq!(settings.mortar.cement_bag_kg, 20.0);
        assert_eq!(settings.mortar.sand_density_kg_m3, 1600.0);
        assert_eq!(settings.grout.density, 1.6);
        assert_eq!(settings.adhesive, AdhesiveSettings::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(EstimatorSettings::from_toml_str("").unwrap(), EstimatorSettings::default());
    }

    #[test]
    fn test_catalog_override() {
        let settings = EstimatorSettings::from_toml_str(
            r#"
            [[adhesive.products]]
            key = "house-paste"
            name = "House paste"
            dry_wall_rate_kg_per_m2 = 1.8
            wet_area_rate_kg_per_m2 = 2.2
            bag_size_kg = 10.0
            package = "tub"
            "#,
        )
        .unwrap();
        assert_eq!(settings.adhesive.products.len(), 1);
        assert_eq!(settings.adhesive.products[0].key, "house-paste");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = EstimatorSettings::from_toml_str("[grout]\ndensity = 0.0\n").unwrap_err();
        assert_eq!(err.to_string(), "Grout density must be greater than zero.");

        let err = EstimatorSettings::from_toml_str("[grout]\ndensity = \"heavy\"\n").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_toml_output_parses_back() {
        let text = DEFAULT_SETTINGS.to_toml_string().unwrap();
        assert!(text.contains("[mortar]"));
        assert_eq!(EstimatorSettings::from_toml_str(&text).unwrap(), *DEFAULT_SETTINGS);
    }

    #[test]
    fn test_missing_file() {
        let err = EstimatorSettings::load(Path::new("/nonexistent/trowel.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
