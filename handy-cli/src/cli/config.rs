//! Style presets loaded from TOML.
//!
//! ```toml
//! roughness = 1.5
//! hachure_angle = -45
//! hachure_perturbation = 5
//! fill_gap = 6
//! ```
//!
//! Every key is optional. Values go through the renderer's setters, so a
//! negative gap is clamped and a non-finite value is ignored exactly as if it
//! had been set from code.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use handy::StyleConfig;

use super::error::CliError;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleFile {
    pub roughness: Option<f64>,
    pub hachure_angle: Option<f64>,
    pub hachure_perturbation: Option<f64>,
    pub handy: Option<bool>,
    pub fill_gap: Option<f64>,
    pub bowing: Option<f64>,
    pub max_offset: Option<f64>,
    pub alternating: Option<bool>,
    pub seed: Option<u64>,
}

impl StyleFile {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let file: StyleFile = toml::from_str(&content).map_err(|source| CliError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded style preset from {}", path.display());
        Ok(file)
    }

    /// Overlay the values present in the file onto `style`.
    pub fn apply(&self, style: &mut StyleConfig) {
        if let Some(v) = self.roughness {
            style.set_roughness(v);
        }
        if let Some(v) = self.hachure_angle {
            style.set_hachure_angle(v);
        }
        if let Some(v) = self.hachure_perturbation {
            style.set_hachure_perturbation(v);
        }
        if let Some(v) = self.handy {
            style.set_handy(v);
        }
        if let Some(v) = self.fill_gap {
            style.set_fill_gap(v);
        }
        if let Some(v) = self.bowing {
            style.set_bowing(v);
        }
        if let Some(v) = self.max_offset {
            style.set_max_offset(v);
        }
        if let Some(v) = self.alternating {
            style.set_alternating(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let file: StyleFile = toml::from_str("roughness = 2.5\nfill_gap = 8").unwrap();
        let mut style = StyleConfig::default();
        file.apply(&mut style);

        assert_eq!(style.roughness(), 2.5);
        assert_eq!(style.fill_gap(), 8.0);
        assert_eq!(style.hachure_angle(), StyleConfig::default().hachure_angle());
        assert!(style.is_handy());
    }

    #[test]
    fn negative_values_are_clamped() {
        let file: StyleFile = toml::from_str("roughness = -1\nfill_gap = -3").unwrap();
        let mut style = StyleConfig::default();
        file.apply(&mut style);

        assert_eq!(style.roughness(), 0.0);
        assert!(style.fill_gap() > 0.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<StyleFile>("wobble = 3").is_err());
    }
}
