//! Pipeline configuration.
//!
//! Every field has a default reproducing the reference behaviour, and every
//! section is `#[serde(default)]`, so a partial JSON file only overrides what
//! it names.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Shape of the bounded elevation perturbation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Perturbation {
    /// Independent uniform draws in `[0, noise_amplitude)` per sample.
    Uniform,
    /// Perlin noise remapped into `[0, noise_amplitude)`; spatially smooth.
    Coherent,
}

/// Terrain synthesis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub seed: u64,
    /// Sampling step in depth-buffer pixels.
    pub grid_step: usize,
    /// Amplitude of each of the sine/cosine undulation terms.
    pub amplitude: f32,
    /// Upper bound of the added perturbation.
    pub noise_amplitude: f32,
    pub perturbation: Perturbation,
    /// Number of iso-elevation levels traced.
    pub contour_levels: usize,
    /// Depth-map blocks per axis used by feature detection.
    pub feature_blocks: usize,
    /// Upper bound on detected features kept per scan.
    pub max_features: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_step: 10,
            amplitude: 2.0,
            noise_amplitude: 0.5,
            perturbation: Perturbation::Uniform,
            contour_levels: 3,
            feature_blocks: 8,
            max_features: 8,
        }
    }
}

/// How design placement text reacts to detected features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementPolicy {
    /// Fixed placement text regardless of what the scan found.
    Static,
    /// Pond follows a detected water body; main path avoids structures.
    FeatureAware,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    pub placement: PlacementPolicy,
    /// Plants listed per planting zone.
    pub zone_plant_limit: usize,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self { placement: PlacementPolicy::Static, zone_plant_limit: 5 }
    }
}

/// World-space scaling for the 3D preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Side length of the square world footprint.
    pub footprint: f32,
    pub vertical_exaggeration: f32,
    pub point_size: f32,
    pub grid_divisions: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            footprint: 20.0,
            vertical_exaggeration: 5.0,
            point_size: 0.2,
            grid_divisions: 20,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub terrain: TerrainConfig,
    pub design: DesignConfig,
    pub scene: SceneConfig,
}

fn check_scalar(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScalar { field, value: value as f64 })
    }
}

impl PipelineConfig {
    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terrain.grid_step == 0 {
            return Err(ConfigError::ZeroGridStep);
        }
        check_scalar("terrain.amplitude", self.terrain.amplitude)?;
        check_scalar("terrain.noise_amplitude", self.terrain.noise_amplitude)?;
        check_scalar("scene.footprint", self.scene.footprint)?;
        check_scalar("scene.vertical_exaggeration", self.scene.vertical_exaggeration)?;
        check_scalar("scene.point_size", self.scene.point_size)?;
        Ok(())
    }
}
