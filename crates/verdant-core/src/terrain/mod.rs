//! Terrain synthesis: depth scan → elevation samples, contours, features.

pub mod contour;
pub mod features;
pub mod grid;
pub mod scan;
pub mod synthetic;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use features::{DepthBlockDetector, FeatureDetector, ReferenceLayout};
pub use grid::ElevationGrid;
pub use scan::{DepthFormat, DepthScan};
pub use synthetic::SyntheticTerrain;

// ── Model types ───────────────────────────────────────────────────────────────

/// One grid sample. `x`/`z` are normalized into `[0, 1)`; `y` is elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub x: f64,
    pub y: f32,
    pub z: f64,
}

/// One connected iso-elevation line; points are `(x, z)` in trace order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourCurve {
    pub elevation: f32,
    pub points: Vec<[f64; 2]>,
}

impl ContourCurve {
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2 && self.points.first() == self.points.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Tree,
    Structure,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Footprint extent in normalized units (`height` runs along z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedFeature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub position: Position,
    pub size: FeatureSize,
}

/// Coarse slope classification of the sampled relief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainType {
    #[serde(rename = "Flat")]
    Flat,
    #[serde(rename = "Slightly sloped")]
    SlightlySloped,
    #[serde(rename = "Moderately sloped")]
    ModeratelySloped,
    #[serde(rename = "Steep")]
    Steep,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl TerrainType {
    /// Label for a relief (max − min elevation).
    pub fn from_relief(relief: f32) -> Self {
        match relief {
            r if !r.is_finite() => TerrainType::Unknown,
            r if r < 1.0 => TerrainType::Flat,
            r if r < 8.0 => TerrainType::SlightlySloped,
            r if r < 15.0 => TerrainType::ModeratelySloped,
            _ => TerrainType::Steep,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TerrainType::Flat => "Flat",
            TerrainType::SlightlySloped => "Slightly sloped",
            TerrainType::ModeratelySloped => "Moderately sloped",
            TerrainType::Steep => "Steep",
            TerrainType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sampling geometry of a model: grid size plus the scan size and step it came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub cols: usize,
    pub rows: usize,
    pub step: usize,
    pub width: usize,
    pub height: usize,
}

/// Largest grid a scan may declare; bigger scans are treated as unusable.
pub const MAX_GRID_SAMPLES: usize = 1 << 22;

impl GridSpec {
    pub fn new(width: usize, height: usize, step: usize) -> Self {
        let step = step.max(1);
        Self { cols: width.div_ceil(step), rows: height.div_ceil(step), step, width, height }
    }

    /// Saturates at `usize::MAX` for absurd declared sizes.
    pub fn sample_count(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    /// Non-empty and within `MAX_GRID_SAMPLES`.
    pub fn is_usable(&self) -> bool {
        (1..=MAX_GRID_SAMPLES).contains(&self.sample_count())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainModel {
    /// Column-major (x outer, z inner) over `grid`.
    pub samples: Vec<ElevationSample>,
    pub contours: Vec<ContourCurve>,
    pub features: Vec<DetectedFeature>,
    pub terrain_type: TerrainType,
    pub grid: GridSpec,
}

impl TerrainModel {
    /// Model for a missing or unusable scan.
    pub fn empty() -> Self {
        Self {
            samples: Vec::new(),
            contours: Vec::new(),
            features: Vec::new(),
            terrain_type: TerrainType::Unknown,
            grid: GridSpec::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(min, max)` elevation, None when empty.
    pub fn elevation_range(&self) -> Option<(f32, f32)> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.y), hi.max(s.y))
        }))
    }

    pub fn has_feature(&self, kind: FeatureKind) -> bool {
        self.features.iter().any(|f| f.kind == kind)
    }

    /// Rebuild the regular grid the samples were taken on.
    /// None when the samples do not match the recorded grid size.
    pub fn elevation_grid(&self) -> Option<ElevationGrid> {
        let g = self.grid;
        if self.samples.is_empty() || self.samples.len() != g.sample_count() {
            return None;
        }
        let mut out = ElevationGrid::new(
            g.cols,
            g.rows,
            g.step as f64 / g.width as f64,
            g.step as f64 / g.height as f64,
            0.0,
        );
        for col in 0..g.cols {
            for row in 0..g.rows {
                out.set(row, col, self.samples[col * g.rows + row].y);
            }
        }
        Some(out)
    }
}

/// Anything that turns a (possibly absent) depth scan into a terrain model.
pub trait TerrainSource {
    fn synthesize(&self, scan: Option<&DepthScan>) -> TerrainModel;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relief_thresholds() {
        assert_eq!(TerrainType::from_relief(0.0), TerrainType::Flat);
        assert_eq!(TerrainType::from_relief(0.99), TerrainType::Flat);
        assert_eq!(TerrainType::from_relief(1.0), TerrainType::SlightlySloped);
        assert_eq!(TerrainType::from_relief(6.2), TerrainType::SlightlySloped);
        assert_eq!(TerrainType::from_relief(8.0), TerrainType::ModeratelySloped);
        assert_eq!(TerrainType::from_relief(15.0), TerrainType::Steep);
        assert_eq!(TerrainType::from_relief(f32::NAN), TerrainType::Unknown);
    }

    #[test]
    fn terrain_type_serializes_as_label() {
        let json = serde_json::to_string(&TerrainType::SlightlySloped).unwrap();
        assert_eq!(json, "\"Slightly sloped\"");
        assert_eq!(TerrainType::Steep.to_string(), "Steep");
    }

    #[test]
    fn grid_spec_rounds_partial_steps_up() {
        assert_eq!(GridSpec::new(640, 480, 10).sample_count(), 3072);
        let g = GridSpec::new(25, 11, 10);
        assert_eq!((g.cols, g.rows), (3, 2));
    }

    #[test]
    fn oversized_grid_saturates_and_is_unusable() {
        let g = GridSpec::new(usize::MAX / 2, usize::MAX / 2, 10);
        assert_eq!(g.sample_count(), usize::MAX);
        assert!(!g.is_usable());
        assert!(!GridSpec::new(100_000, 100_000, 10).is_usable());
        assert!(!GridSpec::new(0, 480, 10).is_usable());
        assert!(GridSpec::new(640, 480, 10).is_usable());
    }

    #[test]
    fn closed_curves_end_where_they_start() {
        let ring = ContourCurve { elevation: 1.0, points: vec![[0.0, 0.0], [1.0, 0.0], [0.5, 1.0], [0.0, 0.0]] };
        assert!(ring.is_closed());
        let open = ContourCurve { elevation: 1.0, points: vec![[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]] };
        assert!(!open.is_closed());
        let stub = ContourCurve { elevation: 1.0, points: vec![[0.0, 0.0], [0.0, 0.0]] };
        assert!(!stub.is_closed());
    }

    #[test]
    fn detected_feature_uses_type_key() {
        let f = ReferenceLayout::features()[0];
        let v = serde_json::to_value(f).unwrap();
        assert_eq!(v["type"], "tree");
        assert_eq!(v["size"]["height"], 0.3);
    }

    #[test]
    fn empty_model_has_no_grid() {
        let m = TerrainModel::empty();
        assert!(m.is_empty());
        assert_eq!(m.terrain_type, TerrainType::Unknown);
        assert!(m.elevation_range().is_none());
        assert!(m.elevation_grid().is_none());
    }
}
