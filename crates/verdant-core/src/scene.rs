//! Renderer-agnostic 3D preview of a terrain model.
//!
//! World space is a square `footprint` wide, centred on the origin, with
//! elevation scaled by `vertical_exaggeration`. Colours are linear RGB in
//! `[0, 1]`.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::config::SceneConfig;
use crate::design::DesignPlan;
use crate::recommend::ElementKind;
use crate::terrain::{DetectedFeature, FeatureKind, TerrainModel};

// ── Colour ────────────────────────────────────────────────────────────────────

/// Hue at the lowest elevation (green).
const HUE_LOW: f32 = 0.30;
/// Hue at the highest elevation (brown).
const HUE_HIGH: f32 = 0.08;
const RAMP_SATURATION: f32 = 0.7;
const RAMP_LIGHTNESS: f32 = 0.5;

const TRUNK: u32 = 0x8B4513;
const FOLIAGE: u32 = 0x228B22;
const STRUCTURE: u32 = 0xA9A9A9;
const WATER: u32 = 0x4682B4;
const WATER_OPACITY: f32 = 0.7;

/// `0xRRGGBB` → RGB in `[0, 1]`.
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// HSL (all components in `[0, 1]`) → RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(1.0) * 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c * 0.5;
    [r + m, g + m, b + m]
}

/// Ramp colour for elevation normalized into `[0, 1]`.
pub fn elevation_color(t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    hsl_to_rgb(HUE_LOW + (HUE_HIGH - HUE_LOW) * t, RAMP_SATURATION, RAMP_LIGHTNESS)
}

pub fn element_color(element: ElementKind) -> [f32; 3] {
    hex_rgb(match element {
        ElementKind::Water => WATER,
        ElementKind::Wood => FOLIAGE,
        ElementKind::Fire => 0xB22222,
        ElementKind::Earth => 0xC2B280,
        ElementKind::Metal => 0xC0C0C0,
    })
}

// ── Scene types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Primitive {
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32, segments: u32 },
    Cone { radius: f32, height: f32, segments: u32 },
    Box { width: f32, height: f32, depth: f32 },
    Plane { width: f32, depth: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshPart {
    pub primitive: Primitive,
    pub position: [f32; 3],
    /// Euler angles in radians, XYZ order.
    pub rotation: [f32; 3],
    pub color: [f32; 3],
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMesh {
    pub feature: FeatureKind,
    pub parts: Vec<MeshPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneMarker {
    pub name: String,
    pub element: ElementKind,
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub footprint: f32,
    pub vertical_exaggeration: f32,
    pub point_size: f32,
    pub grid_divisions: u32,
    pub points: Vec<ScenePoint>,
    pub meshes: Vec<FeatureMesh>,
    #[serde(default)]
    pub zone_markers: Vec<ZoneMarker>,
}

impl SceneGraph {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.meshes.is_empty() && self.zone_markers.is_empty()
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct SceneProjector {
    config: SceneConfig,
}

impl SceneProjector {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    fn empty(&self) -> SceneGraph {
        SceneGraph {
            footprint: self.config.footprint,
            vertical_exaggeration: self.config.vertical_exaggeration,
            point_size: self.config.point_size,
            grid_divisions: self.config.grid_divisions,
            points: Vec::new(),
            meshes: Vec::new(),
            zone_markers: Vec::new(),
        }
    }

    /// Normalized `(x, z)` and elevation → world position.
    fn world(&self, x: f64, y: f32, z: f64) -> [f32; 3] {
        let f = self.config.footprint;
        [
            (x as f32 - 0.5) * f,
            y * self.config.vertical_exaggeration,
            (z as f32 - 0.5) * f,
        ]
    }

    /// One point per elevation sample plus one mesh per detected feature.
    pub fn project(&self, terrain: &TerrainModel) -> SceneGraph {
        let mut scene = self.empty();
        let Some((lo, hi)) = terrain.elevation_range() else {
            return scene;
        };
        let span = hi - lo;

        scene.points = terrain
            .samples
            .iter()
            .map(|s| {
                let t = if span > 0.0 { (s.y - lo) / span } else { 0.0 };
                ScenePoint { position: self.world(s.x, s.y, s.z), color: elevation_color(t) }
            })
            .collect();
        scene.meshes = terrain.features.iter().map(|f| self.feature_mesh(f)).collect();

        tracing::debug!(points = scene.points.len(), meshes = scene.meshes.len(), "projected terrain");
        scene
    }

    /// `project` plus one marker per planting zone at its section anchor.
    pub fn project_with_design(&self, terrain: &TerrainModel, design: &DesignPlan) -> SceneGraph {
        let mut scene = self.project(terrain);
        let Some(grid) = terrain.elevation_grid() else {
            return scene;
        };
        scene.zone_markers = design
            .planting_zones
            .iter()
            .map(|zone| {
                let (x, z) = zone.location.anchor();
                let y = grid.sample_clamped(x, z).unwrap_or(0.0);
                ZoneMarker {
                    name: zone.name.clone(),
                    element: zone.symbolic_element,
                    position: self.world(x, y, z),
                    color: element_color(zone.symbolic_element),
                }
            })
            .collect();
        scene
    }

    fn feature_mesh(&self, feature: &DetectedFeature) -> FeatureMesh {
        let p = &feature.position;
        let [x, y, z] = self.world(p.x, p.y as f32, p.z);
        let scale = self.config.footprint * 0.5;
        let w = feature.size.width as f32 * scale;
        let d = feature.size.height as f32 * scale;
        let part = |primitive, dy: f32, rotation, color: u32, opacity| MeshPart {
            primitive,
            position: [x, y + dy, z],
            rotation,
            color: hex_rgb(color),
            opacity,
        };

        let parts = match feature.kind {
            FeatureKind::Tree => vec![
                part(
                    Primitive::Cylinder { radius_top: 0.2, radius_bottom: 0.2, height: 1.0, segments: 8 },
                    0.5,
                    [0.0; 3],
                    TRUNK,
                    1.0,
                ),
                part(Primitive::Cone { radius: 1.0, height: 2.0, segments: 8 }, 2.0, [0.0; 3], FOLIAGE, 1.0),
            ],
            FeatureKind::Structure => vec![part(
                Primitive::Box { width: w, height: 1.0, depth: d },
                0.5,
                [0.0; 3],
                STRUCTURE,
                1.0,
            )],
            FeatureKind::Water => vec![part(
                Primitive::Plane { width: w, depth: d },
                0.05,
                [-FRAC_PI_2, 0.0, 0.0],
                WATER,
                WATER_OPACITY,
            )],
        };
        FeatureMesh { feature: feature.kind, parts }
    }
}
