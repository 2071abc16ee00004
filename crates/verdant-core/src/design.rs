//! Design synthesis: land summary + recommendations → design plan.
//!
//! The plan has a fixed shape: five planting zones (one per symbolic
//! element), two pathways and two water features. What varies is the plant
//! list of each zone, drawn from the resolved recommendations, and, under
//! the feature-aware placement policy, where the pond and main path go.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{DesignConfig, PlacementPolicy};
use crate::error::DesignError;
use crate::location::LocationProfile;
use crate::recommend::{ElementKind, PlantCategory, Recommendations};
use crate::terrain::{DetectedFeature, FeatureKind, TerrainModel, TerrainType};

// ── Site description ──────────────────────────────────────────────────────────

/// User-entered facts about the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSurvey {
    pub land_size: String,
    pub soil_type: String,
    pub existing_features: Vec<String>,
}

impl SiteSurvey {
    /// `existing_features` is a comma-separated list as typed by the user.
    pub fn new(land_size: &str, soil_type: &str, existing_features: &str) -> Self {
        Self {
            land_size: land_size.trim().to_string(),
            soil_type: soil_type.trim().to_string(),
            existing_features: split_feature_list(existing_features),
        }
    }
}

/// Split comma-separated text into trimmed, non-empty items.
pub fn split_feature_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

pub const RAINFALL: &str = "Natural rainfall";
pub const DETECTED_WATER: &str = "Detected water body";

/// Everything design synthesis needs to know about the land.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandSummary {
    pub location: LocationProfile,
    pub survey: SiteSurvey,
    pub terrain_type: TerrainType,
    pub has_scan: bool,
    pub has_image: bool,
    pub features: Vec<DetectedFeature>,
    pub contour_count: usize,
    pub water_sources: Vec<String>,
}

impl LandSummary {
    pub fn from_terrain(
        location: LocationProfile,
        survey: SiteSurvey,
        terrain: &TerrainModel,
        has_image: bool,
    ) -> Self {
        let mut water_sources = vec![RAINFALL.to_string()];
        if terrain.has_feature(FeatureKind::Water) {
            water_sources.push(DETECTED_WATER.to_string());
        }
        Self {
            location,
            survey,
            terrain_type: terrain.terrain_type,
            has_scan: !terrain.is_empty(),
            has_image,
            features: terrain.features.clone(),
            contour_count: terrain.contours.len(),
            water_sources,
        }
    }

    fn first_feature(&self, kind: FeatureKind) -> Option<&DetectedFeature> {
        self.features.iter().find(|f| f.kind == kind)
    }
}

// ── Plan types ────────────────────────────────────────────────────────────────

/// Coarse position on the site. North is `z = 0`, east is `x = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "Northern section")]
    North,
    #[serde(rename = "Southern section")]
    South,
    #[serde(rename = "Eastern section")]
    East,
    #[serde(rename = "Western section")]
    West,
    #[serde(rename = "Center")]
    Center,
}

/// Half-width of the square counted as `Center`.
const CENTER_RADIUS: f64 = 0.15;

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::North => "Northern section",
            Section::South => "Southern section",
            Section::East => "Eastern section",
            Section::West => "Western section",
            Section::Center => "Center",
        }
    }

    /// Section containing normalized `(x, z)`.
    pub fn containing(x: f64, z: f64) -> Self {
        let (dx, dz) = (x - 0.5, z - 0.5);
        if dx.abs().max(dz.abs()) < CENTER_RADIUS {
            Section::Center
        } else if dx.abs() >= dz.abs() {
            if dx > 0.0 { Section::East } else { Section::West }
        } else if dz > 0.0 {
            Section::South
        } else {
            Section::North
        }
    }

    /// Representative normalized `(x, z)` for the section.
    pub fn anchor(self) -> (f64, f64) {
        match self {
            Section::North => (0.5, 0.2),
            Section::South => (0.5, 0.8),
            Section::East => (0.8, 0.5),
            Section::West => (0.2, 0.5),
            Section::Center => (0.5, 0.5),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantingZone {
    pub name: String,
    pub location: Section,
    pub plants: Vec<String>,
    pub symbolic_element: ElementKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    #[serde(rename = "type")]
    pub kind: String,
    pub material: String,
    pub pattern: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub purpose: String,
}

/// A finished design. Built only by `DesignSynthesizer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignPlan {
    pub planting_zones: Vec<PlantingZone>,
    pub pathways: Vec<Pathway>,
    pub water_features: Vec<WaterFeature>,
}

impl DesignPlan {
    pub fn zone(&self, element: ElementKind) -> Option<&PlantingZone> {
        self.planting_zones.iter().find(|z| z.symbolic_element == element)
    }
}

// ── Zone templates ────────────────────────────────────────────────────────────

struct ZoneTemplate {
    name: &'static str,
    section: Section,
    element: ElementKind,
    /// Plant categories that suit the zone, most characteristic first.
    categories: &'static [PlantCategory],
    description: &'static str,
}

const ZONES: [ZoneTemplate; 5] = [
    ZoneTemplate {
        name: "Food Forest",
        section: Section::East,
        element: ElementKind::Wood,
        categories: &[PlantCategory::Trees, PlantCategory::Edibles, PlantCategory::Shrubs],
        description: "A multi-layered edible ecosystem that produces fruit, berries, and herbs.",
    },
    ZoneTemplate {
        name: "Vegetable Garden",
        section: Section::South,
        element: ElementKind::Fire,
        categories: &[PlantCategory::Edibles, PlantCategory::Annuals],
        description: "Annual vegetables arranged in companion planting patterns.",
    },
    ZoneTemplate {
        name: "Water Garden",
        section: Section::North,
        element: ElementKind::Water,
        categories: &[PlantCategory::Perennials, PlantCategory::Groundcovers],
        description: "A small pond with edible aquatic plants and habitat for beneficial wildlife.",
    },
    ZoneTemplate {
        name: "Meditation Space",
        section: Section::Center,
        element: ElementKind::Earth,
        categories: &[PlantCategory::Groundcovers, PlantCategory::Perennials, PlantCategory::Shrubs],
        description: "A peaceful central area for relaxation and contemplation.",
    },
    ZoneTemplate {
        name: "Herb Spiral",
        section: Section::West,
        element: ElementKind::Metal,
        categories: &[PlantCategory::Perennials, PlantCategory::Edibles],
        description: "A spiral-shaped herb garden that creates multiple microclimates.",
    },
];

/// Interleave `lists` (first of each, then second of each, …), skipping
/// repeats, until `limit` names are taken.
fn round_robin(lists: &[&[String]], limit: usize) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(limit);
    let longest = lists.iter().map(|l| l.len()).max().unwrap_or(0);
    'outer: for i in 0..longest {
        for list in lists {
            if out.len() >= limit {
                break 'outer;
            }
            if let Some(name) = list.get(i) {
                if seen.insert(name.as_str()) {
                    out.push(name.clone());
                }
            }
        }
    }
    out
}

// ── Synthesizer ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct DesignSynthesizer {
    config: DesignConfig,
}

impl DesignSynthesizer {
    pub fn new(config: DesignConfig) -> Self {
        Self { config }
    }

    /// Build a plan. Both inputs are required.
    pub fn synthesize(
        &self,
        land: Option<&LandSummary>,
        recommendations: Option<&Recommendations>,
    ) -> Result<DesignPlan, DesignError> {
        let land = land.ok_or(DesignError::MissingLandSummary)?;
        let recs = recommendations.ok_or(DesignError::MissingRecommendations)?;

        let planting_zones = ZONES.iter().map(|t| self.zone(t, recs)).collect();
        let plan = DesignPlan {
            planting_zones,
            pathways: self.pathways(land),
            water_features: self.water_features(land),
        };
        tracing::info!(
            zones = plan.planting_zones.len(),
            policy = ?self.config.placement,
            "synthesized design"
        );
        Ok(plan)
    }

    fn zone(&self, template: &ZoneTemplate, recs: &Recommendations) -> PlantingZone {
        let element_plants = recs
            .element(template.element)
            .map(|e| e.plants.as_slice())
            .unwrap_or(&[]);
        let category_plants: Vec<String> = template
            .categories
            .iter()
            .flat_map(|&cat| recs.plants_in(cat).iter().cloned())
            .collect();
        PlantingZone {
            name: template.name.to_string(),
            location: template.section,
            plants: round_robin(&[element_plants, category_plants.as_slice()], self.config.zone_plant_limit),
            symbolic_element: template.element,
            description: template.description.to_string(),
        }
    }

    fn pathways(&self, land: &LandSummary) -> Vec<Pathway> {
        let mut main_purpose = "Primary access through the garden".to_string();
        if self.config.placement == PlacementPolicy::FeatureAware {
            if let Some(s) = land.first_feature(FeatureKind::Structure) {
                let section = Section::containing(s.position.x, s.position.z);
                main_purpose = format!("{main_purpose}, routed around the structure in the {section}");
            }
        }
        vec![
            Pathway {
                kind: "Main path".into(),
                material: "Wood chips".into(),
                pattern: "Curved".into(),
                purpose: main_purpose,
            },
            Pathway {
                kind: "Secondary paths".into(),
                material: "Stepping stones".into(),
                pattern: "Meandering".into(),
                purpose: "Access to individual planting zones".into(),
            },
        ]
    }

    fn water_features(&self, land: &LandSummary) -> Vec<WaterFeature> {
        let pond_section = match self.config.placement {
            PlacementPolicy::FeatureAware => land
                .first_feature(FeatureKind::Water)
                .map(|w| Section::containing(w.position.x, w.position.z))
                .unwrap_or(Section::North),
            PlacementPolicy::Static => Section::North,
        };
        vec![
            WaterFeature {
                kind: "Pond".into(),
                location: pond_section.label().into(),
                purpose: "Habitat, irrigation, and feng shui water element".into(),
            },
            WaterFeature {
                kind: "Swale".into(),
                location: "Along contour lines".into(),
                purpose: "Water harvesting and passive irrigation".into(),
            },
        ]
    }
}
