//! Plant and symbolic-element recommendations.
//!
//! `store` holds the layered tables (location, hardiness, climate, default);
//! `resolver` walks them in priority order and merges the result.

pub mod resolver;
pub mod store;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::location::{ClimateClass, HardinessClass};

pub use resolver::{merge_unique, RecommendationResolver};
pub use store::RecommendationStore;

/// Plant grouping used by every recommendation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantCategory {
    Trees,
    Shrubs,
    Perennials,
    Annuals,
    Groundcovers,
    Edibles,
}

impl PlantCategory {
    pub const ALL: [PlantCategory; 6] = [
        PlantCategory::Trees,
        PlantCategory::Shrubs,
        PlantCategory::Perennials,
        PlantCategory::Annuals,
        PlantCategory::Groundcovers,
        PlantCategory::Edibles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlantCategory::Trees => "trees",
            PlantCategory::Shrubs => "shrubs",
            PlantCategory::Perennials => "perennials",
            PlantCategory::Annuals => "annuals",
            PlantCategory::Groundcovers => "groundcovers",
            PlantCategory::Edibles => "edibles",
        }
    }
}

impl fmt::Display for PlantCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the five symbolic zoning elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Water,
    Wood,
    Fire,
    Earth,
    Metal,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Water,
        ElementKind::Wood,
        ElementKind::Fire,
        ElementKind::Earth,
        ElementKind::Metal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Water => "water",
            ElementKind::Wood => "wood",
            ElementKind::Fire => "fire",
            ElementKind::Earth => "earth",
            ElementKind::Metal => "metal",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered plant names per category. Category order follows `PlantCategory::ALL`.
pub type PlantSelection = BTreeMap<PlantCategory, Vec<String>>;

/// Guidance for one symbolic element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementProfile {
    pub description: String,
    pub placement: String,
    pub plants: Vec<String>,
    pub features: Vec<String>,
}

pub type ElementTable = BTreeMap<ElementKind, ElementProfile>;

/// Which table produced the plant selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PlantOrigin {
    /// Exact location entry, returned verbatim.
    Location { code: String },
    /// Hardiness entry (when present) merged over a climate or default entry.
    /// `climate` is `None` when the default table supplied the base.
    Layered {
        hardiness: Option<HardinessClass>,
        climate: Option<ClimateClass>,
    },
}

/// Which table produced the element guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "climate", rename_all = "snake_case")]
pub enum ElementOrigin {
    Climate(ClimateClass),
    Default,
}

/// Resolved plant and element guidance for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub plants: PlantSelection,
    pub elements: ElementTable,
    pub plant_origin: PlantOrigin,
    pub element_origin: ElementOrigin,
}

impl Recommendations {
    /// Plants for `category`, empty when the category is absent.
    pub fn plants_in(&self, category: PlantCategory) -> &[String] {
        self.plants.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn element(&self, kind: ElementKind) -> Option<&ElementProfile> {
        self.elements.get(&kind)
    }
}
