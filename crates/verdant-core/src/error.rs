//! Error types surfaced by the core library.
//!
//! Location and terrain handling are total; the only hard pipeline failure is
//! asking for a design before its inputs exist.

use thiserror::Error;

use crate::recommend::{ElementKind, PlantCategory};

/// Design synthesis was invoked before both of its inputs were available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    #[error("design synthesis needs a land summary; analyze the terrain first")]
    MissingLandSummary,
    #[error("design synthesis needs resolved recommendations; set a location first")]
    MissingRecommendations,
}

/// A recommendation store that cannot guarantee full fallback coverage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("default plant table has no `{0}` entry")]
    MissingDefaultCategory(PlantCategory),
    #[error("default element table has no `{0}` entry")]
    MissingDefaultElement(ElementKind),
    #[error("malformed recommendation tables: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw depth-buffer acquisition failed.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read depth buffer: {0}")]
    Io(#[from] std::io::Error),
    #[error("depth source rejected the scan: {0}")]
    Rejected(String),
}

/// Invalid pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("terrain grid step must be at least 1")]
    ZeroGridStep,
    #[error("`{field}` must be finite and non-negative (got {value})")]
    InvalidScalar { field: &'static str, value: f64 },
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a hardiness class (expected something like \"7b\")")]
pub struct ParseHardinessError(pub String);
