//! Land analysis and landscape-design synthesis.
//!
//! A location code resolves to climate and hardiness classes, which select
//! layered plant and element recommendations. A depth scan becomes a terrain
//! model. Both feed a design plan, and the terrain (plus design) projects
//! into a renderer-agnostic scene.

pub mod config;
pub mod design;
pub mod error;
pub mod location;
pub mod pipeline;
pub mod recommend;
pub mod scene;
pub mod terrain;

pub use config::PipelineConfig;
pub use design::{DesignPlan, DesignSynthesizer, LandSummary, SiteSurvey};
pub use error::{ConfigError, DesignError, ScanError, StoreError};
pub use location::{resolve_location, ClimateClass, HardinessClass, LocationProfile};
pub use pipeline::{AnalysisSession, LandInput, Pipeline, PipelineOutput};
pub use recommend::{RecommendationResolver, RecommendationStore, Recommendations};
pub use scene::{SceneGraph, SceneProjector};
pub use terrain::{DepthFormat, DepthScan, SyntheticTerrain, TerrainModel, TerrainSource};
