//! Pipeline orchestrator: runs all analysis stages in order.
//!
//! `Pipeline::run` is the one-shot path: location → recommendations,
//! scan → terrain, both → design, terrain + design → scene.
//! `AnalysisSession` is the incremental path used by interactive front ends;
//! it keeps each stage's output alive for exactly as long as it is valid.

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::design::{DesignPlan, DesignSynthesizer, LandSummary, SiteSurvey};
use crate::error::{ConfigError, DesignError};
use crate::location::{resolve_location, LocationProfile};
use crate::recommend::{RecommendationResolver, RecommendationStore, Recommendations};
use crate::scene::{SceneGraph, SceneProjector};
use crate::terrain::{DepthScan, SyntheticTerrain, TerrainModel, TerrainSource};

// ── Public structs ────────────────────────────────────────────────────────────

/// Everything known about a parcel before analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandInput {
    pub location_code: String,
    #[serde(default)]
    pub scan: Option<DepthScan>,
    /// Opaque photo bytes; only their presence is recorded.
    #[serde(default, skip_serializing)]
    pub image: Option<Vec<u8>>,
    #[serde(default)]
    pub survey: SiteSurvey,
}

/// Full output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub location: LocationProfile,
    pub recommendations: Recommendations,
    pub terrain: TerrainModel,
    pub land: LandSummary,
    pub design: DesignPlan,
    pub scene: SceneGraph,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

pub struct Pipeline<'s, T = SyntheticTerrain> {
    config: PipelineConfig,
    resolver: RecommendationResolver<'s>,
    terrain: T,
    designer: DesignSynthesizer,
    projector: SceneProjector,
}

impl Pipeline<'static> {
    /// Pipeline over the bundled recommendation tables.
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        Self::with_store(config, RecommendationStore::builtin())
    }
}

impl<'s> Pipeline<'s> {
    pub fn with_store(config: PipelineConfig, store: &'s RecommendationStore) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            resolver: RecommendationResolver::new(store),
            terrain: SyntheticTerrain::new(config.terrain.clone()),
            designer: DesignSynthesizer::new(config.design.clone()),
            projector: SceneProjector::new(config.scene.clone()),
            config,
        })
    }
}

impl<'s, T: TerrainSource> Pipeline<'s, T> {
    /// Swap the terrain source, e.g. for a real sensor backend.
    pub fn with_terrain_source<U: TerrainSource>(self, terrain: U) -> Pipeline<'s, U> {
        Pipeline {
            config: self.config,
            resolver: self.resolver,
            terrain,
            designer: self.designer,
            projector: self.projector,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn resolver(&self) -> RecommendationResolver<'s> {
        self.resolver
    }

    pub fn resolve(&self, code: &str) -> (LocationProfile, Recommendations) {
        let profile = resolve_location(code);
        let recs = self.resolver.resolve(&profile);
        (profile, recs)
    }

    pub fn synthesize_terrain(&self, scan: Option<&DepthScan>) -> TerrainModel {
        self.terrain.synthesize(scan)
    }

    pub fn design(
        &self,
        land: Option<&LandSummary>,
        recommendations: Option<&Recommendations>,
    ) -> Result<DesignPlan, DesignError> {
        self.designer.synthesize(land, recommendations)
    }

    pub fn project(&self, terrain: &TerrainModel, design: Option<&DesignPlan>) -> SceneGraph {
        match design {
            Some(plan) => self.projector.project_with_design(terrain, plan),
            None => self.projector.project(terrain),
        }
    }

    /// Run every stage for `input`.
    pub fn run(&self, input: &LandInput) -> Result<PipelineOutput, DesignError> {
        let (location, recommendations) = self.resolve(&input.location_code);
        let terrain = self.synthesize_terrain(input.scan.as_ref());
        let land = LandSummary::from_terrain(
            location.clone(),
            input.survey.clone(),
            &terrain,
            input.image.is_some(),
        );
        let design = self.design(Some(&land), Some(&recommendations))?;
        let scene = self.project(&terrain, Some(&design));
        tracing::info!(
            code = %location.code,
            climate = %location.climate,
            hardiness = %location.hardiness,
            samples = terrain.samples.len(),
            "pipeline run complete"
        );
        Ok(PipelineOutput { location, recommendations, terrain, land, design, scene })
    }

    /// Start an interactive session on this pipeline.
    pub fn session(&self) -> AnalysisSession<'_, 's, T> {
        AnalysisSession::new(self)
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Incremental analysis with the stage lifecycle of an interactive front end.
///
/// * Location output is recomputed on every code change.
/// * A terrain model lives from one scan until the next.
/// * A design is built once per analysis and kept until `restart`.
pub struct AnalysisSession<'p, 's, T = SyntheticTerrain> {
    pipeline: &'p Pipeline<'s, T>,
    location: Option<(LocationProfile, Recommendations)>,
    survey: SiteSurvey,
    terrain: Option<TerrainModel>,
    land: Option<LandSummary>,
    design: Option<DesignPlan>,
}

impl<'p, 's, T: TerrainSource> AnalysisSession<'p, 's, T> {
    pub fn new(pipeline: &'p Pipeline<'s, T>) -> Self {
        Self {
            pipeline,
            location: None,
            survey: SiteSurvey::default(),
            terrain: None,
            land: None,
            design: None,
        }
    }

    /// Resolve `code`; an existing land summary picks up the new profile.
    pub fn set_location(&mut self, code: &str) -> &LocationProfile {
        let (profile, recommendations) = self.pipeline.resolve(code);
        if let Some(land) = &mut self.land {
            land.location = profile.clone();
        }
        &self.location.insert((profile, recommendations)).0
    }

    pub fn set_survey(&mut self, survey: SiteSurvey) {
        self.survey = survey;
    }

    /// Analyze a new scan, replacing any previous terrain.
    pub fn ingest_scan(&mut self, scan: Option<&DepthScan>, has_image: bool) -> &TerrainModel {
        let terrain = self.pipeline.synthesize_terrain(scan);
        let location = match &self.location {
            Some((profile, _)) => profile.clone(),
            None => resolve_location(""),
        };
        self.land = Some(LandSummary::from_terrain(location, self.survey.clone(), &terrain, has_image));
        self.terrain.insert(terrain)
    }

    pub fn location(&self) -> Option<&LocationProfile> {
        self.location.as_ref().map(|(p, _)| p)
    }

    pub fn recommendations(&self) -> Option<&Recommendations> {
        self.location.as_ref().map(|(_, r)| r)
    }

    pub fn terrain(&self) -> Option<&TerrainModel> {
        self.terrain.as_ref()
    }

    pub fn land(&self) -> Option<&LandSummary> {
        self.land.as_ref()
    }

    /// The session's design, built on first request.
    pub fn design(&mut self) -> Result<&DesignPlan, DesignError> {
        let plan = match self.design.take() {
            Some(plan) => plan,
            None => self.pipeline.design(self.land.as_ref(), self.recommendations())?,
        };
        Ok(self.design.insert(plan))
    }

    /// Scene for the current terrain, with zone markers once a design exists.
    ///
    /// A kept design is draped over whatever terrain was ingested last.
    pub fn scene(&self) -> SceneGraph {
        let empty = TerrainModel::empty();
        let terrain = self.terrain.as_ref().unwrap_or(&empty);
        self.pipeline.project(terrain, self.design.as_ref())
    }

    /// Drop every stage output.
    pub fn restart(&mut self) {
        tracing::debug!("restarting analysis session");
        self.location = None;
        self.survey = SiteSurvey::default();
        self.terrain = None;
        self.land = None;
        self.design = None;
    }
}
