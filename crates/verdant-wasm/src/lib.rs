//! Browser bindings for the land analysis pipeline.
//!
//! Requests arrive as JSON strings and results leave as plain JS objects.
//! Errors surface as string `JsValue`s carrying the full error chain.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use verdant_core::error::ScanError;
use verdant_core::{
    DepthFormat, DepthScan, LandInput, LocationProfile, Pipeline, PipelineConfig, PipelineOutput,
    RecommendationResolver, RecommendationStore, Recommendations, SiteSurvey,
};

/// One analysis request from the page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalyzeRequest {
    location_code: String,
    /// Declared depth-map dimensions.
    width: usize,
    height: usize,
    format: DepthFormat,
    /// Inline depth bytes for the synchronous entry point.
    depth: Option<Vec<u8>>,
    /// The page holds the photo; only its presence crosses the boundary.
    has_image: bool,
    survey: SiteSurvey,
    config: Option<PipelineConfig>,
}

#[derive(Serialize)]
struct Resolution {
    location: LocationProfile,
    recommendations: Recommendations,
}

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

fn to_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&format!("serialization failed: {e}")))
}

// ── Request handling ──────────────────────────────────────────────────────────

fn parse_request(json: &str) -> anyhow::Result<AnalyzeRequest> {
    serde_json::from_str(json).context("invalid analysis request")
}

fn land_input(request: AnalyzeRequest, depth: Option<Vec<u8>>) -> LandInput {
    let scan = depth.map(|data| DepthScan::new(data, request.width, request.height, request.format));
    LandInput {
        location_code: request.location_code,
        scan,
        image: request.has_image.then(Vec::new),
        survey: request.survey,
    }
}

fn run_request(mut request: AnalyzeRequest, depth: Option<Vec<u8>>) -> anyhow::Result<PipelineOutput> {
    let config = request.config.take().unwrap_or_default();
    let pipeline = Pipeline::new(config).context("invalid pipeline configuration")?;
    let input = land_input(request, depth);
    Ok(pipeline.run(&input)?)
}

fn resolve(code: &str) -> Resolution {
    let location = verdant_core::resolve_location(code);
    let recommendations = RecommendationResolver::new(RecommendationStore::builtin()).resolve(&location);
    Resolution { location, recommendations }
}

// ── Exports ───────────────────────────────────────────────────────────────────

/// Classify a location code and resolve its recommendations.
#[wasm_bindgen]
pub fn resolve_location(code: &str) -> Result<JsValue, JsValue> {
    to_value(&resolve(code))
}

/// Run the whole pipeline on a request with an optional inline `depth` array.
#[wasm_bindgen]
pub fn analyze(request_json: &str) -> Result<JsValue, JsValue> {
    let mut request = parse_request(request_json).map_err(to_js)?;
    let depth = request.depth.take();
    let output = run_request(request, depth).map_err(to_js)?;
    to_value(&output)
}

/// Run the pipeline once the depth source settles.
///
/// `depth` must resolve to an `ArrayBuffer` or typed array. A rejected
/// promise fails the analysis rather than falling back to an empty scan.
#[wasm_bindgen]
pub async fn analyze_scan(request_json: &str, depth: js_sys::Promise) -> Result<JsValue, JsValue> {
    let request = parse_request(request_json).map_err(to_js)?;
    let value = JsFuture::from(depth).await.map_err(|reason| {
        let reason = reason.as_string().unwrap_or_else(|| format!("{reason:?}"));
        to_js(ScanError::Rejected(reason).into())
    })?;
    let bytes = js_sys::Uint8Array::new(&value).to_vec();
    tracing::debug!(bytes = bytes.len(), "depth source settled");
    let output = run_request(request, Some(bytes)).map_err(to_js)?;
    to_value(&output)
}

/// Default configuration as JSON, for populating settings forms.
#[wasm_bindgen]
pub fn default_config() -> Result<String, JsValue> {
    serde_json::to_string(&PipelineConfig::default()).map_err(|e| to_js(e.into()))
}
