//! End-to-end pipeline properties.

use approx::assert_abs_diff_eq;

use verdant_core::config::{Perturbation, PlacementPolicy};
use verdant_core::recommend::{ElementKind, PlantCategory, PlantOrigin};
use verdant_core::terrain::{ElevationSample, FeatureKind, GridSpec, TerrainType};
use verdant_core::{
    ClimateClass, DepthFormat, DepthScan, LandInput, Pipeline, PipelineConfig, RecommendationStore,
    SiteSurvey, TerrainModel, TerrainSource,
};

fn reference_input(code: &str) -> LandInput {
    LandInput {
        location_code: code.into(),
        scan: Some(DepthScan::new(vec![0; 10], 640, 480, DepthFormat::LuminanceAlpha16)),
        image: None,
        survey: SiteSurvey::new("quarter acre", "Clay", "fence, old apple tree"),
    }
}

#[test]
fn manhattan_code_uses_exact_location_table() {
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
    let out = pipeline.run(&reference_input("10001")).unwrap();
    assert_eq!(out.location.climate, ClimateClass::Continental);
    assert_eq!(out.location.hardiness.to_string(), "4a");
    assert_eq!(out.recommendations.plant_origin, PlantOrigin::Location { code: "10001".into() });
    let store = RecommendationStore::builtin();
    assert_eq!(&out.recommendations.plants, store.location_plants("10001").unwrap());
}

#[test]
fn empty_code_falls_back_to_defaults_everywhere() {
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
    let out = pipeline.run(&reference_input("")).unwrap();
    assert!(!out.location.resolved);
    assert_eq!(out.location.climate, ClimateClass::Unknown);
    assert_eq!(out.location.hardiness.to_string(), "3a");
    for cat in PlantCategory::ALL {
        assert!(!out.recommendations.plants_in(cat).is_empty(), "default {cat} empty");
    }
    for kind in ElementKind::ALL {
        assert!(out.recommendations.element(kind).is_some(), "default {kind} missing");
    }
}

#[test]
fn reference_scan_matches_expected_shape() {
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
    let out = pipeline.run(&reference_input("98101")).unwrap();
    assert_eq!(out.terrain.samples.len(), 3072);
    assert_eq!(out.terrain.terrain_type, TerrainType::SlightlySloped);
    assert_eq!(out.terrain.features.len(), 3);
    assert_eq!(out.land.water_sources, ["Natural rainfall", "Detected water body"]);
    assert_eq!(out.land.contour_count, out.terrain.contours.len());
    assert_eq!(out.scene.points.len(), 3072);
    assert_eq!(out.scene.meshes.len(), 3);

    let first = out.scene.points[0].position;
    assert_abs_diff_eq!(first[0], -10.0, epsilon = 1e-5);
    assert_abs_diff_eq!(first[2], -10.0, epsilon = 1e-5);
}

#[test]
fn every_stage_is_reproducible() {
    for perturbation in [Perturbation::Uniform, Perturbation::Coherent] {
        let mut config = PipelineConfig::default();
        config.terrain.perturbation = perturbation;
        let a = Pipeline::new(config.clone()).unwrap().run(&reference_input("33101")).unwrap();
        let b = Pipeline::new(config).unwrap().run(&reference_input("33101")).unwrap();
        assert_eq!(a.terrain, b.terrain);
        assert_eq!(a.design, b.design);
        assert_eq!(a.scene, b.scene);
    }
}

#[test]
fn feature_aware_config_moves_the_pond() {
    let mut config = PipelineConfig::default();
    config.design.placement = PlacementPolicy::FeatureAware;
    let out = Pipeline::new(config).unwrap().run(&reference_input("60601")).unwrap();
    assert_eq!(out.design.water_features[0].location, "Southern section");

    let out = Pipeline::new(PipelineConfig::default()).unwrap().run(&reference_input("60601")).unwrap();
    assert_eq!(out.design.water_features[0].location, "Northern section");
}

#[test]
fn custom_store_is_honoured() {
    let mut store = RecommendationStore::builtin().clone();
    store.locations.clear();
    let pipeline = Pipeline::with_store(PipelineConfig::default(), &store).unwrap();
    let out = pipeline.run(&reference_input("10001")).unwrap();
    assert!(matches!(out.recommendations.plant_origin, PlantOrigin::Layered { .. }));
}

/// A level pad with no features, standing in for a real sensor.
struct LevelPad;

impl TerrainSource for LevelPad {
    fn synthesize(&self, scan: Option<&DepthScan>) -> TerrainModel {
        let Some(scan) = scan else {
            return TerrainModel::empty();
        };
        let grid = GridSpec::new(scan.width, scan.height, 100);
        let mut samples = Vec::new();
        for col in 0..grid.cols {
            for row in 0..grid.rows {
                samples.push(ElevationSample {
                    x: (col * 100) as f64 / scan.width as f64,
                    y: 1.0,
                    z: (row * 100) as f64 / scan.height as f64,
                });
            }
        }
        TerrainModel {
            samples,
            contours: Vec::new(),
            features: Vec::new(),
            terrain_type: TerrainType::Flat,
            grid,
        }
    }
}

#[test]
fn terrain_source_is_swappable() {
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap().with_terrain_source(LevelPad);
    let out = pipeline.run(&reference_input("78701")).unwrap();
    assert_eq!(out.terrain.samples.len(), 7 * 5);
    assert_eq!(out.land.terrain_type, TerrainType::Flat);
    assert_eq!(out.land.water_sources, ["Natural rainfall"]);
    assert!(!out.scene.meshes.iter().any(|m| m.feature == FeatureKind::Water));
    // Flat terrain: every point takes the low end of the ramp.
    let c0 = out.scene.points[0].color;
    assert!(out.scene.points.iter().all(|p| p.color == c0));
    // Markers sit on the pad.
    for marker in &out.scene.zone_markers {
        assert_abs_diff_eq!(marker.position[1], 5.0, epsilon = 1e-5);
    }
}

#[test]
fn output_serializes_with_expected_keys() {
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
    let out = pipeline.run(&reference_input("95460")).unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["location"]["hardiness"], "8b");
    assert_eq!(v["terrain"]["terrain_type"], "Slightly sloped");
    assert_eq!(v["terrain"]["features"][0]["type"], "tree");
    assert_eq!(v["design"]["planting_zones"][0]["location"], "Eastern section");
    assert_eq!(v["design"]["pathways"][0]["type"], "Main path");
    assert_eq!(v["scene"]["meshes"][0]["parts"][1]["primitive"]["shape"], "cone");
    assert_eq!(v["recommendations"]["plant_origin"]["source"], "location");
}
