//! Deterministic synthetic terrain.
//!
//! Stands in for a real depth sensor: the declared scan size fixes the
//! sampling grid, a smooth sine/cosine undulation gives the land its shape,
//! and a bounded seeded perturbation adds texture. Identical inputs and
//! config always produce identical models.

use std::f64::consts::PI;

use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::contour::{contour_levels, trace_level};
use super::features::{DepthBlockDetector, FeatureDetector};
use super::grid::ElevationGrid;
use super::scan::DepthScan;
use super::{ContourCurve, ElevationSample, GridSpec, TerrainModel, TerrainSource, TerrainType, MAX_GRID_SAMPLES};
use crate::config::{Perturbation, TerrainConfig};

/// Spatial frequency of the coherent perturbation, in cycles across the footprint.
const COHERENT_FREQ: f64 = 4.0;

// ── Perturbation ──────────────────────────────────────────────────────────────

enum NoiseField {
    Uniform { rng: StdRng, amp: f32 },
    Coherent { perlin: Perlin, amp: f32 },
}

impl NoiseField {
    fn new(config: &TerrainConfig) -> Self {
        let amp = config.noise_amplitude;
        match config.perturbation {
            Perturbation::Uniform => NoiseField::Uniform {
                rng: StdRng::seed_from_u64(config.seed ^ 0x7E55_A1D0_C0DE_0001),
                amp,
            },
            Perturbation::Coherent => NoiseField::Coherent {
                perlin: Perlin::new((config.seed ^ 0x0051) as u32),
                amp,
            },
        }
    }

    /// Next perturbation in `[0, amp)`.
    fn next(&mut self, x_norm: f64, z_norm: f64) -> f32 {
        match self {
            NoiseField::Uniform { rng, amp } => rng.gen::<f32>() * *amp,
            NoiseField::Coherent { perlin, amp } => {
                let raw = perlin.get([x_norm * COHERENT_FREQ, z_norm * COHERENT_FREQ]);
                // (−1, 1) → [0, 1)
                let unit = ((raw + 1.0) * 0.5).clamp(0.0, 1.0 - f64::EPSILON) as f32;
                unit * *amp
            }
        }
    }
}

// ── Source ────────────────────────────────────────────────────────────────────

/// Synthetic `TerrainSource` with a pluggable feature detector.
#[derive(Debug, Clone)]
pub struct SyntheticTerrain<D = DepthBlockDetector> {
    config: TerrainConfig,
    detector: D,
}

impl SyntheticTerrain {
    pub fn new(config: TerrainConfig) -> Self {
        let detector = DepthBlockDetector::new(config.feature_blocks, config.max_features);
        Self { config, detector }
    }
}

impl Default for SyntheticTerrain {
    fn default() -> Self {
        Self::new(TerrainConfig::default())
    }
}

impl<D: FeatureDetector> SyntheticTerrain<D> {
    pub fn with_detector(config: TerrainConfig, detector: D) -> Self {
        Self { config, detector }
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Elevation grid for a `width × height` scan at the configured step.
    ///
    /// Grid points sit at pixel multiples of the step over `[0, width) × [0, height)`.
    /// Perturbation draws run x-major, z-minor.
    pub fn elevation_grid(&self, width: usize, height: usize) -> ElevationGrid {
        let layout = GridSpec::new(width, height, self.config.grid_step);
        if !layout.is_usable() {
            return ElevationGrid::new(0, 0, 0.0, 0.0, 0.0);
        }
        let step = layout.step as f64;
        let mut grid = ElevationGrid::new(
            layout.cols,
            layout.rows,
            step / width as f64,
            step / height as f64,
            0.0,
        );
        let amplitude = self.config.amplitude as f64;
        let mut noise = NoiseField::new(&self.config);
        for col in 0..layout.cols {
            let x_norm = grid.x_at(col);
            for row in 0..layout.rows {
                let z_norm = grid.z_at(row);
                let base = (x_norm * PI).sin() * amplitude + (z_norm * PI).cos() * amplitude;
                grid.set(row, col, base as f32 + noise.next(x_norm, z_norm));
            }
        }
        grid
    }

    fn contours(&self, grid: &ElevationGrid) -> Vec<ContourCurve> {
        contour_levels(grid.min_elevation(), grid.max_elevation(), self.config.contour_levels)
            .into_iter()
            .flat_map(|level| {
                trace_level(grid, level)
                    .into_iter()
                    .map(move |points| ContourCurve { elevation: level, points })
            })
            .collect()
    }
}

impl<D: FeatureDetector> TerrainSource for SyntheticTerrain<D> {
    fn synthesize(&self, scan: Option<&DepthScan>) -> TerrainModel {
        let Some(scan) = scan.filter(|s| !s.is_empty()) else {
            tracing::warn!("no usable depth buffer, returning empty terrain");
            return TerrainModel::empty();
        };

        let layout = GridSpec::new(scan.width, scan.height, self.config.grid_step);
        if !layout.is_usable() {
            tracing::warn!(
                width = scan.width,
                height = scan.height,
                max_samples = MAX_GRID_SAMPLES,
                "declared scan size is unusable, returning empty terrain"
            );
            return TerrainModel::empty();
        }
        let grid = self.elevation_grid(scan.width, scan.height);

        let mut samples = Vec::with_capacity(layout.sample_count());
        for col in 0..grid.cols {
            for row in 0..grid.rows {
                samples.push(ElevationSample { x: grid.x_at(col), y: grid.get(row, col), z: grid.z_at(row) });
            }
        }

        let contours = self.contours(&grid);
        let features = self.detector.detect(scan);
        let terrain_type = TerrainType::from_relief(grid.relief());

        tracing::info!(
            samples = samples.len(),
            contours = contours.len(),
            features = features.len(),
            terrain = %terrain_type,
            "synthesized terrain"
        );

        TerrainModel { samples, contours, features, terrain_type, grid: layout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::features::ReferenceLayout;
    use crate::terrain::scan::DepthFormat;
    use crate::terrain::FeatureKind;

    fn source() -> SyntheticTerrain {
        SyntheticTerrain::default()
    }

    fn reference_scan() -> DepthScan {
        DepthScan::new(vec![0; 10], 640, 480, DepthFormat::LuminanceAlpha16)
    }

    #[test]
    fn sample_count_matches_grid() {
        let model = source().synthesize(Some(&reference_scan()));
        assert_eq!(model.samples.len(), 3072);
        assert_eq!((model.grid.cols, model.grid.rows), (64, 48));
    }

    #[test]
    fn samples_are_normalized_and_column_major() {
        let model = source().synthesize(Some(&reference_scan()));
        for s in &model.samples {
            assert!((0.0..1.0).contains(&s.x), "x out of range: {}", s.x);
            assert!((0.0..1.0).contains(&s.z), "z out of range: {}", s.z);
        }
        // z runs fastest.
        assert_eq!(model.samples[0].x, 0.0);
        assert_eq!(model.samples[1].x, 0.0);
        assert!((model.samples[1].z - 10.0 / 480.0).abs() < 1e-12);
        assert!((model.samples[48].x - 10.0 / 640.0).abs() < 1e-12);
    }

    #[test]
    fn elevation_stays_within_envelope() {
        let cfg = TerrainConfig::default();
        let model = SyntheticTerrain::new(cfg.clone()).synthesize(Some(&reference_scan()));
        for s in &model.samples {
            let base = ((s.x * PI).sin() * 2.0 + (s.z * PI).cos() * 2.0) as f32;
            let noise = s.y - base;
            assert!(
                (-1e-5..cfg.noise_amplitude + 1e-5).contains(&noise),
                "perturbation {noise} outside [0, {})",
                cfg.noise_amplitude
            );
        }
    }

    #[test]
    fn reference_scan_is_slightly_sloped_with_reference_features() {
        let model = source().synthesize(Some(&reference_scan()));
        assert_eq!(model.terrain_type, TerrainType::SlightlySloped);
        assert_eq!(model.features, ReferenceLayout::features());
        assert!(model.has_feature(FeatureKind::Water));
    }

    #[test]
    fn contours_lie_on_three_levels() {
        let model = source().synthesize(Some(&reference_scan()));
        let mut levels: Vec<f32> = model.contours.iter().map(|c| c.elevation).collect();
        levels.dedup();
        assert_eq!(levels.len(), 3, "levels: {levels:?}");
        let (lo, hi) = model.elevation_range().unwrap();
        for c in &model.contours {
            assert!(c.elevation > lo && c.elevation < hi);
            assert!(c.points.len() >= 2);
        }
    }

    #[test]
    fn synthesis_is_deterministic() {
        for perturbation in [Perturbation::Uniform, Perturbation::Coherent] {
            let cfg = TerrainConfig { perturbation, ..TerrainConfig::default() };
            let a = SyntheticTerrain::new(cfg.clone()).synthesize(Some(&reference_scan()));
            let b = SyntheticTerrain::new(cfg).synthesize(Some(&reference_scan()));
            assert_eq!(a, b, "{perturbation:?} run differs");
        }
    }

    #[test]
    fn seed_changes_the_perturbation() {
        let a = source().synthesize(Some(&reference_scan()));
        let cfg = TerrainConfig { seed: 7, ..TerrainConfig::default() };
        let b = SyntheticTerrain::new(cfg).synthesize(Some(&reference_scan()));
        assert_ne!(a.samples, b.samples);
    }

    #[test]
    fn missing_or_degenerate_scan_gives_empty_model() {
        let source = source();
        assert_eq!(source.synthesize(None), TerrainModel::empty());
        let empty = DepthScan::new(Vec::new(), 640, 480, DepthFormat::Luminance8);
        assert_eq!(source.synthesize(Some(&empty)), TerrainModel::empty());
        let zero = DepthScan::new(vec![0; 10], 0, 480, DepthFormat::Luminance8);
        assert_eq!(source.synthesize(Some(&zero)), TerrainModel::empty());
    }

    #[test]
    fn oversized_declared_scan_gives_empty_model() {
        let source = source();
        let huge = DepthScan::new(vec![0; 10], usize::MAX / 2, usize::MAX / 2, DepthFormat::LuminanceAlpha16);
        assert_eq!(source.synthesize(Some(&huge)), TerrainModel::empty());
        let over_cap = DepthScan::new(vec![0; 10], 100_000, 100_000, DepthFormat::Luminance8);
        assert_eq!(source.synthesize(Some(&over_cap)), TerrainModel::empty());
        assert!(source.elevation_grid(usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn model_grid_round_trips() {
        let source = source();
        let model = source.synthesize(Some(&reference_scan()));
        assert_eq!(model.elevation_grid().unwrap(), source.elevation_grid(640, 480));
    }

    #[test]
    fn zero_noise_is_exactly_the_undulation() {
        let cfg = TerrainConfig { noise_amplitude: 0.0, ..TerrainConfig::default() };
        let grid = SyntheticTerrain::new(cfg).elevation_grid(100, 100);
        // x = 0, z = 0: sin 0 · 2 + cos 0 · 2 = 2.
        assert!((grid.get(0, 0) - 2.0).abs() < 1e-6);
    }
}
