//! Landscape feature detection over a depth buffer.
//!
//! `DepthBlockDetector` is a coarse statistical classifier: the scan is cut
//! into blocks, and blocks that stand well proud of the median depth become
//! trees (rough) or structures (smooth), while smooth blocks well below it
//! become water. A real vision backend implements `FeatureDetector` instead.

use super::scan::DepthScan;
use super::{DetectedFeature, FeatureKind, FeatureSize, Position};

/// Minimum departure from the median block depth to count as a feature.
const RELIEF_DELTA: f32 = 0.15;
/// Depth spread above which a raised block reads as canopy.
const ROUGH_STD: f32 = 0.05;
/// Depth spread below which a sunken block reads as a water surface.
const CALM_STD: f32 = 0.02;

pub trait FeatureDetector {
    fn detect(&self, scan: &DepthScan) -> Vec<DetectedFeature>;
}

/// Fixed three-feature layout used when a scan carries no usable depth data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceLayout;

impl ReferenceLayout {
    pub fn features() -> Vec<DetectedFeature> {
        let f = |kind, x, z, width, height| DetectedFeature {
            kind,
            position: Position { x, y: 0.0, z },
            size: FeatureSize { width, height },
        };
        vec![
            f(FeatureKind::Tree, 0.2, 0.3, 0.1, 0.3),
            f(FeatureKind::Structure, 0.7, 0.6, 0.2, 0.15),
            f(FeatureKind::Water, 0.4, 0.8, 0.3, 0.1),
        ]
    }
}

impl FeatureDetector for ReferenceLayout {
    fn detect(&self, _scan: &DepthScan) -> Vec<DetectedFeature> {
        Self::features()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct BlockStats {
    mean: f32,
    std: f32,
    /// Pixel extent: x0, x1, z0, z1 (half-open).
    bounds: [usize; 4],
}

/// Block-statistics classifier; falls back to `ReferenceLayout` for
/// buffers that do not cover their declared size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthBlockDetector {
    /// Blocks per axis.
    pub blocks: usize,
    pub max_features: usize,
}

impl Default for DepthBlockDetector {
    fn default() -> Self {
        Self { blocks: 8, max_features: 8 }
    }
}

impl DepthBlockDetector {
    pub fn new(blocks: usize, max_features: usize) -> Self {
        Self { blocks: blocks.max(1), max_features }
    }

    fn block_stats(&self, scan: &DepthScan) -> Vec<BlockStats> {
        let bx = self.blocks.min(scan.width).max(1);
        let bz = self.blocks.min(scan.height).max(1);
        let mut out = Vec::with_capacity(bx * bz);
        for j in 0..bz {
            let z0 = j * scan.height / bz;
            let z1 = (j + 1) * scan.height / bz;
            for i in 0..bx {
                let x0 = i * scan.width / bx;
                let x1 = (i + 1) * scan.width / bx;
                let mut sum = 0.0f64;
                let mut sum_sq = 0.0f64;
                let mut n = 0usize;
                for row in z0..z1 {
                    for col in x0..x1 {
                        if let Some(d) = scan.depth_at(row, col) {
                            sum += d as f64;
                            sum_sq += (d as f64) * (d as f64);
                            n += 1;
                        }
                    }
                }
                if n == 0 {
                    continue;
                }
                let mean = sum / n as f64;
                let var = (sum_sq / n as f64 - mean * mean).max(0.0);
                out.push(BlockStats {
                    mean: mean as f32,
                    std: var.sqrt() as f32,
                    bounds: [x0, x1, z0, z1],
                });
            }
        }
        out
    }
}

fn median(values: &mut [f32]) -> f32 {
    values.sort_by(f32::total_cmp);
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) * 0.5
    }
}

fn classify(block: &BlockStats, median: f32) -> Option<FeatureKind> {
    let delta = block.mean - median;
    if delta < -RELIEF_DELTA {
        Some(if block.std > ROUGH_STD { FeatureKind::Tree } else { FeatureKind::Structure })
    } else if delta > RELIEF_DELTA && block.std < CALM_STD {
        Some(FeatureKind::Water)
    } else {
        None
    }
}

impl FeatureDetector for DepthBlockDetector {
    fn detect(&self, scan: &DepthScan) -> Vec<DetectedFeature> {
        if !scan.covers_declared_size() {
            tracing::warn!(
                bytes = scan.data.len(),
                width = scan.width,
                height = scan.height,
                "depth buffer does not cover its declared size, using reference layout"
            );
            return ReferenceLayout::features();
        }

        let stats = self.block_stats(scan);
        if stats.is_empty() {
            return Vec::new();
        }
        let mut means: Vec<f32> = stats.iter().map(|b| b.mean).collect();
        let med = median(&mut means);

        // (block index, kind, strength)
        let mut hits: Vec<(usize, FeatureKind, f32)> = stats
            .iter()
            .enumerate()
            .filter_map(|(i, b)| classify(b, med).map(|k| (i, k, (b.mean - med).abs())))
            .collect();
        hits.sort_by(|a, b| b.2.total_cmp(&a.2));
        hits.truncate(self.max_features);
        hits.sort_by_key(|h| h.0);

        let (w, h) = (scan.width as f64, scan.height as f64);
        let features: Vec<DetectedFeature> = hits
            .into_iter()
            .map(|(i, kind, _)| {
                let [x0, x1, z0, z1] = stats[i].bounds;
                DetectedFeature {
                    kind,
                    position: Position {
                        x: (x0 + x1) as f64 * 0.5 / w,
                        y: 0.0,
                        z: (z0 + z1) as f64 * 0.5 / h,
                    },
                    size: FeatureSize {
                        width: (x1 - x0) as f64 / w,
                        height: (z1 - z0) as f64 / h,
                    },
                }
            })
            .collect();
        tracing::debug!(count = features.len(), median = med, "classified depth blocks");
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::scan::DepthFormat;

    type Paint = dyn Fn(usize, usize) -> u8;

    /// 80×80 8-bit scan at mid depth with 10×10 patches painted in.
    fn scan_with(patches: &[((usize, usize), &Paint)]) -> DepthScan {
        let (w, h) = (80, 80);
        let mut data = vec![128u8; w * h];
        for &((bx, bz), paint) in patches {
            for row in bz * 10..bz * 10 + 10 {
                for col in bx * 10..bx * 10 + 10 {
                    data[row * w + col] = paint(row, col);
                }
            }
        }
        DepthScan::new(data, w, h, DepthFormat::Luminance8)
    }

    #[test]
    fn short_buffer_falls_back_to_reference_layout() {
        let scan = DepthScan::new(vec![0; 10], 640, 480, DepthFormat::LuminanceAlpha16);
        let features = DepthBlockDetector::default().detect(&scan);
        assert_eq!(features, ReferenceLayout::features());
        let kinds: Vec<FeatureKind> = features.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, [FeatureKind::Tree, FeatureKind::Structure, FeatureKind::Water]);
        assert!((features[2].size.width - 0.3).abs() < 1e-12);
    }

    #[test]
    fn uniform_depth_has_no_features() {
        let scan = scan_with(&[]);
        assert!(DepthBlockDetector::default().detect(&scan).is_empty());
    }

    #[test]
    fn blocks_are_classified_by_offset_and_roughness() {
        let canopy: &Paint = &|row, col| if (row + col) % 2 == 0 { 0 } else { 60 };
        let roof: &Paint = &|_, _| 20;
        let pond: &Paint = &|_, _| 255;
        let scan = scan_with(&[((0, 0), canopy), ((5, 2), roof), ((3, 7), pond)]);

        let features = DepthBlockDetector::default().detect(&scan);
        assert_eq!(features.len(), 3, "got {features:?}");
        // Row-major block order: (0,0), (5,2), (3,7).
        assert_eq!(features[0].kind, FeatureKind::Tree);
        assert_eq!(features[1].kind, FeatureKind::Structure);
        assert_eq!(features[2].kind, FeatureKind::Water);

        let tree = &features[0];
        assert!((tree.position.x - 0.0625).abs() < 1e-9);
        assert!((tree.position.z - 0.0625).abs() < 1e-9);
        assert!((tree.size.width - 0.125).abs() < 1e-9);
        let pond_pos = &features[2].position;
        assert!((pond_pos.x - 0.4375).abs() < 1e-9);
        assert!((pond_pos.z - 0.9375).abs() < 1e-9);
    }

    #[test]
    fn strongest_features_survive_the_cap() {
        let deep: &Paint = &|_, _| 255;
        let shallow: &Paint = &|_, _| 180;
        let scan = scan_with(&[((1, 1), shallow), ((6, 6), deep)]);
        let detector = DepthBlockDetector::new(8, 1);
        let features = detector.detect(&scan);
        assert_eq!(features.len(), 1);
        assert!(features[0].position.x > 0.75, "deeper pond should win: {features:?}");
    }
}
