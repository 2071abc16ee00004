//! Raw depth-buffer input.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Byte layout of one depth sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepthFormat {
    /// One byte per sample, 0 = nearest.
    Luminance8,
    /// Two bytes per sample, little-endian u16.
    #[default]
    LuminanceAlpha16,
}

impl DepthFormat {
    pub fn bytes_per_sample(self) -> usize {
        match self {
            DepthFormat::Luminance8 => 1,
            DepthFormat::LuminanceAlpha16 => 2,
        }
    }
}

/// A depth buffer with its declared pixel dimensions.
///
/// The declared size drives the sampling grid even when `data` is too short
/// to cover it; only feature detection needs the bytes themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthScan {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub format: DepthFormat,
}

impl DepthScan {
    pub fn new(data: Vec<u8>, width: usize, height: usize, format: DepthFormat) -> Self {
        Self { data, width, height, format }
    }

    /// Read a raw buffer from disk.
    pub fn from_file(
        path: impl AsRef<Path>,
        width: usize,
        height: usize,
        format: DepthFormat,
    ) -> Result<Self, ScanError> {
        let data = std::fs::read(path)?;
        Ok(Self::new(data, width, height, format))
    }

    /// Nothing to sample: no bytes or a zero dimension.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() || self.width == 0 || self.height == 0
    }

    /// Whether `data` holds a sample for every declared pixel.
    pub fn covers_declared_size(&self) -> bool {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.format.bytes_per_sample()))
            .is_some_and(|needed| needed > 0 && self.data.len() >= needed)
    }

    /// Normalized depth in `[0, 1]` at pixel `(row, col)`.
    pub fn depth_at(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let idx = row * self.width + col;
        match self.format {
            DepthFormat::Luminance8 => self.data.get(idx).map(|&b| b as f32 / 255.0),
            DepthFormat::LuminanceAlpha16 => {
                let lo = *self.data.get(idx * 2)?;
                let hi = *self.data.get(idx * 2 + 1)?;
                Some(u16::from_le_bytes([lo, hi]) as f32 / 65535.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_buffer_does_not_cover_grid() {
        let scan = DepthScan::new(vec![0; 10], 640, 480, DepthFormat::LuminanceAlpha16);
        assert!(!scan.is_empty());
        assert!(!scan.covers_declared_size());
        assert_eq!(scan.depth_at(0, 0), Some(0.0));
        assert_eq!(scan.depth_at(0, 5), None);
    }

    #[test]
    fn sixteen_bit_samples_are_little_endian() {
        let scan = DepthScan::new(vec![0xff, 0xff, 0x00, 0x80], 2, 1, DepthFormat::LuminanceAlpha16);
        assert!(scan.covers_declared_size());
        assert_eq!(scan.depth_at(0, 0), Some(1.0));
        let mid = scan.depth_at(0, 1).unwrap();
        assert!((mid - 0.5).abs() < 1e-3);
    }

    #[test]
    fn zero_dimension_is_empty() {
        assert!(DepthScan::new(vec![1, 2, 3], 0, 10, DepthFormat::Luminance8).is_empty());
        assert!(DepthScan::new(Vec::new(), 10, 10, DepthFormat::Luminance8).is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DepthScan::from_file("/nonexistent/depth.raw", 4, 4, DepthFormat::Luminance8);
        assert!(matches!(err, Err(ScanError::Io(_))));
    }
}
