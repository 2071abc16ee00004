use serde::{Deserialize, Serialize};

/// Regular elevation grid over the normalized scan footprint, row-major.
///
/// Rows run along z, columns along x. Cell `(row, col)` sits at
/// `x = col * x_spacing`, `z = row * z_spacing` in normalized units.
/// Coordinate math uses f64; elevation values use f32.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationGrid {
    pub data: Vec<f32>,
    pub cols: usize,
    pub rows: usize,
    pub x_spacing: f64,
    pub z_spacing: f64,
}

impl ElevationGrid {
    /// A size whose cell count overflows `usize` gives an empty 0×0 grid.
    pub fn new(cols: usize, rows: usize, x_spacing: f64, z_spacing: f64, fill: f32) -> Self {
        match cols.checked_mul(rows) {
            Some(len) => Self { data: vec![fill; len], cols, rows, x_spacing, z_spacing },
            None => Self { data: Vec::new(), cols: 0, rows: 0, x_spacing, z_spacing },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f32) {
        self.data[row * self.cols + col] = val;
    }

    #[inline]
    pub fn x_at(&self, col: usize) -> f64 {
        col as f64 * self.x_spacing
    }

    #[inline]
    pub fn z_at(&self, row: usize) -> f64 {
        row as f64 * self.z_spacing
    }

    /// Bilinear elevation at normalized `(x, z)`.
    /// Returns None outside the sampled extent or on an empty grid.
    pub fn sample(&self, x: f64, z: f64) -> Option<f32> {
        if self.is_empty() || x < 0.0 || z < 0.0 {
            return None;
        }
        let fx = if self.x_spacing > 0.0 { x / self.x_spacing } else { 0.0 };
        let fz = if self.z_spacing > 0.0 { z / self.z_spacing } else { 0.0 };
        if fx > (self.cols - 1) as f64 + 1e-9 || fz > (self.rows - 1) as f64 + 1e-9 {
            return None;
        }

        let c0 = (fx.floor() as usize).min(self.cols - 1);
        let r0 = (fz.floor() as usize).min(self.rows - 1);
        let c1 = (c0 + 1).min(self.cols - 1);
        let r1 = (r0 + 1).min(self.rows - 1);

        let tx = (fx - c0 as f64).clamp(0.0, 1.0) as f32;
        let tz = (fz - r0 as f64).clamp(0.0, 1.0) as f32;

        let v00 = self.get(r0, c0);
        let v10 = self.get(r0, c1);
        let v01 = self.get(r1, c0);
        let v11 = self.get(r1, c1);

        Some(
            v00 * (1.0 - tx) * (1.0 - tz)
                + v10 * tx * (1.0 - tz)
                + v01 * (1.0 - tx) * tz
                + v11 * tx * tz,
        )
    }

    /// Nearest in-range elevation to `(x, z)`; clamps instead of failing.
    pub fn sample_clamped(&self, x: f64, z: f64) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        let max_x = self.x_at(self.cols - 1);
        let max_z = self.z_at(self.rows - 1);
        self.sample(x.clamp(0.0, max_x), z.clamp(0.0, max_z))
    }

    pub fn min_elevation(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_elevation(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Max minus min elevation; 0 for an empty grid.
    pub fn relief(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max_elevation() - self.min_elevation()
        }
    }
}
