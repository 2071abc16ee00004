//! Iso-elevation contours by marching squares.
//!
//! Each grid cell is classified by which of its four corners lie at or above
//! the level; crossings are placed on cell edges by linear interpolation.
//! Crossings are keyed by the edge they sit on, so neighbouring cells share
//! identical endpoints and segments chain into polylines exactly.
//! Ambiguous saddle cells are resolved by the cell-centre average.

use std::collections::HashMap;

use super::grid::ElevationGrid;

// ── Edges and cell sides ──────────────────────────────────────────────────────

/// A grid edge. `H(r, c)` joins `(r, c)`–`(r, c+1)`; `V(r, c)` joins `(r, c)`–`(r+1, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Edge {
    H(usize, usize),
    V(usize, usize),
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    fn edge(self, r: usize, c: usize) -> Edge {
        match self {
            Side::Top => Edge::H(r, c),
            Side::Bottom => Edge::H(r + 1, c),
            Side::Left => Edge::V(r, c),
            Side::Right => Edge::V(r, c + 1),
        }
    }
}

/// Segments for a cell case (bits: tl=8, tr=4, br=2, bl=1).
fn cell_segments(case: u8, center_above: bool) -> &'static [(Side, Side)] {
    use Side::*;
    match case {
        1 | 14 => &[(Left, Bottom)],
        2 | 13 => &[(Bottom, Right)],
        3 | 12 => &[(Left, Right)],
        4 | 11 => &[(Top, Right)],
        6 | 9 => &[(Top, Bottom)],
        7 | 8 => &[(Left, Top)],
        // Saddles: when the centre is above, the two above corners connect
        // through it and the below corners are cut off, and vice versa.
        5 if center_above => &[(Left, Top), (Right, Bottom)],
        5 => &[(Top, Right), (Left, Bottom)],
        10 if center_above => &[(Top, Right), (Left, Bottom)],
        10 => &[(Left, Top), (Right, Bottom)],
        _ => &[],
    }
}

fn crossing(grid: &ElevationGrid, edge: Edge, level: f32) -> [f64; 2] {
    let frac = |a: f32, b: f32| -> f64 {
        let d = b - a;
        if d.abs() < f32::EPSILON {
            0.5
        } else {
            ((level - a) / d).clamp(0.0, 1.0) as f64
        }
    };
    match edge {
        Edge::H(r, c) => {
            let t = frac(grid.get(r, c), grid.get(r, c + 1));
            [grid.x_at(c) + t * grid.x_spacing, grid.z_at(r)]
        }
        Edge::V(r, c) => {
            let t = frac(grid.get(r, c), grid.get(r + 1, c));
            [grid.x_at(c), grid.z_at(r) + t * grid.z_spacing]
        }
    }
}

// ── Tracing ───────────────────────────────────────────────────────────────────

/// All segments crossing `level`, in row-major cell order.
fn segments(grid: &ElevationGrid, level: f32) -> Vec<(Edge, Edge)> {
    let mut out = Vec::new();
    if grid.rows < 2 || grid.cols < 2 {
        return out;
    }
    for r in 0..grid.rows - 1 {
        for c in 0..grid.cols - 1 {
            let tl = grid.get(r, c);
            let tr = grid.get(r, c + 1);
            let br = grid.get(r + 1, c + 1);
            let bl = grid.get(r + 1, c);
            let bit = |v: f32, b: u8| if v >= level { b } else { 0 };
            let case = bit(tl, 8) | bit(tr, 4) | bit(br, 2) | bit(bl, 1);
            if case == 0 || case == 15 {
                continue;
            }
            let center_above = (tl + tr + br + bl) * 0.25 >= level;
            for &(a, b) in cell_segments(case, center_above) {
                out.push((a.edge(r, c), b.edge(r, c)));
            }
        }
    }
    out
}

/// Trace every connected iso-line at `level`.
///
/// Open lines run boundary to boundary; closed loops repeat their first
/// point at the end. Output order is deterministic for a given grid.
pub fn trace_level(grid: &ElevationGrid, level: f32) -> Vec<Vec<[f64; 2]>> {
    let segs = segments(grid, level);
    let mut by_edge: HashMap<Edge, Vec<usize>> = HashMap::new();
    for (i, &(a, b)) in segs.iter().enumerate() {
        by_edge.entry(a).or_default().push(i);
        by_edge.entry(b).or_default().push(i);
    }
    let degree = |e: &Edge| by_edge.get(e).map_or(0, Vec::len);

    let mut used = vec![false; segs.len()];
    let mut lines = Vec::new();

    let walk = |start: usize, from: Edge, used: &mut [bool]| {
        let mut line = vec![crossing(grid, from, level)];
        let (mut seg, mut at) = (start, from);
        loop {
            used[seg] = true;
            let (a, b) = segs[seg];
            let next = if a == at { b } else { a };
            line.push(crossing(grid, next, level));
            let follow = by_edge
                .get(&next)
                .and_then(|ids| ids.iter().copied().find(|&j| !used[j]));
            match follow {
                Some(j) => {
                    seg = j;
                    at = next;
                }
                None => break,
            }
        }
        line
    };

    // Open lines first, each started from a dangling end.
    for i in 0..segs.len() {
        if used[i] {
            continue;
        }
        let (a, b) = segs[i];
        let start = if degree(&a) == 1 {
            Some(a)
        } else if degree(&b) == 1 {
            Some(b)
        } else {
            None
        };
        if let Some(from) = start {
            lines.push(walk(i, from, &mut used));
        }
    }
    // Whatever remains forms closed loops.
    for i in 0..segs.len() {
        if !used[i] {
            let from = segs[i].0;
            lines.push(walk(i, from, &mut used));
        }
    }
    lines
}

/// `count` levels evenly spaced strictly inside `(min, max)`.
pub fn contour_levels(min: f32, max: f32, count: usize) -> Vec<f32> {
    if count == 0 || !(max > min) {
        return Vec::new();
    }
    let span = max - min;
    (1..=count).map(|i| min + span * i as f32 / (count + 1) as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bump(size: usize, peaks: &[(usize, usize)]) -> ElevationGrid {
        let mut g = ElevationGrid::new(size, size, 0.1, 0.1, 0.0);
        for &(r, c) in peaks {
            g.set(r, c, 1.0);
        }
        g
    }

    #[test]
    fn single_peak_gives_one_closed_loop() {
        let g = bump(5, &[(2, 2)]);
        let lines = trace_level(&g, 0.5);
        assert_eq!(lines.len(), 1);
        let loop_ = &lines[0];
        assert_eq!(loop_.len(), 5, "four crossings plus the closing point");
        assert_eq!(loop_.first(), loop_.last());
        for p in loop_ {
            let dx = (p[0] - 0.2).abs();
            let dz = (p[1] - 0.2).abs();
            assert!((dx + dz - 0.05).abs() < 1e-9, "crossing {p:?} not at edge midpoint");
        }
    }

    #[test]
    fn separated_peaks_give_separate_loops() {
        let g = bump(7, &[(1, 1), (5, 5)]);
        assert_eq!(trace_level(&g, 0.5).len(), 2);
    }

    #[test]
    fn ramp_gives_one_open_line_on_the_level() {
        let mut g = ElevationGrid::new(4, 6, 0.25, 0.2, 0.0);
        for r in 0..6 {
            for c in 0..4 {
                g.set(r, c, c as f32);
            }
        }
        let lines = trace_level(&g, 1.5);
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.len(), 6, "one crossing per row");
        assert_ne!(line.first(), line.last());
        for p in line {
            assert!((p[0] - 0.375).abs() < 1e-9);
            let v = g.sample(p[0], p[1]).unwrap();
            assert!((v - 1.5).abs() < 1e-5, "point {p:?} samples to {v}");
        }
        // Points are ordered along the line.
        for w in line.windows(2) {
            assert!(((w[1][1] - w[0][1]).abs() - 0.2).abs() < 1e-9);
        }
    }

    #[test]
    fn flat_or_degenerate_grids_have_no_contours() {
        let g = ElevationGrid::new(5, 5, 0.1, 0.1, 1.0);
        assert!(trace_level(&g, 0.5).is_empty());
        assert!(trace_level(&ElevationGrid::new(1, 5, 0.1, 0.1, 0.0), 0.5).is_empty());
    }

    #[test]
    fn saddle_is_resolved_by_centre_value() {
        // Diagonal highs at tl and br of a single cell.
        let mut g = ElevationGrid::new(2, 2, 1.0, 1.0, 0.0);
        g.set(0, 0, 1.0);
        g.set(1, 1, 1.0);
        // Centre 0.5 ≥ 0.4: highs connect, two short lines cut off the lows.
        assert_eq!(trace_level(&g, 0.4).len(), 2);
        // Centre 0.5 < 0.6: highs are isolated, still two lines.
        assert_eq!(trace_level(&g, 0.6).len(), 2);
    }

    #[test]
    fn levels_sit_strictly_inside_range() {
        let levels = contour_levels(0.0, 4.0, 3);
        assert_eq!(levels, vec![1.0, 2.0, 3.0]);
        assert!(contour_levels(1.0, 1.0, 3).is_empty());
        assert!(contour_levels(0.0, 1.0, 0).is_empty());
    }
}
