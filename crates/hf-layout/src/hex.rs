//! Pointy-top honeycomb generator.
//!
//! The grid is sized so that `target_cols × target_rows` hexagons fit inside
//! the padded window, then filled row by row (odd rows shifted right by half
//! a hex width) with as many hexagons as fit.  Each hexagon contributes its
//! six corners and its six boundary edges.
//!
//! # Vertex keys
//!
//! Every corner of a pointy-top tiling sits on an integer lattice with
//! horizontal step `√3/2 · r` and vertical step `r/2`, measured from the
//! first hex centre.  A centre in row `row`, column `col` is at lattice
//! `(2·col + row % 2, 3·row)` and its corners are at fixed integer offsets
//! from there.  Shared corners of neighbouring hexagons therefore produce the
//! same key, and positions are derived from keys so they agree bit for bit.

use rustc_hash::FxHashSet;

use hf_core::{PixelPoint, VertexKey};

use crate::{Layout, LayoutBuilder, LayoutError, LayoutResult};

const SQRT_3: f32 = 1.732_050_8;

/// Corner lattice offsets, clockwise from the top corner (screen y-down).
const CORNER_OFFSETS: [(i32, i32); 6] = [(0, -2), (1, -1), (1, 1), (0, 2), (-1, 1), (-1, -1)];

/// Minimum hex radius regardless of window size.
const MIN_RADIUS_PX: f32 = 2.0;

/// Tolerance when testing whether another centre still fits.
const FIT_EPS: f32 = 1e-4;

/// Sizing parameters for [`compute_hex_grid_layout`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexGridConfig {
    pub base_padding_px: f32,
    pub target_cols:     u32,
    pub target_rows:     u32,
}

impl Default for HexGridConfig {
    fn default() -> Self {
        Self { base_padding_px: 16.0, target_cols: 18, target_rows: 7 }
    }
}

/// A generated honeycomb: the layout plus the geometry it was derived from.
pub struct HexGrid {
    pub layout:    Layout,
    pub radius_px: f32,
    /// Hex centres in generation order (row-major).
    pub centers:   Vec<PixelPoint>,
}

/// Build a centred honeycomb for a `width × height` px window.
///
/// # Errors
///
/// [`LayoutError::EmptyGrid`] when not even one hexagon fits.
pub fn compute_hex_grid_layout(width: u32, height: u32, cfg: &HexGridConfig) -> LayoutResult<HexGrid> {
    let width_px  = width.max(1) as f32;
    let height_px = height.max(1) as f32;
    let cols = cfg.target_cols.max(1) as f32;
    let rows = cfg.target_rows.max(1) as f32;
    let pad  = cfg.base_padding_px.max(0.0);

    let avail_w = (width_px - 2.0 * pad).max(1.0);
    let avail_h = (height_px - 2.0 * pad).max(1.0);

    let radius_from_w = (avail_w / cols) / SQRT_3;
    let radius_from_h = avail_h / (1.5 * rows + 0.5);
    let radius = radius_from_w.min(radius_from_h).max(MIN_RADIUS_PX);

    let hex_w  = SQRT_3 * radius;
    let row_dy = 1.5 * radius;

    let covered_w = cols * hex_w;
    let covered_h = (1.5 * rows + 0.5) * radius;
    let pad_x = pad + ((avail_w - covered_w) / 2.0).max(0.0);
    let pad_y = pad + ((avail_h - covered_h) / 2.0).max(0.0);

    let min_cx = pad_x + hex_w / 2.0;
    let max_cx = width_px - pad_x - hex_w / 2.0;
    let min_cy = pad_y + radius;
    let max_cy = height_px - pad_y - radius;

    // Lattice steps: half a hex width horizontally, half a radius vertically.
    let step_x = hex_w / 2.0;
    let step_y = radius / 2.0;
    let to_px = |key: VertexKey| PixelPoint::new(min_cx + key.q as f32 * step_x, min_cy + key.r as f32 * step_y);

    let mut centers = Vec::new();
    let mut builder = LayoutBuilder::new();
    let mut seen: FxHashSet<VertexKey> = FxHashSet::default();

    let mut row: i32 = 0;
    while min_cy + row as f32 * row_dy <= max_cy + FIT_EPS {
        let odd = row % 2;
        let mut col: i32 = 0;
        while min_cx + (odd as f32 * 0.5 + col as f32) * hex_w <= max_cx + FIT_EPS {
            let center = VertexKey::new(2 * col + odd, 3 * row);
            centers.push(to_px(center));

            let corners = CORNER_OFFSETS.map(|(dq, dr)| VertexKey::new(center.q + dq, center.r + dr));
            for &corner in &corners {
                if seen.insert(corner) {
                    builder.add_vertex(corner, to_px(corner));
                }
            }
            for i in 0..corners.len() {
                builder.add_edge(corners[i], corners[(i + 1) % corners.len()]);
            }
            col += 1;
        }
        row += 1;
    }

    if centers.is_empty() {
        return Err(LayoutError::EmptyGrid { width, height });
    }

    Ok(HexGrid { layout: builder.build()?, radius_px: radius, centers })
}
