//! The four depth-frame rasterizers.
//!
//! Every renderer is a pure function of the frame and the depth table. The
//! orthogonal views map each in-range sample to a world point and add it to the
//! cell it lands in, so they show point density rather than an image; cells that
//! fall outside the raster are dropped.
//!
//! Division truncates toward zero throughout, which is what places points just
//! either side of an axis into the same row or column.

use rayon::prelude::*;
use tracing::debug;

use crate::depth_pipeline::common::constants::{
    LINEAR_NEAR_MM, SENTINEL_CODE, XMAX, XPIX, YMAX, YPIX, ZMAX, ZPIX,
};
use crate::depth_pipeline::frame::DepthFrame;
use crate::depth_pipeline::lut::DepthLut;
use crate::depth_pipeline::projection::types::{OutputRaster, View};
use crate::depth_pipeline::unpack::code_of;
use crate::depth_pipeline::world::{x_world, y_world};

const XPIX_64: i64 = XPIX as i64;
const YPIX_64: i64 = YPIX as i64;
const ZPIX_64: i64 = ZPIX as i64;
const XMAX_64: i64 = XMAX as i64;
const YMAX_64: i64 = YMAX as i64;
const ZMAX_64: i64 = ZMAX as i64;

/// Weight of one overhead or side hit.
const DENSITY_WEIGHT: i32 = 2;

/// Overhead raster index of world point (x, z).
#[inline]
pub fn overhead_index(x_mm: i32, z_mm: i32) -> i64 {
    let (x, z) = (i64::from(x_mm), i64::from(z_mm));
    (z * ZPIX_64 / ZMAX_64) * XPIX_64 + (x * XPIX_64 / XMAX_64 + XPIX_64 / 2)
}

/// Side raster index of world point (z, y).
#[inline]
pub fn side_index(z_mm: i32, y_mm: i32) -> i64 {
    let (z, y) = (i64::from(z_mm), i64::from(y_mm));
    ((-y) * YPIX_64 / YMAX_64 + YPIX_64 / 2) * ZPIX_64 + z * ZPIX_64 / ZMAX_64
}

/// Front raster index of world point (x, y).
#[inline]
pub fn front_index(x_mm: i32, y_mm: i32) -> i64 {
    let (x, y) = (i64::from(x_mm), i64::from(y_mm));
    ((-y) * YPIX_64 / YMAX_64 + YPIX_64 / 2) * XPIX_64 + (-x) * XPIX_64 / XMAX_64 + XPIX_64 / 2
}

/// Per-hit intensity in the front view; farther points count for more.
///
/// Not a physical model: a stand-in until hits are scaled by the surface area
/// a pixel covers at depth `z_mm`. Negative for depths at or below zero
/// (codes past the calibrated range), so those hits darken the cell, never
/// below 0 (see [`OutputRaster::accumulate`]).
#[inline]
pub fn front_weight(z_mm: i32) -> i32 {
    1 + (z_mm - 512) / 256
}

/// Calls `plot(x, y, z)` for every pixel that is not the sentinel and not at or
/// past ZMAX.
///
/// Codes past the calibrated range have negative depths and are still plotted;
/// the raster bounds check decides whether they land.
fn for_each_plotted(frame: &DepthFrame, lut: &DepthLut, mut plot: impl FnMut(i32, i32, i32)) {
    for (y, row) in frame.rows() {
        for (x, &raw) in row.iter().enumerate() {
            let code = code_of(raw);
            if code >= SENTINEL_CODE {
                continue;
            }

            let z_mm = lut.forward(code);
            if z_mm >= ZMAX {
                continue;
            }

            plot(x as i32, y as i32, z_mm);
        }
    }
}

/// Linear-depth version of the perspective image, 640x480.
pub fn render_linear(frame: &DepthFrame, lut: &DepthLut) -> OutputRaster {
    let data = frame
        .samples()
        .iter()
        .map(|&raw| {
            let depth = i64::from(lut.depth_of_raw(raw));
            let level = ((depth - i64::from(LINEAR_NEAR_MM)) * 255 / ZMAX_64).clamp(0, 255);
            (255 - level) as u8
        })
        .collect();

    OutputRaster::from_data(View::Linear, data)
}

/// Overhead view, XPIX wide by ZPIX tall.
pub fn render_overhead(frame: &DepthFrame, lut: &DepthLut) -> OutputRaster {
    let mut out = OutputRaster::zeroed(View::Overhead);
    let mut plotted = 0usize;

    for_each_plotted(frame, lut, |x, _, z_mm| {
        let x_mm = x_world(x, z_mm);
        plotted += usize::from(out.accumulate(overhead_index(x_mm, z_mm), DENSITY_WEIGHT));
    });

    debug!(plotted, "Rendered overhead view");
    out
}

/// Side view, ZPIX wide by YPIX tall.
pub fn render_side(frame: &DepthFrame, lut: &DepthLut) -> OutputRaster {
    let mut out = OutputRaster::zeroed(View::Side);
    let mut plotted = 0usize;

    for_each_plotted(frame, lut, |_, y, z_mm| {
        let y_mm = y_world(y, z_mm);
        plotted += usize::from(out.accumulate(side_index(z_mm, y_mm), DENSITY_WEIGHT));
    });

    debug!(plotted, "Rendered side view");
    out
}

/// Front view, XPIX wide by YPIX tall.
pub fn render_front(frame: &DepthFrame, lut: &DepthLut) -> OutputRaster {
    let mut out = OutputRaster::zeroed(View::Front);
    let mut plotted = 0usize;

    for_each_plotted(frame, lut, |x, y, z_mm| {
        let x_mm = x_world(x, z_mm);
        let y_mm = y_world(y, z_mm);
        plotted += usize::from(out.accumulate(front_index(x_mm, y_mm), front_weight(z_mm)));
    });

    debug!(plotted, "Rendered front view");
    out
}

/// Renders a single view.
pub fn render(view: View, frame: &DepthFrame, lut: &DepthLut) -> OutputRaster {
    match view {
        View::Linear => render_linear(frame, lut),
        View::Overhead => render_overhead(frame, lut),
        View::Side => render_side(frame, lut),
        View::Front => render_front(frame, lut),
    }
}

/// Renders several views of one frame, in the order given.
///
/// With `parallel` set, views are rendered on the rayon pool; they share only
/// the read-only frame and table.
pub fn render_views(
    views: &[View],
    frame: &DepthFrame,
    lut: &DepthLut,
    parallel: bool,
) -> Vec<OutputRaster> {
    if parallel {
        views.par_iter().map(|&view| render(view, frame, lut)).collect()
    } else {
        views.iter().map(|&view| render(view, frame, lut)).collect()
    }
}
