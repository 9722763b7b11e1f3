//! Reference grids for the orthogonal views.
//!
//! Lines are placed at world-space intervals so they line up with rendered
//! points: vertical lines mirror out from the centre column, and depth lines
//! start at the sensor.

use crate::depth_pipeline::common::constants::{XMAX, XPIX, YMAX, YPIX, ZMAX, ZPIX};
use crate::depth_pipeline::projection::types::{OutputRaster, View};

const MINOR_SPACING_MM: usize = 500;
const MINOR_COLOR: u8 = 128;
const MAJOR_SPACING_MM: usize = 1000;
const MAJOR_COLOR: u8 = 255;

/// Draws grid lines every `spacing_mm` millimetres onto `raster`.
///
/// The linear view has no world axes and is left untouched.
pub fn draw_grid(raster: &mut OutputRaster, color: u8, spacing_mm: usize) {
    let spacing = spacing_mm.max(1);

    match raster.view() {
        View::Linear => {}
        View::Overhead => {
            for x in (0..XMAX / 2).step_by(spacing) {
                let column = x * XPIX / XMAX;
                for z in 0..ZPIX {
                    plot(raster, z * XPIX + XPIX / 2 + column, color);
                    plot(raster, z * XPIX + XPIX / 2 - column, color);
                }
            }
            for z in (0..ZMAX).step_by(spacing) {
                let row = z * ZPIX / ZMAX;
                for x in 0..XPIX {
                    plot(raster, row * XPIX + x, color);
                }
            }
        }
        View::Side => {
            for y in (0..YMAX / 2).step_by(spacing) {
                let rows = y * YPIX / YMAX;
                for z in 0..ZPIX {
                    plot(raster, (YPIX / 2 + rows) * ZPIX + z, color);
                    plot(raster, (YPIX / 2 - rows) * ZPIX + z, color);
                }
            }
            for z in (0..ZMAX).step_by(spacing) {
                let column = z * ZPIX / ZMAX;
                for y in 0..YPIX {
                    plot(raster, y * ZPIX + column, color);
                }
            }
        }
        View::Front => {
            for x in (0..XMAX / 2).step_by(spacing) {
                let column = x * XPIX / XMAX;
                for y in 0..YPIX {
                    plot(raster, y * XPIX + XPIX / 2 + column, color);
                    plot(raster, y * XPIX + XPIX / 2 - column, color);
                }
            }
            for y in (0..YMAX / 2).step_by(spacing) {
                let rows = y * YPIX / YMAX;
                for x in 0..XPIX {
                    plot(raster, (YPIX / 2 + rows) * XPIX + x, color);
                    plot(raster, (YPIX / 2 - rows) * XPIX + x, color);
                }
            }
        }
    }
}

/// Minor lines every 500 mm and major lines every metre, on a black raster.
///
/// Returns `None` for the linear view.
pub fn reference_grid(view: View) -> Option<OutputRaster> {
    if view == View::Linear {
        return None;
    }

    let mut raster = OutputRaster::zeroed(view);
    draw_grid(&mut raster, MINOR_COLOR, MINOR_SPACING_MM);
    draw_grid(&mut raster, MAJOR_COLOR, MAJOR_SPACING_MM);
    Some(raster)
}

fn plot(raster: &mut OutputRaster, index: i32, color: u8) {
    raster.set_index(i64::from(index), color);
}
