//! World-space mapping
//!
//! Converts a sensor pixel plus depth into millimetre offsets from the sensor
//! axis using fixed-point arithmetic, so the per-pixel render loops never touch
//! floating point.

use crate::depth_pipeline::common::constants::{FRAME_HEIGHT, FRAME_WIDTH, SENTINEL_CODE, ZMAX};
use crate::depth_pipeline::lut::DepthLut;

/// Half the sensor width; the horizontal optical centre.
const HALF_WIDTH: i32 = (FRAME_WIDTH / 2) as i32;

/// Offset that turns a row index into an equivalent column index. The sensor's
/// pixels are square, so the vertical mapping reuses the horizontal one.
const ROW_TO_COLUMN: i32 = ((FRAME_WIDTH - FRAME_HEIGHT) / 2) as i32;

/// tan(28°) in Q11 (0.5317 * 2048).
const TAN_HALF_FOV_Q11: i64 = 1089;

/// 1/10 in Q19 (0xcccd / 2^19 = 0.1000003).
const TENTH_Q19: i64 = 0xcccd;

/// Total fraction bits: 11 (tangent) + 19 (tenth) + 5, the 5 together with the
/// tenth giving the 1/320 pixel normalisation.
const FRACTION_BITS: u32 = 35;

/// Half an output unit, so the final shift rounds to nearest (ties up).
const ROUNDING_BIAS: i64 = 1 << (FRACTION_BITS - 1);

/// World X offset in millimetres of column `pixel_x` at depth `z_mm`.
///
/// Evaluates `z * (320 - x) * tan(28°) / 320` in `i64`, rounding half up.
/// Positive X is to the sensor's left.
#[inline]
pub fn x_world(pixel_x: i32, z_mm: i32) -> i32 {
    let scaled = i64::from(z_mm) * i64::from(HALF_WIDTH - pixel_x) * TAN_HALF_FOV_Q11 * TENTH_Q19;

    ((scaled + ROUNDING_BIAS) >> FRACTION_BITS) as i32
}

/// World Y offset in millimetres of row `pixel_y` at depth `z_mm`. Positive Y is up.
#[inline]
pub fn y_world(pixel_y: i32, z_mm: i32) -> i32 {
    x_world(pixel_y + ROW_TO_COLUMN, z_mm)
}

/// A point in sensor-centred world space, millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WorldPoint {
    pub x_mm: i32,
    pub y_mm: i32,
    pub z_mm: i32,
}

impl WorldPoint {
    /// Projects a pixel at a known depth into world space.
    pub fn from_pixel(pixel_x: i32, pixel_y: i32, z_mm: i32) -> Self {
        Self {
            x_mm: x_world(pixel_x, z_mm),
            y_mm: y_world(pixel_y, z_mm),
            z_mm,
        }
    }
}

/// World position of a pixel with 11-bit code `code`, or `None` when the code is
/// the sentinel or its depth is at or past ZMAX. Matches what the renderers plot,
/// so codes past the calibrated range give points behind the sensor.
pub fn world_point(pixel_x: i32, pixel_y: i32, code: u16, lut: &DepthLut) -> Option<WorldPoint> {
    if code >= SENTINEL_CODE {
        return None;
    }

    let z_mm = lut.forward(code);
    if z_mm >= ZMAX {
        return None;
    }

    Some(WorldPoint::from_pixel(pixel_x, pixel_y, z_mm))
}
