//! Projection view and raster types

use std::fmt;

use crate::depth_pipeline::common::constants::{FRAME_HEIGHT, FRAME_WIDTH, XPIX, YPIX, ZPIX};

/// The four output views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Perspective image with linearized depth brightness (near is bright).
    Linear,
    /// Looking down: X across, Z (distance) down the raster.
    Overhead,
    /// Looking from the side: Z across, Y up.
    Side,
    /// Looking at the sensor: X across (mirrored), Y up.
    Front,
}

impl View {
    pub const ALL: [View; 4] = [View::Linear, View::Overhead, View::Side, View::Front];

    /// Raster size as (width, height).
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            View::Linear => (FRAME_WIDTH, FRAME_HEIGHT),
            View::Overhead => (XPIX as usize, ZPIX as usize),
            View::Side => (ZPIX as usize, YPIX as usize),
            View::Front => (XPIX as usize, YPIX as usize),
        }
    }

    pub const fn byte_len(self) -> usize {
        let (width, height) = self.dimensions();
        width * height
    }

    pub const fn name(self) -> &'static str {
        match self {
            View::Linear => "linear",
            View::Overhead => "overhead",
            View::Side => "side",
            View::Front => "front",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-channel 8-bit image, row-major, sized for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRaster {
    view: View,
    data: Vec<u8>,
}

impl OutputRaster {
    /// An all-black raster for `view`.
    pub fn zeroed(view: View) -> Self {
        Self {
            view,
            data: vec![0; view.byte_len()],
        }
    }

    /// Wraps pixel data that already has the view's size.
    pub(crate) fn from_data(view: View, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), view.byte_len());
        Self { view, data }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn width(&self) -> usize {
        self.view.dimensions().0
    }

    pub fn height(&self) -> usize {
        self.view.dimensions().1
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width() {
            return None;
        }
        self.data.get(y * self.width() + x).copied()
    }

    /// Sets the cell at a flat index; out-of-raster indices are ignored.
    pub(crate) fn set_index(&mut self, index: i64, value: u8) {
        if let Some(cell) = usize::try_from(index).ok().and_then(|i| self.data.get_mut(i)) {
            *cell = value;
        }
    }

    /// Adds `weight` to the cell at a flat index, saturating at 255.
    ///
    /// Negative weights (front hits at depths <= 0) subtract and floor at 0
    /// instead of wrapping.
    ///
    /// Returns `false` and leaves the raster untouched when the index falls
    /// outside the raster.
    pub fn accumulate(&mut self, index: i64, weight: i32) -> bool {
        let Some(cell) = usize::try_from(index).ok().and_then(|i| self.data.get_mut(i)) else {
            return false;
        };

        *cell = (i32::from(*cell) + weight).clamp(0, 255) as u8;
        true
    }

    /// Number of non-zero cells.
    pub fn lit_cells(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}
