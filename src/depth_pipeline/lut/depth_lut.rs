use std::sync::OnceLock;

use tracing::debug;

use crate::depth_pipeline::common::constants::{
    LUT_SIZE, PXZMAX, SENTINEL_CODE, SENTINEL_DEPTH_MM,
};
use crate::depth_pipeline::common::error::{DepthError, Result};
use crate::depth_pipeline::unpack::code_of;

/// Depth look-up table translating a sensor code into millimetres.
///
/// Entries `0..=PXZMAX` are non-decreasing. Past `PXZMAX` the calibration curve
/// crosses its asymptote and the entries go negative, so only that prefix is
/// searched by [`DepthLut::reverse`]. Entry 2047 holds the "no return" sentinel.
///
/// The table is immutable once built; share it by reference, or use
/// [`DepthLut::shared`] for the process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthLut {
    entries: [i32; LUT_SIZE],
}

static SHARED: OnceLock<DepthLut> = OnceLock::new();

impl DepthLut {
    /// Computes the table from the sensor calibration curve.
    ///
    /// Evaluated in single precision with the calibration constants as written.
    pub fn new() -> Self {
        let mut entries = [0i32; LUT_SIZE];

        for (code, entry) in entries
            .iter_mut()
            .enumerate()
            .take(usize::from(SENTINEL_CODE))
        {
            *entry = (0.1236f32 * (code as f32 / 2842.5f32 + 1.1863f32).tan() * 1000.0f32) as i32;
        }
        entries[usize::from(SENTINEL_CODE)] = SENTINEL_DEPTH_MM;

        Self { entries }
    }

    /// The process-wide table, built on first use.
    pub fn shared() -> &'static DepthLut {
        SHARED.get_or_init(|| {
            debug!("Initializing depth look-up table");
            DepthLut::new()
        })
    }

    /// Uses a caller-supplied table, e.g. a synthetic one for testing.
    ///
    /// Fails if entries `0..=PXZMAX` are not non-decreasing.
    pub fn from_entries(entries: [i32; LUT_SIZE]) -> Result<Self> {
        let searchable = &entries[..=PXZMAX as usize];
        if let Some(index) = searchable.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(DepthError::NonMonotonicLut { index });
        }

        Ok(Self { entries })
    }

    /// Depth in millimetres for an 11-bit code.
    ///
    /// # Panics
    ///
    /// Panics if `code` is not below 2048.
    #[inline]
    pub fn forward(&self, code: u16) -> i32 {
        self.entries[usize::from(code)]
    }

    /// Depth for an 11-bit code, or `None` if it is out of range.
    pub fn get(&self, code: u16) -> Option<i32> {
        self.entries.get(usize::from(code)).copied()
    }

    /// Depth for an inverted, left-aligned 16-bit sample.
    #[inline]
    pub fn depth_of_raw(&self, raw: u16) -> i32 {
        self.forward(code_of(raw))
    }

    /// Finds the code whose depth is closest to `depth_mm` without going over.
    ///
    /// Returns the largest index in `0..=PXZMAX` with `lut[index] <= depth_mm`.
    /// Depths below the first entry clamp to 0 and depths past the last
    /// searchable entry clamp to `PXZMAX`.
    pub fn reverse(&self, depth_mm: i32) -> u16 {
        let searchable = &self.entries[..=PXZMAX as usize];
        let above = searchable.partition_point(|&entry| entry <= depth_mm);

        above.saturating_sub(1) as u16
    }

    pub fn entries(&self) -> &[i32; LUT_SIZE] {
        &self.entries
    }
}

impl Default for DepthLut {
    fn default() -> Self {
        Self::new()
    }
}
