//! Depth frame type
//!
//! A validated 640x480 field of inverted, left-aligned 16-bit depth values,
//! the input to every renderer.

use crate::depth_pipeline::common::constants::{
    FRAME_BYTES, FRAME_HEIGHT, FRAME_PIXELS, FRAME_WIDTH, PACKED_FRAME_BYTES,
};
use crate::depth_pipeline::common::error::{DepthError, Result};
use crate::depth_pipeline::unpack::{invert_code, unpack_stream};

/// One full depth image in sensor order (row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFrame {
    data: Vec<u16>,
}

impl DepthFrame {
    /// Wraps inverted 16-bit values. Extra samples past one frame are dropped.
    pub fn new(mut data: Vec<u16>) -> Result<Self> {
        DepthError::check_len("Depth frame", FRAME_BYTES, data.len() * 2)?;
        data.truncate(FRAME_PIXELS);
        Ok(Self { data })
    }

    /// A frame with every pixel set to the same raw value.
    pub fn filled(raw: u16) -> Self {
        Self {
            data: vec![raw; FRAME_PIXELS],
        }
    }

    /// Builds a frame from right-aligned 11-bit codes.
    pub fn from_codes(codes: &[u16]) -> Result<Self> {
        Self::new(codes.iter().copied().map(invert_code).collect())
    }

    /// Reads 16-bit little-endian samples.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        DepthError::check_len("Depth data", FRAME_BYTES, bytes.len())?;

        Ok(Self {
            data: bytes[..FRAME_BYTES]
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect(),
        })
    }

    /// Unpacks a frame of 11-bit packed samples.
    pub fn from_packed(bytes: &[u8]) -> Result<Self> {
        DepthError::check_len("Packed depth data", PACKED_FRAME_BYTES, bytes.len())?;
        Self::new(unpack_stream(&bytes[..PACKED_FRAME_BYTES])?)
    }

    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    pub fn samples(&self) -> &[u16] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        if x >= FRAME_WIDTH || y >= FRAME_HEIGHT {
            return None;
        }
        Some(self.data[y * FRAME_WIDTH + x])
    }

    /// Sets one raw value. Coordinates outside the frame are ignored.
    pub fn set(&mut self, x: usize, y: usize, raw: u16) {
        if x < FRAME_WIDTH && y < FRAME_HEIGHT {
            self.data[y * FRAME_WIDTH + x] = raw;
        }
    }

    /// Sets one pixel from a right-aligned 11-bit code.
    pub fn set_code(&mut self, x: usize, y: usize, code: u16) {
        self.set(x, y, invert_code(code));
    }

    /// Rows of the frame with their y coordinate.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[u16])> {
        self.data.chunks_exact(FRAME_WIDTH).enumerate()
    }
}
