//! Depth look-up table module
//!
//! Maps raw 11-bit sensor codes to world-space depth in millimetres and back.

mod depth_lut;

#[cfg(test)]
mod tests;

pub use depth_lut::DepthLut;
