//! Byte-buffer entry points
//!
//! Checked wrappers for hosts that hand over raw byte buffers: each call
//! validates the input size, uses the process-wide depth table, and returns a
//! newly allocated output buffer. Depth samples cross this boundary as
//! little-endian `u16`.

use tracing::instrument;

use crate::depth_pipeline::common::error::Result;
use crate::depth_pipeline::frame::DepthFrame;
use crate::depth_pipeline::lut::DepthLut;
use crate::depth_pipeline::projection::{View, render};
use crate::depth_pipeline::unpack::unpack_stream;

/// Unpacks 11-bit data into left-aligned little-endian 16-bit samples.
///
/// Needs at least one 11-byte group; a trailing partial group is ignored.
#[instrument(skip_all, fields(input_size = data.len()))]
pub fn unpack11_to_16_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let samples = unpack_stream(data)?;
    Ok(samples.iter().flat_map(|v| v.to_le_bytes()).collect())
}

/// Renders `view` from a 640x480 16-bit depth image (614 400 bytes or more).
#[instrument(skip(data), fields(input_size = data.len()))]
pub fn plot_bytes(view: View, data: &[u8]) -> Result<Vec<u8>> {
    let frame = DepthFrame::from_le_bytes(data)?;
    Ok(render(view, &frame, DepthLut::shared()).into_data())
}

/// 640x480 linear depth image.
pub fn plot_linear_bytes(data: &[u8]) -> Result<Vec<u8>> {
    plot_bytes(View::Linear, data)
}

/// XPIX x ZPIX overhead view.
pub fn plot_overhead_bytes(data: &[u8]) -> Result<Vec<u8>> {
    plot_bytes(View::Overhead, data)
}

/// ZPIX x YPIX side view.
pub fn plot_side_bytes(data: &[u8]) -> Result<Vec<u8>> {
    plot_bytes(View::Side, data)
}

/// XPIX x YPIX front view.
pub fn plot_front_bytes(data: &[u8]) -> Result<Vec<u8>> {
    plot_bytes(View::Front, data)
}
