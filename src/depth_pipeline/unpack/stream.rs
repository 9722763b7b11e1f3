//! Whole-buffer packing and unpacking.

use tracing::debug;

use crate::depth_pipeline::common::constants::{PACKED_GROUP_BYTES, SAMPLES_PER_GROUP};
use crate::depth_pipeline::common::error::{DepthError, Result};
use crate::depth_pipeline::unpack::bits::{
    invert_code, pack16_to_11, pixel_value_11, unpack11_to_8, unpack11_to_16,
};

/// Splits `packed` into complete 11-byte groups, failing if there is not even one.
///
/// A trailing partial group is ignored.
fn packed_groups(packed: &[u8]) -> Result<&[[u8; PACKED_GROUP_BYTES]]> {
    DepthError::check_len("Packed depth data", PACKED_GROUP_BYTES, packed.len())?;

    let (groups, remainder) = packed.as_chunks::<PACKED_GROUP_BYTES>();
    if !remainder.is_empty() {
        debug!("Ignoring {} trailing bytes of packed depth data", remainder.len());
    }

    Ok(groups)
}

/// Unpacks every complete 11-byte group of `packed` into inverted 16-bit values.
///
/// A trailing partial group is ignored. Fails if not even one group is present.
pub fn unpack_stream(packed: &[u8]) -> Result<Vec<u16>> {
    Ok(packed_groups(packed)?
        .iter()
        .flat_map(unpack11_to_16)
        .collect())
}

/// Like [`unpack_stream`], keeping only the top 8 bits of each value.
pub fn unpack_stream_8(packed: &[u8]) -> Result<Vec<u8>> {
    Ok(packed_groups(packed)?
        .iter()
        .flat_map(unpack11_to_8)
        .collect())
}

/// Decodes `count` pixels one at a time with random access, producing the
/// same inverted 16-bit values as [`unpack_stream`].
pub fn unpack_pixels(packed: &[u8], count: usize) -> Result<Vec<u16>> {
    let required = (count * PACKED_GROUP_BYTES).div_ceil(SAMPLES_PER_GROUP);
    DepthError::check_len("Packed depth data", required, packed.len())?;

    Ok((0..count)
        .map(|pixel| invert_code(pixel_value_11(packed, pixel).unwrap_or_default()))
        .collect())
}

/// Random-access decode of every complete group in `packed`; the same output as
/// [`unpack_stream`], with the same size check.
pub fn unpack_stream_pixels(packed: &[u8]) -> Result<Vec<u16>> {
    let groups = packed_groups(packed)?;
    unpack_pixels(packed, groups.len() * SAMPLES_PER_GROUP)
}

/// Packs right-aligned 11-bit codes into a byte stream.
///
/// A final partial group is padded with zero codes.
pub fn pack_stream(codes: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len().div_ceil(SAMPLES_PER_GROUP) * PACKED_GROUP_BYTES);

    for chunk in codes.chunks(SAMPLES_PER_GROUP) {
        let mut group = [0u16; SAMPLES_PER_GROUP];
        group[..chunk.len()].copy_from_slice(chunk);
        out.extend_from_slice(&pack16_to_11(&group));
    }

    out
}
