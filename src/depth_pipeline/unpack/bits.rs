//! Bit-level conversion of one packed group.
//!
//! Eight samples occupy 88 bits (11 bytes), most significant bit first: sample 0
//! starts at the top bit of byte 0 and sample 7 ends at the bottom bit of byte 10.

use crate::depth_pipeline::common::constants::{
    PACKED_GROUP_BYTES, SAMPLE_ALIGN_SHIFT, SAMPLE_MASK, SAMPLES_PER_GROUP,
};

/// Sample width in bits.
const SAMPLE_BITS: usize = 11;

/// Inverts an 11-bit code and left-aligns it in a `u16`.
///
/// This is the polarity every downstream depth lookup expects: near objects
/// get large values, and `code_of` recovers the original code.
#[inline]
pub fn invert_code(code: u16) -> u16 {
    u16::MAX - ((code & SAMPLE_MASK) << SAMPLE_ALIGN_SHIFT)
}

/// Recovers the 11-bit code (depth table index) from an inverted, left-aligned value.
#[inline]
pub fn code_of(raw: u16) -> u16 {
    (u16::MAX - raw) >> SAMPLE_ALIGN_SHIFT
}

/// Extracts the eight right-aligned 11-bit codes of a packed group.
pub fn unpack_codes(input: &[u8; PACKED_GROUP_BYTES]) -> [u16; SAMPLES_PER_GROUP] {
    let b = input.map(u16::from);

    [
        (b[0] << 3) | (b[1] >> 5),
        ((b[1] & 0x1f) << 6) | (b[2] >> 2),
        ((b[2] & 0x03) << 9) | (b[3] << 1) | (b[4] >> 7),
        ((b[4] & 0x7f) << 4) | (b[5] >> 4),
        ((b[5] & 0x0f) << 7) | (b[6] >> 1),
        ((b[6] & 0x01) << 10) | (b[7] << 2) | (b[8] >> 6),
        ((b[8] & 0x3f) << 5) | (b[9] >> 3),
        ((b[9] & 0x07) << 8) | b[10],
    ]
}

/// Unpacks and inverts 8 packed pixels into MSB-aligned 16-bit values.
pub fn unpack11_to_16(input: &[u8; PACKED_GROUP_BYTES]) -> [u16; SAMPLES_PER_GROUP] {
    unpack_codes(input).map(invert_code)
}

/// Packs 8 LSB-aligned 11-bit codes into 11 bytes.
///
/// Bits above the low 11 of each input are ignored.
pub fn pack16_to_11(input: &[u16; SAMPLES_PER_GROUP]) -> [u8; PACKED_GROUP_BYTES] {
    let s = input.map(|v| v & SAMPLE_MASK);

    [
        (s[0] >> 3) as u8,
        (((s[0] & 0x07) << 5) | (s[1] >> 6)) as u8,
        (((s[1] & 0x3f) << 2) | (s[2] >> 9)) as u8,
        ((s[2] & 0x1fe) >> 1) as u8,
        (((s[2] & 0x01) << 7) | (s[3] >> 4)) as u8,
        (((s[3] & 0x0f) << 4) | (s[4] >> 7)) as u8,
        (((s[4] & 0x7f) << 1) | (s[5] >> 10)) as u8,
        ((s[5] & 0x3fc) >> 2) as u8,
        (((s[5] & 0x03) << 6) | (s[6] >> 5)) as u8,
        (((s[6] & 0x1f) << 3) | (s[7] >> 8)) as u8,
        (s[7] & 0xff) as u8,
    ]
}

/// Unpacks 8 packed pixels into the top 8 bits of their inverted 16-bit values.
pub fn unpack11_to_8(input: &[u8; PACKED_GROUP_BYTES]) -> [u8; SAMPLES_PER_GROUP] {
    unpack11_to_16(input).map(|v| (v >> 8) as u8)
}

/// Decodes a single right-aligned 11-bit code straight from a packed buffer.
///
/// Reads the big-endian 32-bit word starting at byte `(pixel * 11) >> 3` and
/// shifts the sample down. The sample always sits in the top three bytes of that
/// word, so bytes past the end of `buf` are read as zero without changing the
/// result. Returns `None` when the pixel's bits are not wholly inside `buf`.
pub fn pixel_value_11(buf: &[u8], pixel: usize) -> Option<u16> {
    let bit_end = pixel.checked_mul(SAMPLE_BITS)?.checked_add(SAMPLE_BITS)?;
    if bit_end > buf.len().saturating_mul(8) {
        return None;
    }

    let byte_index = (pixel * SAMPLE_BITS) >> 3;
    let shift_bits = ((7 + pixel * 5) & 0x7) + 14;

    let word = (0..4).fold(0u32, |word, k| {
        (word << 8) | u32::from(buf.get(byte_index + k).copied().unwrap_or(0))
    });

    Some((word >> shift_bits) as u16 & SAMPLE_MASK)
}
