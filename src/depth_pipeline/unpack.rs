//! 11-bit sample packing module
//!
//! Conversions between the sensor's packed 11-bit stream and per-pixel values,
//! one 11-byte group at a time or across a whole buffer.

mod bits;
mod stream;


pub use bits::{
    code_of, invert_code, pack16_to_11, pixel_value_11, unpack11_to_8, unpack11_to_16,
    unpack_codes,
};
pub use stream::{
    pack_stream, unpack_pixels, unpack_stream, unpack_stream_8, unpack_stream_pixels,
};
