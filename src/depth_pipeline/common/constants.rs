//! Sensor and projection geometry.
//!
//! The world extents assume xmax ~= 3.797 m and ymax ~= 2.848 m at z ~= 7 m,
//! i.e. `x = 5 * tan(28°) / tan(35°)` and `y = x * 3 / 4`. Callers rely on
//! these exact values, so they are part of the public API.

/// Depth image width in sensor pixels.
pub const FRAME_WIDTH: usize = 640;
/// Depth image height in sensor pixels.
pub const FRAME_HEIGHT: usize = 480;
/// Samples in one depth image.
pub const FRAME_PIXELS: usize = FRAME_WIDTH * FRAME_HEIGHT;
/// Size of an unpacked 16-bit depth image in bytes.
pub const FRAME_BYTES: usize = FRAME_PIXELS * 2;

/// Packed bytes holding one group of samples.
pub const PACKED_GROUP_BYTES: usize = 11;
/// Samples held by one packed group.
pub const SAMPLES_PER_GROUP: usize = 8;
/// Size of a packed 11-bit depth image in bytes.
pub const PACKED_FRAME_BYTES: usize = FRAME_PIXELS * PACKED_GROUP_BYTES / SAMPLES_PER_GROUP;

/// Mask for one 11-bit sample.
pub const SAMPLE_MASK: u16 = 0x7ff;
/// Left shift that aligns an 11-bit sample to the top of a `u16`.
pub const SAMPLE_ALIGN_SHIFT: u32 = 5;

/// Number of entries in the depth table (one per 11-bit code).
pub const LUT_SIZE: usize = 2048;
/// Raw code meaning "no return".
pub const SENTINEL_CODE: u16 = 2047;
/// Depth stored for [`SENTINEL_CODE`].
pub const SENTINEL_DEPTH_MM: i32 = 1_048_576;

/// Overhead/front raster width.
pub const XPIX: i32 = 500;
/// Side/front raster height.
pub const YPIX: i32 = 500;
/// Depth axis resolution of the overhead and side rasters.
pub const ZPIX: i32 = 500;
/// Full world width covered by the X axis (2 * xmax), millimetres.
pub const XMAX: i32 = 7594;
/// Full world height covered by the Y axis (2 * ymax), millimetres.
pub const YMAX: i32 = 5696;
/// Far clipping depth, millimetres.
pub const ZMAX: i32 = 7000;
/// Highest raw code with a meaningful (positive, monotonic) depth.
pub const PXZMAX: i32 = 1092;

/// Depth that maps to full brightness in the linear view, millimetres.
pub const LINEAR_NEAR_MM: i32 = 400;
