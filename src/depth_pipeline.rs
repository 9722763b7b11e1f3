//! Depth processing pipeline module
//!
//! Unpacks 11-bit depth samples, maps them to millimetres through the depth
//! look-up table and renders the linear, overhead, side and front views.

pub mod boundary;
pub mod common;
pub mod conversions;
pub mod frame;
pub mod lut;
pub mod projection;
pub mod unpack;
pub mod world;

pub use common::{
    DepthError,
    Result,
};

pub use frame::DepthFrame;

pub use lut::DepthLut;

pub use world::{
    WorldPoint,
    world_point,
    x_world,
    y_world,
};

pub use projection::{
    OutputRaster,
    View,
    render,
    render_views,
};

pub use conversions::{
    DepthToRasterPipeline,
    InputFormat,
    RenderConfig,
    RenderConfigBuilder,
};
