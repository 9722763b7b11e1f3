//! Pipeline conversions module
//!
//! Orchestrates reading a depth frame, rendering the configured views and
//! writing the rasters out.

mod depth_to_raster;
mod frame_reader;
mod raw_writer;
mod reader;
mod timing;
mod types;
mod writer;

#[cfg(test)]
mod tests;

pub use depth_to_raster::DepthToRasterPipeline;
pub use frame_reader::StandardFrameReader;
pub use raw_writer::RawRasterWriter;
pub use reader::DepthFrameReader;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{InputFormat, RenderConfig, RenderConfigBuilder};
pub use writer::RasterWriter;
