use std::io::Write;

use crate::depth_pipeline::common::error::Result;
use crate::depth_pipeline::projection::OutputRaster;

pub trait RasterWriter {
    fn write_raster(&self, raster: &OutputRaster, output: &mut dyn Write) -> Result<()>;
}
