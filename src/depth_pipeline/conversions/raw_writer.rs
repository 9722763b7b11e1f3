use std::io::Write;

use tracing::debug;

use crate::depth_pipeline::common::error::Result;
use crate::depth_pipeline::conversions::writer::RasterWriter;
use crate::depth_pipeline::projection::OutputRaster;

/// Writes raster bytes with no header or framing; readers must know the view size.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRasterWriter;

impl RasterWriter for RawRasterWriter {
    fn write_raster(&self, raster: &OutputRaster, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Writing {} raster: {}x{}",
            raster.view(),
            raster.width(),
            raster.height()
        );

        output.write_all(raster.data())?;
        Ok(())
    }
}
