use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::depth_pipeline::common::error::{DepthError, Result};
use crate::depth_pipeline::conversions::{
    DepthFrameReader, PipelineTimings, RasterWriter, RawRasterWriter, RenderConfig,
    StandardFrameReader,
};
use crate::depth_pipeline::frame::DepthFrame;
use crate::depth_pipeline::lut::DepthLut;
use crate::depth_pipeline::projection::{OutputRaster, render_views};

pub struct DepthToRasterPipeline<'a, R: DepthFrameReader, W: RasterWriter> {
    reader: R,
    writer: W,
    lut: &'a DepthLut,
    config: RenderConfig,
}

impl DepthToRasterPipeline<'static, StandardFrameReader, RawRasterWriter> {
    /// Pipeline using the process-wide depth table and raw raster output.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            reader: StandardFrameReader::new(config.input_format),
            writer: RawRasterWriter,
            lut: DepthLut::shared(),
            config,
        }
    }
}

impl<'a, R: DepthFrameReader, W: RasterWriter> DepthToRasterPipeline<'a, R, W> {
    pub fn with_custom(reader: R, writer: W, lut: &'a DepthLut, config: RenderConfig) -> Self {
        Self {
            reader,
            writer,
            lut,
            config,
        }
    }

    fn validate_input(&self, len: usize) -> Result<()> {
        let expected = self.reader.frame_len();

        if len < expected {
            return Err(DepthError::InputTooShort {
                what: "Depth input",
                expected,
                actual: len,
            });
        }

        if len > expected {
            if self.config.strict_size {
                return Err(DepthError::UnexpectedSize {
                    what: "Depth input",
                    expected,
                    actual: len,
                });
            }
            warn!("Ignoring {} bytes past the end of the depth frame", len - expected);
        }

        Ok(())
    }

    fn render_frame(&self, frame: &DepthFrame) -> Vec<OutputRaster> {
        render_views(&self.config.views, frame, self.lut, self.config.parallel)
    }

    /// Decodes one frame and renders every configured view, without writing.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn render(&self, input_data: &[u8]) -> Result<Vec<OutputRaster>> {
        {
            let _span = tracing::info_span!("validate_input").entered();
            self.validate_input(input_data.len())?;
        }

        let frame = {
            let _span = tracing::info_span!("decode_frame").entered();
            self.reader.read_frame(input_data)?
        };

        let _span = tracing::info_span!("render_views", views = self.config.views.len()).entered();
        Ok(self.render_frame(&frame))
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting depth to raster conversion");

        let rasters = self.render(input_data)?;

        {
            let _span = tracing::info_span!("write_rasters").entered();
            for raster in &rasters {
                self.writer.write_raster(raster, output)?;
            }
        }

        info!(views = rasters.len(), "Conversion complete");
        Ok(())
    }

    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting depth to raster conversion");

        timings.time("validate_input", || self.validate_input(input_data.len()))?;
        let frame = timings.time("decode_frame", || self.reader.read_frame(input_data))?;
        let rasters = timings.time("render_views", || self.render_frame(&frame));
        timings.time("write_rasters", || {
            rasters
                .iter()
                .try_for_each(|raster| self.writer.write_raster(raster, output))
        })?;

        info!(
            "Conversion complete: {} views in {:.3}ms",
            rasters.len(),
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                DepthError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                DepthError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replaces the render settings. The reader is kept, so switching
    /// `input_format` needs a new pipeline.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    pub fn lut(&self) -> &DepthLut {
        self.lut
    }
}
