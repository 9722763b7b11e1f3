//! Depth frame reader for the sensor's packed and unpacked layouts.

use tracing::debug;

use crate::depth_pipeline::common::error::Result;
use crate::depth_pipeline::conversions::reader::DepthFrameReader;
use crate::depth_pipeline::conversions::types::InputFormat;
use crate::depth_pipeline::frame::DepthFrame;

/// Decodes one frame in the given [`InputFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFrameReader {
    format: InputFormat,
}

impl StandardFrameReader {
    pub fn new(format: InputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }
}

impl DepthFrameReader for StandardFrameReader {
    fn frame_len(&self) -> usize {
        self.format.frame_len()
    }

    fn read_frame(&self, data: &[u8]) -> Result<DepthFrame> {
        debug!("Decoding {:?} depth frame, {} bytes", self.format, data.len());

        match self.format {
            InputFormat::Unpacked => DepthFrame::from_le_bytes(data),
            InputFormat::Packed => DepthFrame::from_packed(data),
        }
    }
}
