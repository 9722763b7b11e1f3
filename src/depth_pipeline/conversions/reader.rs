use crate::depth_pipeline::common::error::Result;
use crate::depth_pipeline::frame::DepthFrame;

pub trait DepthFrameReader {
    /// Bytes needed for one frame.
    fn frame_len(&self) -> usize;

    fn read_frame(&self, data: &[u8]) -> Result<DepthFrame>;
}
