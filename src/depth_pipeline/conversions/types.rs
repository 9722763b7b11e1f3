//! Render pipeline configuration types

use crate::depth_pipeline::common::constants::{FRAME_BYTES, PACKED_FRAME_BYTES};
use crate::depth_pipeline::projection::View;

/// Layout of the incoming depth data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// 16-bit little-endian samples, already unpacked and inverted.
    #[default]
    Unpacked,
    /// Raw 11-bit packed sensor stream.
    Packed,
}

impl InputFormat {
    /// Bytes in one frame of this format.
    pub const fn frame_len(self) -> usize {
        match self {
            InputFormat::Unpacked => FRAME_BYTES,
            InputFormat::Packed => PACKED_FRAME_BYTES,
        }
    }
}

/// Configuration for depth to raster rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Views to render, written in this order
    pub views: Vec<View>,
    /// Layout of the input data
    pub input_format: InputFormat,
    /// Reject input that is longer than one frame instead of ignoring the excess.
    /// Short input is always rejected.
    pub strict_size: bool,
    /// Render views on the rayon pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            views: View::ALL.to_vec(),
            input_format: InputFormat::Unpacked,
            strict_size: false,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Builder for RenderConfig
#[derive(Default)]
pub struct RenderConfigBuilder {
    views: Option<Vec<View>>,
    input_format: Option<InputFormat>,
    strict_size: Option<bool>,
    parallel: Option<bool>,
}

impl RenderConfigBuilder {
    pub fn views(mut self, views: impl Into<Vec<View>>) -> Self {
        self.views = Some(views.into());
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.views.get_or_insert_with(Vec::new).push(view);
        self
    }

    pub fn input_format(mut self, format: InputFormat) -> Self {
        self.input_format = Some(format);
        self
    }

    pub fn strict_size(mut self, strict: bool) -> Self {
        self.strict_size = Some(strict);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn build(self) -> RenderConfig {
        let default = RenderConfig::default();
        RenderConfig {
            views: self.views.unwrap_or(default.views),
            input_format: self.input_format.unwrap_or(default.input_format),
            strict_size: self.strict_size.unwrap_or(default.strict_size),
            parallel: self.parallel.unwrap_or(default.parallel),
        }
    }
}
