//! Common utilities module
//!
//! Shared error type and the fixed sensor/raster geometry used across the depth pipeline.

pub mod constants;
pub mod error;

pub use error::{DepthError, Result};
