//! Projection rendering module
//!
//! Rasterizes a depth frame into the linear, overhead, side and front views,
//! plus the reference grids drawn underneath the orthogonal views.

mod grid;
mod renderer;
pub mod types;


pub use grid::{draw_grid, reference_grid};
pub use renderer::{
    front_index, front_weight, overhead_index, render, render_front, render_linear,
    render_overhead, render_side, render_views, side_index,
};
pub use types::{OutputRaster, View};
