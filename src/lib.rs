mod carpet;
pub use carpet::*;

mod config;
pub use config::*;

mod dimensions;
pub use dimensions::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

/// Drawing carpet grid lines onto a [Surface]
pub mod grid;
pub use grid::{draw_axis, draw_grid, next_position, Axis, AxisLineJob, LineWeight};

mod info;
pub use info::*;

pub mod pagesize;

pub(crate) mod refs;

mod surface;
pub use surface::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
