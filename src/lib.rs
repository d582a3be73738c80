// MIT/Apache2 License

//! Demonstrations of clipping on a 2D drawing surface.
//!
//! [`ClippedView`] draws a grid of cells. Each cell clips the same picture in a different way:
//! by a rectangle, by the difference of two rectangles, by a circle cut out of it, by the union of
//! a circle and a rectangle, by a rounded rectangle. The remaining cells draw translated and
//! skewed text and show how [`Surface::quick_reject`] works.
//!
//! Anything that implements [`Surface`] can be drawn on. [`RasterSurface`] renders into a pixel
//! buffer that can be saved as a PNG, while [`RecordingSurface`] remembers the calls made on it.

#![forbid(unsafe_code)]

mod clip;
mod error;
mod paint;
mod path;
mod renderer;

pub mod color;
pub mod geometry;
pub mod layout;
pub mod resources;
pub mod surface;
pub mod text;

pub use clip::{ClipOp, EdgeType};
pub use color::*;
pub use error::*;
pub use geometry::{Point, Rect};
pub use layout::Layout;
pub use paint::*;
pub use path::*;
pub use renderer::{ClippedView, Example, Labels};
pub use resources::{ResourceTable, Resources};
pub use surface::*;
pub use tiny_skia::Transform;
