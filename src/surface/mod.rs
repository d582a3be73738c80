// MIT/Apache2 License

use crate::{ClipOp, Color, EdgeType, Paint, Path, Rect, Transform};

/// Default implementations of `Surface` functions.
mod defaults;
/// Provides the `SurfaceFeatures` type.
mod features;
/// Implements `Surface` on `&mut Surface`.
mod mut_impl;
/// A software surface backed by a pixel buffer.
mod raster;
/// A surface that remembers what was done to it.
mod recording;

pub use features::SurfaceFeatures;
pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface};

/// Something that can be drawn upon; otherwise known as the whole point of this crate.
///
/// A `Surface` carries a stack of states. Each state holds a transform, applied to the coordinates
/// of every later call, and a clip region, outside of which nothing is drawn. `save()` pushes a
/// copy of the current state and `restore()` pops back to it, so whatever a routine does between
/// the two never leaks into the next one.
///
/// Implementors need to provide:
///
/// * State handling via `save`, `restore`, `save_count`, `transform` and `concat`.
/// * Clipping via `clip_path`. Rectangle clipping is implemented in terms of it by default.
/// * `quick_reject`, a cheap and conservative test against the bounds of the clip.
/// * Filling via `draw_color` and `draw_path`, and stroking via `draw_line`. Rectangles, rounded
///   rectangles, circles and text are built as paths by default, although a surface that can draw
///   them natively should override those methods.
pub trait Surface {
    /* Setup */

    /// Get an enumeration of the features that this `Surface` is capable of.
    ///
    /// See the [`SurfaceFeatures`] structure for more information.
    fn features(&self) -> SurfaceFeatures;

    /* State */

    /// Push a copy of the current transform and clip. Returns the save count from before the push,
    /// which can later be handed to `restore_to_count()`.
    fn save(&mut self) -> usize;
    /// Pop the state pushed by the matching `save()`.
    ///
    /// Returns `Error::RestoreUnderflow` if there is no such state.
    fn restore(&mut self) -> crate::Result;
    /// The number of states pushed by `save()` and not yet restored.
    fn save_count(&self) -> usize;
    /// Restore until the save count is `count`.
    #[inline]
    fn restore_to_count(&mut self, count: usize) -> crate::Result {
        defaults::restore_to_count(self, count)
    }

    /* Transforms */

    /// The current transform.
    fn transform(&self) -> Transform;
    /// Pre-multiply the current transform by `transform`, so that it applies to coordinates first.
    fn concat(&mut self, transform: Transform) -> crate::Result;
    /// Move the origin by `(dx, dy)`.
    ///
    /// Returns `Error::NotSupported` if the surface does not support transforms.
    #[inline]
    fn translate(&mut self, dx: f32, dy: f32) -> crate::Result {
        defaults::concat_checked(self, Transform::from_translate(dx, dy))
    }
    /// Shear coordinates: `x` grows by `sx * y` and `y` grows by `sy * x`.
    #[inline]
    fn skew(&mut self, sx: f32, sy: f32) -> crate::Result {
        defaults::concat_checked(self, Transform::from_skew(sx, sy))
    }

    /* Clipping */

    /// Combine the clip with the area filled by `path`, using the non-zero winding rule.
    fn clip_path(&mut self, path: &Path, op: ClipOp) -> crate::Result;
    /// Combine the clip with a rectangle.
    #[inline]
    fn clip_rect(&mut self, rect: Rect, op: ClipOp) -> crate::Result {
        defaults::clip_rect(self, rect, op)
    }
    /// Remove a rectangle from the clip.
    #[inline]
    fn clip_out_rect(&mut self, rect: Rect) -> crate::Result {
        self.clip_rect(rect, ClipOp::Difference)
    }
    /// Remove the area of a path from the clip.
    ///
    /// Returns `Error::NotSupported` if the surface cannot clip to arbitrary paths.
    #[inline]
    fn clip_out_path(&mut self, path: &Path) -> crate::Result {
        defaults::clip_out_path(self, path)
    }
    /// Is `rect`, once transformed, certain to lie outside of the clip?
    ///
    /// This only looks at bounds, so `false` does not promise that anything will be drawn.
    fn quick_reject(&self, rect: Rect, edge: EdgeType) -> bool;

    /* Drawing */

    /// Fill the entire clip region with `color`.
    fn draw_color(&mut self, color: Color) -> crate::Result;
    /// Stroke a straight line using the paint's color and stroke width.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint) -> crate::Result;
    /// Fill a path using the paint's color.
    fn draw_path(&mut self, path: &Path, paint: &Paint) -> crate::Result;
    /// Fill a rectangle.
    #[inline]
    fn draw_rect(&mut self, rect: Rect, paint: &Paint) -> crate::Result {
        defaults::draw_rect(self, rect, paint)
    }
    /// Fill a rectangle with elliptical corners.
    #[inline]
    fn draw_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, paint: &Paint) -> crate::Result {
        defaults::draw_round_rect(self, rect, rx, ry, paint)
    }
    /// Fill a circle.
    #[inline]
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) -> crate::Result {
        defaults::draw_circle(self, cx, cy, radius, paint)
    }
    /// Draw a line of text with its baseline at `y`, aligned on `x` according to the paint.
    ///
    /// Returns `Error::NotSupported` if the surface cannot draw text.
    #[inline]
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) -> crate::Result {
        defaults::draw_text(self, text, x, y, paint)
    }
}
