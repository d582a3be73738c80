// MIT/Apache2 License

use crate::geometry::{self, Point, Rect};
use lyon_path::{
    builder::BorderRadii,
    math::{point, Box2D, Transform as LyonTransform},
    Path as LyonPath, PathEvent, Winding,
};
use std::iter;

/// The order in which a closed contour is traversed.
///
/// Contours added with the same direction union together when filled; see [`Path`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl From<Direction> for Winding {
    #[inline]
    fn from(dir: Direction) -> Winding {
        match dir {
            Direction::Clockwise => Winding::Positive,
            Direction::CounterClockwise => Winding::Negative,
        }
    }
}

/// A reusable outline made of closed contours.
///
/// Each `add_*` call appends one contour. The path is filled using the non-zero winding rule, so
/// contours that overlap and share a [`Direction`] form their union. `rewind()` empties the path
/// while keeping its allocation around for the next shape.
#[derive(Debug, Clone, Default)]
pub struct Path {
    contours: Vec<LyonPath>,
}

impl Path {
    /// Create a new, empty path.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every contour, keeping the allocated storage for reuse.
    #[inline]
    pub fn rewind(&mut self) {
        self.contours.clear();
    }

    /// Remove every contour and release the storage.
    #[inline]
    pub fn reset(&mut self) {
        self.contours = Vec::new();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// The number of contours in this path.
    #[inline]
    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    /// Append a circle. Circles with a non-positive or non-finite radius are skipped.
    pub fn add_circle(&mut self, cx: f32, cy: f32, radius: f32, dir: Direction) {
        if !(radius > 0.0 && radius.is_finite() && cx.is_finite() && cy.is_finite()) {
            log::debug!("Skipping degenerate circle at ({}, {}) r={}", cx, cy, radius);
            return;
        }

        let mut builder = LyonPath::builder();
        builder.add_circle(point(cx, cy), radius, dir.into());
        self.contours.push(builder.build());
    }

    /// Append a rectangle. Empty or inverted rectangles are skipped.
    pub fn add_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, dir: Direction) {
        let bounds = geometry::rect(left, top, right, bottom);
        if !geometry::is_drawable(&bounds) {
            log::debug!("Skipping degenerate rectangle {:?}", bounds);
            return;
        }

        let mut builder = LyonPath::builder();
        builder.add_rectangle(&bounds, dir.into());
        self.contours.push(builder.build());
    }

    /// Append a rectangle with elliptical corners of radii `rx` and `ry`.
    ///
    /// Radii are clamped to half the rectangle's width and height. If either radius is zero, a plain
    /// rectangle is appended.
    pub fn add_round_rect(&mut self, rect: &Rect, rx: f32, ry: f32, dir: Direction) {
        if !geometry::is_drawable(rect) || !rx.is_finite() || !ry.is_finite() {
            log::debug!("Skipping degenerate rounded rectangle {:?}", rect);
            return;
        }

        let rx = rx.max(0.0).min(rect.width() / 2.0);
        let ry = ry.max(0.0).min(rect.height() / 2.0);
        if rx == 0.0 || ry == 0.0 {
            self.add_rect(rect.min.x, rect.min.y, rect.max.x, rect.max.y, dir);
            return;
        }

        // lyon only knows circular corners; build the shape squashed so the corners become circles,
        // then stretch it back along y.
        let stretch = ry / rx;
        let squashed = Box2D::new(
            point(rect.min.x, rect.min.y / stretch),
            point(rect.max.x, rect.max.y / stretch),
        );

        let mut builder = LyonPath::builder();
        builder.add_rounded_rectangle(&squashed, &BorderRadii::new(rx), dir.into());
        let contour = builder.build();

        self.contours.push(if (stretch - 1.0).abs() <= f32::EPSILON {
            contour
        } else {
            contour.transformed(&LyonTransform::scale(1.0, stretch))
        });
    }

    /// Iterate over the events making up every contour.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = PathEvent> + '_ {
        self.contours.iter().flat_map(|contour| contour.iter())
    }

    /// The bounds of this path's control polygon, or `None` if the path is empty.
    ///
    /// This is never smaller than the filled area, which is all quick rejection needs.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.iter().flat_map(|event| {
            let (a, b, c) = match event {
                PathEvent::Begin { at } => (Some(at), None, None),
                PathEvent::Line { to, .. } => (Some(to), None, None),
                PathEvent::Quadratic { ctrl, to, .. } => (Some(ctrl), Some(to), None),
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => (Some(ctrl1), Some(ctrl2), Some(to)),
                PathEvent::End { .. } => (None, None, None),
            };
            iter::once(a).chain(iter::once(b)).chain(iter::once(c)).flatten()
        });

        let first: Point = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), pt| {
            (min.min(pt), max.max(pt))
        });
        Some(Box2D::new(min, max))
    }

    /// Convert this path into a form `tiny-skia` can rasterize.
    pub(crate) fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut builder = tiny_skia::PathBuilder::new();
        for event in self.iter() {
            match event {
                PathEvent::Begin { at } => builder.move_to(at.x, at.y),
                PathEvent::Line { to, .. } => builder.line_to(to.x, to.y),
                PathEvent::Quadratic { ctrl, to, .. } => builder.quad_to(ctrl.x, ctrl.y, to.x, to.y),
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => builder.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
                PathEvent::End { close, .. } => {
                    if close {
                        builder.close();
                    }
                }
            }
        }
        builder.finish()
    }
}
