// MIT/Apache2 License

//! Geometry primitives shared by surfaces and the renderer. Rectangles are stored as
//! `left, top, right, bottom` boxes, the same way a `RectF` is laid out.

use lyon_geom::{point, Box2D, Point as LyonPoint};
use tiny_skia::Transform;

/// A point in surface units.
pub type Point = LyonPoint<f32>;

/// An axis-aligned rectangle, stored as its minimum and maximum corners.
pub type Rect = Box2D<f32>;

/// Create a rectangle from its four edges.
#[inline]
pub fn rect(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
    Box2D::new(point(left, top), point(right, bottom))
}

/// Is this rectangle finite and of positive width and height?
#[inline]
pub fn is_drawable(rect: &Rect) -> bool {
    is_finite(rect) && rect.width() > 0.0 && rect.height() > 0.0
}

#[inline]
pub(crate) fn is_finite(rect: &Rect) -> bool {
    rect.min.x.is_finite() && rect.min.y.is_finite() && rect.max.x.is_finite() && rect.max.y.is_finite()
}

/// Map a rectangle through a transform, returning the axis-aligned bounds of the result.
///
/// Returns `None` if the mapped bounds are not finite.
#[inline]
pub(crate) fn map_rect(transform: &Transform, src: &Rect) -> Option<Rect> {
    let mapped = to_skia_rect(src)?.transform(*transform)?;
    Some(from_skia_rect(&mapped))
}

#[inline]
pub(crate) fn to_skia_rect(rect: &Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_ltrb(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}

#[inline]
pub(crate) fn from_skia_rect(rect: &tiny_skia::Rect) -> Rect {
    self::rect(rect.left(), rect.top(), rect.right(), rect.bottom())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn drawable_rects() {
        assert!(is_drawable(&rect(0.0, 0.0, 10.0, 10.0)));
        assert!(!is_drawable(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!is_drawable(&rect(0.0, 10.0, 10.0, 5.0)));
        assert!(!is_drawable(&rect(0.0, 0.0, f32::NAN, 10.0)));
        assert!(!is_drawable(&rect(0.0, 0.0, f32::INFINITY, 10.0)));
    }

    #[test]
    fn translated_rect_keeps_its_size() {
        let mapped = map_rect(
            &Transform::from_translate(8.0, 16.0),
            &rect(0.0, 0.0, 90.0, 90.0),
        )
        .unwrap();
        assert_abs_diff_eq!(mapped.min.x, 8.0);
        assert_abs_diff_eq!(mapped.min.y, 16.0);
        assert_abs_diff_eq!(mapped.max.x, 98.0);
        assert_abs_diff_eq!(mapped.max.y, 106.0);
    }

    #[test]
    fn skewed_rect_grows_its_bounds() {
        let mapped = map_rect(&Transform::from_skew(0.2, 0.3), &rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_abs_diff_eq!(mapped.min.x, 0.0);
        assert_abs_diff_eq!(mapped.min.y, 0.0);
        assert_abs_diff_eq!(mapped.max.x, 12.0, epsilon = 1e-5);
        assert_abs_diff_eq!(mapped.max.y, 13.0, epsilon = 1e-5);
    }

    #[test]
    fn non_finite_transform_has_no_bounds() {
        let transform = Transform::from_translate(f32::INFINITY, 0.0);
        assert!(map_rect(&transform, &rect(0.0, 0.0, 10.0, 10.0)).is_none());
    }
}
