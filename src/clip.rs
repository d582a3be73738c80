// MIT/Apache2 License

//! Clip combination rules shared by the surfaces in this crate.

use crate::geometry::{self, Rect};
use tiny_skia::Transform;

/// How a new shape is combined with the current clip region.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClipOp {
    /// Throw away the current clip and use the new shape.
    Replace,
    /// Keep only the area covered by both the current clip and the new shape.
    Intersect,
    /// Remove the new shape from the current clip.
    Difference,
}

impl Default for ClipOp {
    #[inline]
    fn default() -> Self {
        Self::Intersect
    }
}

/// How the edges of a rectangle are treated when testing it against the clip.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeType {
    /// Edges are rounded to the nearest pixel, as if drawn without anti-aliasing.
    Aliased,
    /// Edges are rounded out and grown by a pixel, since anti-aliasing may touch it.
    AntiAliased,
}

/// Combine two 8-bit coverage masks in place.
///
/// `dst` holds the current clip and receives the result; `src` is the coverage of the new shape.
pub(crate) fn combine_coverage(dst: &mut [u8], src: &[u8], op: ClipOp) {
    match op {
        ClipOp::Replace => dst.copy_from_slice(src),
        ClipOp::Intersect => dst
            .iter_mut()
            .zip(src)
            .for_each(|(d, s)| *d = mul_coverage(*d, *s)),
        ClipOp::Difference => dst
            .iter_mut()
            .zip(src)
            .for_each(|(d, s)| *d = mul_coverage(*d, 255 - *s)),
    }
}

#[inline]
fn mul_coverage(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}

/// Device-space bounds of the clip after applying `op` with a shape whose device bounds are
/// `shape`, or `None` for an empty shape.
///
/// The result never under-estimates the clipped area: a difference leaves the bounds as they were.
pub(crate) fn combine_bounds(current: Rect, shape: Option<Rect>, op: ClipOp, device: Rect) -> Rect {
    let empty = Rect::zero();
    match (op, shape) {
        (ClipOp::Replace, Some(shape)) => shape.intersection(&device).unwrap_or(empty),
        (ClipOp::Replace, None) => empty,
        (ClipOp::Intersect, Some(shape)) => shape.intersection(&current).unwrap_or(empty),
        (ClipOp::Intersect, None) => empty,
        (ClipOp::Difference, _) => current,
    }
}

/// Decide whether `rect`, in local coordinates, is certain to miss a clip with the given device
/// bounds.
pub(crate) fn quick_reject(clip_bounds: &Rect, transform: &Transform, rect: &Rect, edge: EdgeType) -> bool {
    if !geometry::is_drawable(clip_bounds) || !geometry::is_drawable(rect) {
        return true;
    }

    let mapped = match geometry::map_rect(transform, rect) {
        Some(mapped) => mapped,
        None => return true,
    };
    let tested = match edge {
        EdgeType::Aliased => mapped.round(),
        EdgeType::AntiAliased => mapped.round_out().inflate(1.0, 1.0),
    };

    tested.intersection(clip_bounds).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect;

    #[test]
    fn coverage_rules() {
        let mut dst = [255, 255, 128, 0];
        combine_coverage(&mut dst, &[255, 0, 255, 255], ClipOp::Intersect);
        assert_eq!(dst, [255, 0, 128, 0]);

        let mut dst = [255, 255, 128, 0];
        combine_coverage(&mut dst, &[255, 0, 0, 255], ClipOp::Difference);
        assert_eq!(dst, [0, 255, 128, 0]);

        let mut dst = [255, 255, 128, 0];
        combine_coverage(&mut dst, &[1, 2, 3, 4], ClipOp::Replace);
        assert_eq!(dst, [1, 2, 3, 4]);
    }

    #[test]
    fn bounds_rules() {
        let device = rect(0.0, 0.0, 200.0, 200.0);
        let current = rect(10.0, 10.0, 100.0, 100.0);
        let shape = Some(rect(50.0, 50.0, 300.0, 300.0));

        assert_eq!(
            combine_bounds(current, shape, ClipOp::Intersect, device),
            rect(50.0, 50.0, 100.0, 100.0)
        );
        assert_eq!(
            combine_bounds(current, shape, ClipOp::Replace, device),
            rect(50.0, 50.0, 200.0, 200.0)
        );
        assert_eq!(combine_bounds(current, shape, ClipOp::Difference, device), current);
        assert!(combine_bounds(current, None, ClipOp::Intersect, device).is_empty());
    }

    #[test]
    fn overlapping_rect_is_not_rejected() {
        let clip = rect(8.0, 490.0, 98.0, 580.0);
        let transform = Transform::from_translate(8.0, 490.0);
        let overlapping = rect(45.0, 45.0, 180.0, 180.0);
        assert!(!quick_reject(&clip, &transform, &overlapping, EdgeType::AntiAliased));
        assert!(!quick_reject(&clip, &transform, &overlapping, EdgeType::Aliased));
    }

    #[test]
    fn distant_rect_is_rejected() {
        let clip = rect(8.0, 490.0, 98.0, 580.0);
        let transform = Transform::from_translate(8.0, 490.0);
        let outside = rect(91.0, 91.0, 180.0, 180.0);
        assert!(quick_reject(&clip, &transform, &outside, EdgeType::AntiAliased));
        assert!(quick_reject(&clip, &transform, &outside, EdgeType::Aliased));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let transform = Transform::identity();
        let rect_in = rect(0.0, 0.0, 10.0, 10.0);
        assert!(quick_reject(&Rect::zero(), &transform, &rect_in, EdgeType::AntiAliased));
        assert!(quick_reject(
            &rect(0.0, 0.0, 100.0, 100.0),
            &transform,
            &rect(5.0, 5.0, 5.0, 9.0),
            EdgeType::AntiAliased
        ));
    }
}
