// MIT/Apache2 License

use crate::{
    geometry::{self, Point, Rect},
    resources::{names, Resources},
    Error,
};
use lyon_geom::point;

/// Every measurement the clipping demo needs, resolved once from [`Resources`].
///
/// The demo is laid out on a grid of two columns. Each cell is a `clipRectRight` by
/// `clipRectBottom` square, separated from its neighbours by `rectInset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    pub clip_rect_left: f32,
    pub clip_rect_top: f32,
    pub clip_rect_right: f32,
    pub clip_rect_bottom: f32,
    pub rect_inset: f32,
    pub small_rect_offset: f32,
    pub circle_radius: f32,
    pub text_offset: f32,
    pub text_size: f32,
    pub stroke_width: f32,

    pub column_one: f32,
    pub column_two: f32,
    pub row_one: f32,
    pub row_two: f32,
    pub row_three: f32,
    pub row_four: f32,
    /// Baseline row of the transformed text examples.
    pub text_row: f32,
    pub reject_row: f32,
}

impl Layout {
    /// Look up every dimension and derive the grid from them.
    pub fn from_resources<R: Resources + ?Sized>(resources: &R) -> crate::Result<Self> {
        let dimension = |name: &str| -> crate::Result<f32> {
            let value = resources.get_dimension(name)?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(Error::InvalidDimension {
                    name: name.to_string(),
                    value,
                })
            }
        };

        let layout = Self::new(
            dimension(names::CLIP_RECT_LEFT)?,
            dimension(names::CLIP_RECT_TOP)?,
            dimension(names::CLIP_RECT_RIGHT)?,
            dimension(names::CLIP_RECT_BOTTOM)?,
            dimension(names::RECT_INSET)?,
            dimension(names::SMALL_RECT_OFFSET)?,
            dimension(names::CIRCLE_RADIUS)?,
            dimension(names::TEXT_OFFSET)?,
            dimension(names::TEXT_SIZE)?,
            dimension(names::STROKE_WIDTH)?,
        );
        layout.check_insets();
        Ok(layout)
    }

    #[allow(clippy::too_many_arguments)]
    fn new(
        clip_rect_left: f32,
        clip_rect_top: f32,
        clip_rect_right: f32,
        clip_rect_bottom: f32,
        rect_inset: f32,
        small_rect_offset: f32,
        circle_radius: f32,
        text_offset: f32,
        text_size: f32,
        stroke_width: f32,
    ) -> Self {
        let column_one = rect_inset;
        let column_two = column_one + rect_inset + clip_rect_right;

        let row_one = rect_inset;
        let row_two = row_one + rect_inset + clip_rect_bottom;
        let row_three = row_two + rect_inset + clip_rect_bottom;
        let row_four = row_three + rect_inset + clip_rect_bottom;
        let text_row = row_four + 1.5 * clip_rect_bottom;
        let reject_row = row_four + rect_inset + 2.0 * clip_rect_bottom;

        Self {
            clip_rect_left,
            clip_rect_top,
            clip_rect_right,
            clip_rect_bottom,
            rect_inset,
            small_rect_offset,
            circle_radius,
            text_offset,
            text_size,
            stroke_width,
            column_one,
            column_two,
            row_one,
            row_two,
            row_three,
            row_four,
            text_row,
            reject_row,
        }
    }

    /// The examples still run when the insets are too large, they just show less.
    fn check_insets(&self) {
        let width = self.clip_rect_right - self.clip_rect_left;
        let height = self.clip_rect_bottom - self.clip_rect_top;

        if !(self.rect_inset < width / 2.0 && self.rect_inset < height / 2.0) {
            log::warn!(
                "Inset {} leaves nothing of a {}x{} clip rectangle",
                self.rect_inset,
                width,
                height
            );
        } else if !(4.0 * self.rect_inset < width / 2.0 && 4.0 * self.rect_inset < height / 2.0) {
            log::warn!(
                "Inset {} is too large for the difference example to leave a hole",
                self.rect_inset
            );
        }
    }

    /// The rectangle every cell is clipped to before it is drawn.
    #[inline]
    pub fn clip_rect(&self) -> Rect {
        geometry::rect(
            self.clip_rect_left,
            self.clip_rect_top,
            self.clip_rect_right,
            self.clip_rect_bottom,
        )
    }

    /// The clip rectangle shrunk by `inset` on all sides, measured from the cell's origin.
    #[inline]
    pub fn inset_rect(&self, inset: f32) -> Rect {
        geometry::rect(
            inset,
            inset,
            self.clip_rect_right - inset,
            self.clip_rect_bottom - inset,
        )
    }

    /// The base rectangle that the rounded rectangle example clips to.
    #[inline]
    pub fn rect_f(&self) -> Rect {
        self.inset_rect(self.rect_inset)
    }

    #[inline]
    pub fn cell(&self, column: f32, row: f32) -> Point {
        point(column, row)
    }

    /// The smallest surface that holds every example.
    pub fn preferred_size(&self) -> (u32, u32) {
        let width = self.column_two + self.clip_rect_right + self.rect_inset;
        let height = self.reject_row + self.clip_rect_bottom + self.rect_inset;
        (width.max(1.0).ceil() as u32, height.max(1.0).ceil() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceTable;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_grid() {
        let layout = Layout::from_resources(&ResourceTable::default()).unwrap();
        assert_eq!(layout.column_one, 8.0);
        assert_eq!(layout.column_two, 106.0);
        assert_eq!(
            [layout.row_one, layout.row_two, layout.row_three, layout.row_four],
            [8.0, 106.0, 204.0, 302.0]
        );
        assert_eq!(layout.text_row, 437.0);
        assert_eq!(layout.reject_row, 490.0);
        assert_eq!(layout.rect_f(), geometry::rect(8.0, 8.0, 82.0, 82.0));
        assert_eq!(layout.preferred_size(), (204, 588));
    }

    #[test]
    fn grid_spacing_holds_for_any_configuration() {
        for &(inset, right, bottom, density) in &[
            (8.0, 90.0, 90.0, 1.0),
            (3.0, 120.0, 60.0, 1.0),
            (8.0, 90.0, 90.0, 2.75),
            (0.5, 10.0, 300.0, 0.75),
        ] {
            let table = ResourceTable::default()
                .with_density(density)
                .with_dimension(names::RECT_INSET, inset)
                .with_dimension(names::CLIP_RECT_RIGHT, right)
                .with_dimension(names::CLIP_RECT_BOTTOM, bottom);
            let layout = Layout::from_resources(&table).unwrap();

            assert_abs_diff_eq!(
                layout.column_two - layout.column_one,
                layout.rect_inset + layout.clip_rect_right,
                epsilon = 1e-4
            );
            assert_abs_diff_eq!(
                layout.row_two - layout.row_one,
                layout.rect_inset + layout.clip_rect_bottom,
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn non_finite_dimension_is_rejected() {
        let table = ResourceTable::default().with_dimension(names::CIRCLE_RADIUS, f32::INFINITY);
        assert!(matches!(
            Layout::from_resources(&table),
            Err(Error::InvalidDimension { ref name, .. }) if name == "circleRadius"
        ));
    }

    #[test]
    fn missing_dimension_is_reported() {
        let table = ResourceTable::empty();
        assert!(matches!(
            Layout::from_resources(&table),
            Err(Error::MissingDimension(_))
        ));
    }
}
