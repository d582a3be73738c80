// MIT/Apache2 License

use crate::{
    geometry::{self, Point},
    resources::{names, Resources},
    ClipOp, Color, Direction, EdgeType, Error, Layout, Paint, Path, Surface, TextAlign,
};
use std::fmt;

/// The text drawn by the examples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Drawn in the corner of every clipped cell.
    pub clipping: String,
    pub translated: String,
    pub skewed: String,
}

impl Labels {
    #[inline]
    pub fn from_resources<R: Resources + ?Sized>(resources: &R) -> crate::Result<Self> {
        Ok(Self {
            clipping: resources.get_string(names::CLIPPING)?,
            translated: resources.get_string(names::TRANSLATED)?,
            skewed: resources.get_string(names::SKEWED)?,
        })
    }
}

type DrawFn = fn(&ClippedView, &mut dyn Surface) -> crate::Result;

/// One cell of the demo.
pub struct Example {
    name: &'static str,
    background: Option<Color>,
    origin: fn(&Layout) -> Point,
    draw: DrawFn,
}

impl Example {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Color the whole surface is filled with before this example is drawn, if any.
    #[inline]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Where the surface is translated to before the example draws.
    #[inline]
    pub fn origin(&self, layout: &Layout) -> Point {
        (self.origin)(layout)
    }
}

impl fmt::Debug for Example {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("background", &self.background)
            .finish()
    }
}

static EXAMPLES: [Example; 10] = [
    Example {
        name: "Back and unclipped rectangle",
        background: Some(Color::GRAY),
        origin: |l| l.cell(l.column_one, l.row_one),
        draw: ClippedView::draw_clipped_rectangle,
    },
    Example {
        name: "Difference clipping",
        background: None,
        origin: |l| l.cell(l.column_two, l.row_one),
        draw: ClippedView::draw_difference_clipping,
    },
    Example {
        name: "Circular clipping",
        background: None,
        origin: |l| l.cell(l.column_one, l.row_two),
        draw: ClippedView::draw_circular_clipping,
    },
    Example {
        name: "Intersection clipping",
        background: None,
        origin: |l| l.cell(l.column_two, l.row_two),
        draw: ClippedView::draw_intersection_clipping,
    },
    Example {
        name: "Combined clipping",
        background: None,
        origin: |l| l.cell(l.column_one, l.row_three),
        draw: ClippedView::draw_combined_clipping,
    },
    Example {
        name: "Rounded rectangle clipping",
        background: None,
        origin: |l| l.cell(l.column_two, l.row_three),
        draw: ClippedView::draw_rounded_rectangle_clipping,
    },
    Example {
        name: "Outside clipping",
        background: None,
        origin: |l| l.cell(l.column_one, l.row_four),
        draw: ClippedView::draw_outside_clipping,
    },
    Example {
        name: "Translated text",
        background: None,
        origin: |l| l.cell(l.column_two, l.text_row),
        draw: ClippedView::draw_translated_text,
    },
    Example {
        name: "Skewed text",
        background: None,
        origin: |l| l.cell(l.column_two, l.text_row),
        draw: ClippedView::draw_skewed_text,
    },
    Example {
        name: "Quick reject",
        background: None,
        origin: |l| l.cell(l.column_one, l.reject_row),
        draw: ClippedView::draw_quick_reject,
    },
];

/// Draws a grid of examples that each clip the same picture in a different way.
///
/// Every example translates to its own cell, sets up a clip, and then draws a white square with a
/// red diagonal, a green circle and a blue label. What survives the clip is what the example
/// demonstrates. The last examples move on to transformed text and quick rejection.
#[derive(Debug, Clone)]
pub struct ClippedView {
    layout: Layout,
    labels: Labels,
}

impl ClippedView {
    /// Resolve every dimension and label the view needs.
    ///
    /// Missing or unusable values are reported here, so that rendering never has to.
    #[inline]
    pub fn new<R: Resources + ?Sized>(resources: &R) -> crate::Result<Self> {
        Ok(Self {
            layout: Layout::from_resources(resources)?,
            labels: Labels::from_resources(resources)?,
        })
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// The examples, in the order they are drawn.
    #[inline]
    pub fn examples() -> &'static [Example] {
        &EXAMPLES
    }

    /// Draw every example.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> crate::Result {
        (0..EXAMPLES.len()).try_for_each(|index| self.render_example(&mut *surface, index))
    }

    /// Draw a single example, including its background.
    pub fn render_example<S: Surface + ?Sized>(
        &self,
        mut surface: &mut S,
        index: usize,
    ) -> crate::Result {
        let example = EXAMPLES
            .get(index)
            .ok_or_else(|| Error::Msg(format!("No example at index {}", index)))?;
        let surface: &mut dyn Surface = &mut surface;

        log::debug!("Drawing example {}: {}", index, example.name);

        if let Some(background) = example.background {
            surface.draw_color(background)?;
        }

        let count = surface.save();
        let origin = example.origin(&self.layout);
        surface.translate(origin.x, origin.y)?;
        (example.draw)(self, &mut *surface)?;
        surface.restore_to_count(count)
    }

    #[inline]
    fn paint(&self) -> Paint {
        Paint {
            anti_alias: true,
            stroke_width: self.layout.stroke_width,
            text_size: self.layout.text_size,
            ..Paint::default()
        }
    }

    /// The picture every clipping example draws through its clip.
    fn draw_clipped_rectangle(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        let paint = self.paint();

        surface.clip_rect(l.clip_rect(), ClipOp::Intersect)?;
        surface.draw_color(Color::WHITE)?;

        surface.draw_line(
            l.clip_rect_left,
            l.clip_rect_top,
            l.clip_rect_right,
            l.clip_rect_bottom,
            &paint.with_color(Color::RED),
        )?;
        surface.draw_circle(
            l.circle_radius,
            l.clip_rect_bottom - l.circle_radius,
            l.circle_radius,
            &paint.with_color(Color::GREEN),
        )?;
        surface.draw_text(
            &self.labels.clipping,
            l.clip_rect_right,
            l.text_offset,
            &paint
                .with_color(Color::BLUE)
                .with_text_size(l.text_size)
                .with_text_align(TextAlign::Right),
        )
    }

    /// A ring: the clip is inset by two insets, with a hole four insets in.
    fn draw_difference_clipping(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        surface.clip_rect(l.inset_rect(2.0 * l.rect_inset), ClipOp::Intersect)?;
        surface.clip_out_rect(l.inset_rect(4.0 * l.rect_inset))?;
        self.draw_clipped_rectangle(surface)
    }

    /// The hole is exactly where the green circle gets drawn, so the circle never shows.
    fn draw_circular_clipping(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        let mut path = Path::new();
        path.add_circle(
            l.circle_radius,
            l.clip_rect_bottom - l.circle_radius,
            l.circle_radius,
            Direction::CounterClockwise,
        );

        surface.clip_out_path(&path)?;
        self.draw_clipped_rectangle(surface)
    }

    fn draw_intersection_clipping(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        let offset = l.small_rect_offset;

        surface.clip_rect(
            geometry::rect(
                l.clip_rect_left,
                l.clip_rect_top,
                l.clip_rect_right - offset,
                l.clip_rect_bottom - offset,
            ),
            ClipOp::Intersect,
        )?;
        surface.clip_rect(
            geometry::rect(
                l.clip_rect_left + offset,
                l.clip_rect_top + offset,
                l.clip_rect_right,
                l.clip_rect_bottom,
            ),
            ClipOp::Intersect,
        )?;
        self.draw_clipped_rectangle(surface)
    }

    /// A circle and a rectangle in one path, wound the same way, clip to their union.
    fn draw_combined_clipping(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        let r = l.circle_radius;
        let mut path = Path::new();
        path.add_circle(
            l.clip_rect_left + l.rect_inset + r,
            l.clip_rect_top + r + l.rect_inset,
            r,
            Direction::CounterClockwise,
        );
        path.add_rect(
            l.clip_rect_right / 2.0 - r,
            l.clip_rect_top + r + l.rect_inset,
            l.clip_rect_right / 2.0 + r,
            l.clip_rect_bottom - l.rect_inset,
            Direction::CounterClockwise,
        );

        surface.clip_path(&path, ClipOp::Intersect)?;
        self.draw_clipped_rectangle(surface)
    }

    fn draw_rounded_rectangle_clipping(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        let radius = l.clip_rect_right / 4.0;
        let mut path = Path::new();
        path.add_round_rect(&l.rect_f(), radius, radius, Direction::CounterClockwise);

        surface.clip_path(&path, ClipOp::Intersect)?;
        self.draw_clipped_rectangle(surface)
    }

    fn draw_outside_clipping(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        surface.clip_rect(l.inset_rect(2.0 * l.rect_inset), ClipOp::Intersect)?;
        self.draw_clipped_rectangle(surface)
    }

    fn draw_translated_text(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        let paint = self
            .paint()
            .with_color(Color::GREEN)
            .with_text_size(l.text_size)
            .with_text_align(TextAlign::Left);
        surface.draw_text(&self.labels.translated, l.clip_rect_left, l.clip_rect_top, &paint)
    }

    fn draw_skewed_text(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        let paint = self
            .paint()
            .with_color(Color::YELLOW)
            .with_text_size(l.text_size)
            .with_text_align(TextAlign::Right);
        surface.skew(0.2, 0.3)?;
        surface.draw_text(&self.labels.skewed, l.clip_rect_left, l.clip_rect_top, &paint)
    }

    /// `in_clip` overlaps the clip, so it is never rejected and the black branch always runs.
    fn draw_quick_reject(&self, surface: &mut dyn Surface) -> crate::Result {
        let l = &self.layout;
        let (right, bottom) = (l.clip_rect_right, l.clip_rect_bottom);
        let in_clip = geometry::rect(right / 2.0, bottom / 2.0, right * 2.0, bottom * 2.0);
        let _not_in_clip = geometry::rect(right + 1.0, bottom + 1.0, right * 2.0, bottom * 2.0);

        surface.clip_rect(l.clip_rect(), ClipOp::Intersect)?;

        if surface.quick_reject(in_clip, EdgeType::AntiAliased) {
            surface.draw_color(Color::WHITE)
        } else {
            surface.draw_color(Color::BLACK)?;
            surface.draw_rect(in_clip, &self.paint().with_color(Color::GREEN))
        }
    }
}
