// MIT/Apache2 License

use crate::Color;

/// Where text is placed relative to the point it is drawn at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The text starts at the point.
    Left,
    /// The text is centered on the point.
    Center,
    /// The text ends at the point.
    Right,
}

impl Default for TextAlign {
    #[inline]
    fn default() -> Self {
        Self::Left
    }
}

/// Style information used by the drawing calls of a [`Surface`](crate::Surface).
///
/// A `Paint` is a plain value. Every drawing routine builds the one it needs instead of relying
/// on whatever the previous routine left behind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    /// Color used to fill shapes, stroke lines and draw text.
    pub color: Color,
    /// Width of stroked lines. Zero draws a one pixel hairline.
    pub stroke_width: f32,
    /// Height of text, in surface units.
    pub text_size: f32,
    pub text_align: TextAlign,
    /// Smooth the edges of what is drawn without changing its shape.
    pub anti_alias: bool,
}

impl Default for Paint {
    #[inline]
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            stroke_width: 0.0,
            text_size: 12.0,
            text_align: TextAlign::Left,
            anti_alias: false,
        }
    }
}

impl Paint {
    #[inline]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    #[inline]
    pub fn with_text_align(self, text_align: TextAlign) -> Self {
        Self { text_align, ..self }
    }

    #[inline]
    pub fn with_text_size(self, text_size: f32) -> Self {
        Self { text_size, ..self }
    }

    #[inline]
    pub fn with_stroke_width(self, stroke_width: f32) -> Self {
        Self {
            stroke_width,
            ..self
        }
    }

    #[inline]
    pub(crate) fn to_skia(&self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(self.color.into());
        paint.anti_alias = self.anti_alias;
        paint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_only_touch_their_field() {
        let base = Paint {
            anti_alias: true,
            stroke_width: 4.0,
            ..Paint::default()
        };
        let styled = base
            .with_color(Color::BLUE)
            .with_text_align(TextAlign::Right)
            .with_text_size(18.0);

        assert_eq!(styled.color, Color::BLUE);
        assert_eq!(styled.text_align, TextAlign::Right);
        assert_eq!(styled.text_size, 18.0);
        assert_eq!(styled.stroke_width, 4.0);
        assert!(styled.anti_alias);
        assert_eq!(base.color, Color::BLACK);
    }
}
