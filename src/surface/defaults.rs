// MIT/Apache2 License

use super::Surface;
use crate::{text, ClipOp, Direction, Error, NotSupportedOp, Paint, Path, Rect, Transform};

#[inline]
pub(crate) fn restore_to_count<S: Surface + ?Sized>(s: &mut S, count: usize) -> crate::Result {
    if count > s.save_count() {
        log::warn!(
            "Asked to restore to save count {}, but only {} saves are active",
            count,
            s.save_count()
        );
        return Err(Error::RestoreUnderflow);
    }

    while s.save_count() > count {
        s.restore()?;
    }
    Ok(())
}

#[inline]
pub(crate) fn concat_checked<S: Surface + ?Sized>(s: &mut S, transform: Transform) -> crate::Result {
    if !s.features().transforms {
        return Err(Error::NotSupported(NotSupportedOp::Transforms));
    }
    s.concat(transform)
}

#[inline]
pub(crate) fn clip_out_path<S: Surface + ?Sized>(s: &mut S, path: &Path) -> crate::Result {
    if !s.features().path_clipping {
        return Err(Error::NotSupported(NotSupportedOp::PathClipping));
    }
    s.clip_path(path, ClipOp::Difference)
}

#[inline]
pub(crate) fn clip_rect<S: Surface + ?Sized>(s: &mut S, rect: Rect, op: ClipOp) -> crate::Result {
    let mut path = Path::new();
    path.add_rect(rect.min.x, rect.min.y, rect.max.x, rect.max.y, Direction::Clockwise);
    s.clip_path(&path, op)
}

#[inline]
pub(crate) fn draw_rect<S: Surface + ?Sized>(s: &mut S, rect: Rect, paint: &Paint) -> crate::Result {
    let mut path = Path::new();
    path.add_rect(rect.min.x, rect.min.y, rect.max.x, rect.max.y, Direction::Clockwise);
    fill_nonempty(s, &path, paint)
}

#[inline]
pub(crate) fn draw_round_rect<S: Surface + ?Sized>(
    s: &mut S,
    rect: Rect,
    rx: f32,
    ry: f32,
    paint: &Paint,
) -> crate::Result {
    let mut path = Path::new();
    path.add_round_rect(&rect, rx, ry, Direction::Clockwise);
    fill_nonempty(s, &path, paint)
}

#[inline]
pub(crate) fn draw_circle<S: Surface + ?Sized>(
    s: &mut S,
    cx: f32,
    cy: f32,
    radius: f32,
    paint: &Paint,
) -> crate::Result {
    let mut path = Path::new();
    path.add_circle(cx, cy, radius, Direction::Clockwise);
    fill_nonempty(s, &path, paint)
}

#[inline]
pub(crate) fn draw_text<S: Surface + ?Sized>(
    s: &mut S,
    text: &str,
    x: f32,
    y: f32,
    paint: &Paint,
) -> crate::Result {
    if !s.features().text {
        return Err(Error::NotSupported(NotSupportedOp::Text));
    }
    let glyphs = text::text_path(text, x, y, paint.text_size, paint.text_align);
    fill_nonempty(s, &glyphs, paint)
}

/// Degenerate shapes produce empty paths; those draw nothing.
#[inline]
fn fill_nonempty<S: Surface + ?Sized>(s: &mut S, path: &Path, paint: &Paint) -> crate::Result {
    if path.is_empty() {
        return Ok(());
    }
    s.draw_path(path, paint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::rect, Color, DrawCommand, EdgeType, RecordingSurface, SurfaceFeatures};

    /// Records like a `RecordingSurface` but claims fewer features.
    struct Limited {
        inner: RecordingSurface,
        features: SurfaceFeatures,
    }

    impl Limited {
        fn new(features: SurfaceFeatures) -> Self {
            Limited {
                inner: RecordingSurface::new(100, 100),
                features,
            }
        }
    }

    impl Surface for Limited {
        fn features(&self) -> SurfaceFeatures {
            self.features
        }
        fn save(&mut self) -> usize {
            self.inner.save()
        }
        fn restore(&mut self) -> crate::Result {
            self.inner.restore()
        }
        fn save_count(&self) -> usize {
            self.inner.save_count()
        }
        fn transform(&self) -> Transform {
            self.inner.transform()
        }
        fn concat(&mut self, transform: Transform) -> crate::Result {
            self.inner.concat(transform)
        }
        fn clip_path(&mut self, path: &Path, op: ClipOp) -> crate::Result {
            self.inner.clip_path(path, op)
        }
        fn quick_reject(&self, rect: Rect, edge: EdgeType) -> bool {
            self.inner.quick_reject(rect, edge)
        }
        fn draw_color(&mut self, color: Color) -> crate::Result {
            self.inner.draw_color(color)
        }
        fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint) -> crate::Result {
            self.inner.draw_line(x1, y1, x2, y2, paint)
        }
        fn draw_path(&mut self, path: &Path, paint: &Paint) -> crate::Result {
            self.inner.draw_path(path, paint)
        }
    }

    fn circle() -> Path {
        let mut path = Path::new();
        path.add_circle(50.0, 50.0, 20.0, Direction::Clockwise);
        path
    }

    #[test]
    fn plain_surface_refuses_optional_operations() {
        let mut surface = Limited::new(SurfaceFeatures::default());

        assert!(matches!(
            surface.draw_text("Clipping", 10.0, 20.0, &Paint::default()),
            Err(Error::NotSupported(NotSupportedOp::Text))
        ));
        assert!(matches!(
            surface.translate(8.0, 16.0),
            Err(Error::NotSupported(NotSupportedOp::Transforms))
        ));
        assert!(matches!(
            surface.skew(0.2, 0.3),
            Err(Error::NotSupported(NotSupportedOp::Transforms))
        ));
        assert!(matches!(
            surface.clip_out_path(&circle()),
            Err(Error::NotSupported(NotSupportedOp::PathClipping))
        ));

        // nothing reached the underlying surface
        assert!(surface.inner.commands().is_empty());
        assert_eq!(surface.transform(), Transform::identity());
    }

    #[test]
    fn rectangles_do_not_need_path_clipping() {
        let mut surface = Limited::new(SurfaceFeatures::default());
        surface.clip_rect(rect(10.0, 10.0, 90.0, 90.0), ClipOp::Intersect).unwrap();
        surface.clip_out_rect(rect(40.0, 40.0, 60.0, 60.0)).unwrap();
        assert_eq!(surface.inner.commands().len(), 2);
    }

    #[test]
    fn supported_operations_go_through() {
        let mut surface = Limited::new(SurfaceFeatures {
            anti_aliasing: false,
            transforms: true,
            text: true,
            path_clipping: true,
        });

        surface.translate(8.0, 16.0).unwrap();
        surface.clip_out_path(&circle()).unwrap();
        surface.draw_text("Clipping", 0.0, 20.0, &Paint::default()).unwrap();

        let commands = surface.inner.commands();
        assert_eq!(commands[0], DrawCommand::Concat(Transform::from_translate(8.0, 16.0)));
        assert!(matches!(
            commands[1],
            DrawCommand::ClipPath {
                op: ClipOp::Difference,
                ..
            }
        ));
        assert!(matches!(commands[2], DrawCommand::DrawPath { .. }));
    }

    #[test]
    fn restoring_past_the_stack_fails() {
        let mut surface = Limited::new(SurfaceFeatures::default());
        surface.save();
        assert!(matches!(surface.restore_to_count(2), Err(Error::RestoreUnderflow)));
        surface.restore_to_count(0).unwrap();
        assert_eq!(surface.save_count(), 0);
    }
}
