// MIT/Apache2 License

use super::{Surface, SurfaceFeatures};
use crate::{ClipOp, Color, EdgeType, Paint, Path, Rect, Transform};

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        (**self).features()
    }
    #[inline]
    fn save(&mut self) -> usize {
        (**self).save()
    }
    #[inline]
    fn restore(&mut self) -> crate::Result {
        (**self).restore()
    }
    #[inline]
    fn save_count(&self) -> usize {
        (**self).save_count()
    }
    #[inline]
    fn restore_to_count(&mut self, count: usize) -> crate::Result {
        (**self).restore_to_count(count)
    }
    #[inline]
    fn transform(&self) -> Transform {
        (**self).transform()
    }
    #[inline]
    fn concat(&mut self, transform: Transform) -> crate::Result {
        (**self).concat(transform)
    }
    #[inline]
    fn translate(&mut self, dx: f32, dy: f32) -> crate::Result {
        (**self).translate(dx, dy)
    }
    #[inline]
    fn skew(&mut self, sx: f32, sy: f32) -> crate::Result {
        (**self).skew(sx, sy)
    }
    #[inline]
    fn clip_path(&mut self, path: &Path, op: ClipOp) -> crate::Result {
        (**self).clip_path(path, op)
    }
    #[inline]
    fn clip_rect(&mut self, rect: Rect, op: ClipOp) -> crate::Result {
        (**self).clip_rect(rect, op)
    }
    #[inline]
    fn clip_out_rect(&mut self, rect: Rect) -> crate::Result {
        (**self).clip_out_rect(rect)
    }
    #[inline]
    fn clip_out_path(&mut self, path: &Path) -> crate::Result {
        (**self).clip_out_path(path)
    }
    #[inline]
    fn quick_reject(&self, rect: Rect, edge: EdgeType) -> bool {
        (**self).quick_reject(rect, edge)
    }
    #[inline]
    fn draw_color(&mut self, color: Color) -> crate::Result {
        (**self).draw_color(color)
    }
    #[inline]
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint) -> crate::Result {
        (**self).draw_line(x1, y1, x2, y2, paint)
    }
    #[inline]
    fn draw_path(&mut self, path: &Path, paint: &Paint) -> crate::Result {
        (**self).draw_path(path, paint)
    }
    #[inline]
    fn draw_rect(&mut self, rect: Rect, paint: &Paint) -> crate::Result {
        (**self).draw_rect(rect, paint)
    }
    #[inline]
    fn draw_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, paint: &Paint) -> crate::Result {
        (**self).draw_round_rect(rect, rx, ry, paint)
    }
    #[inline]
    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) -> crate::Result {
        (**self).draw_circle(cx, cy, radius, paint)
    }
    #[inline]
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) -> crate::Result {
        (**self).draw_text(text, x, y, paint)
    }
}
