// MIT/Apache2 License

use super::{Surface, SurfaceFeatures};
use crate::{
    clip::{self, combine_bounds, combine_coverage},
    geometry, ClipOp, Color, EdgeType, Error, Paint, Path, Rect, Transform,
};
use std::path::Path as FsPath;
use tinyvec::TinyVec;
use tiny_skia::{FillRule, Mask, Pixmap, Stroke};

/// The transform and clip in effect at one save level.
#[derive(Clone)]
struct RasterState {
    transform: Transform,
    /// Per-pixel clip coverage. `None` means nothing has been clipped away yet.
    clip: Option<Mask>,
    /// Device-space bounds of everything the clip might still let through.
    clip_bounds: Rect,
}

impl Default for RasterState {
    #[inline]
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            clip: None,
            clip_bounds: Rect::zero(),
        }
    }
}

/// A `Surface` that rasterizes into an RGBA pixel buffer in memory.
///
/// Clips are kept as 8-bit coverage masks the size of the surface, so any path can be used to clip
/// and anti-aliased clip edges are preserved.
pub struct RasterSurface {
    pixmap: Pixmap,
    state: RasterState,
    saved: TinyVec<[RasterState; 4]>,
}

impl RasterSurface {
    /// Create a new, fully transparent surface.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        let pixmap = if width == 0 || height == 0 {
            None
        } else {
            Pixmap::new(width, height)
        };
        let pixmap = pixmap.ok_or(Error::SurfaceAllocation { width, height })?;

        log::debug!("Created {}x{} raster surface", width, height);

        let state = RasterState {
            clip_bounds: device_bounds(&pixmap),
            ..RasterState::default()
        };

        Ok(Self {
            pixmap,
            state,
            saved: TinyVec::default(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The underlying pixel buffer.
    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Read back the color of a pixel, or `None` if it lies outside the surface.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|px| {
            let px = px.demultiply();
            Color::from_rgba8(px.red(), px.green(), px.blue(), px.alpha())
        })
    }

    /// Encode the contents of this surface as a PNG image.
    #[inline]
    pub fn encode_png(&self) -> crate::Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| Error::Png(e.to_string()))
    }

    /// Write the contents of this surface to a PNG file.
    #[inline]
    pub fn save_png<P: AsRef<FsPath>>(&self, path: P) -> crate::Result {
        let data = self.encode_png()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// The device-space bounds of the current clip.
    #[inline]
    pub fn clip_bounds(&self) -> Rect {
        self.state.clip_bounds
    }

    fn blank_mask(&self, coverage: u8) -> crate::Result<Mask> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut mask = Mask::new(width, height).ok_or(Error::SurfaceAllocation { width, height })?;
        if coverage != 0 {
            mask.data_mut().iter_mut().for_each(|c| *c = coverage);
        }
        Ok(mask)
    }

    /// Skip drawing when the transform is unusable or nothing can pass the clip.
    #[inline]
    fn can_draw(&self) -> bool {
        if !self.state.transform.is_finite() {
            log::debug!("Skipping draw call under non-finite transform");
            return false;
        }
        geometry::is_drawable(&self.state.clip_bounds)
    }
}

#[inline]
fn device_bounds(pixmap: &Pixmap) -> Rect {
    geometry::rect(0.0, 0.0, pixmap.width() as f32, pixmap.height() as f32)
}

impl Surface for RasterSurface {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        SurfaceFeatures {
            anti_aliasing: true,
            transforms: true,
            text: true,
            path_clipping: true,
        }
    }

    #[inline]
    fn save(&mut self) -> usize {
        let count = self.saved.len();
        self.saved.push(self.state.clone());
        count
    }

    #[inline]
    fn restore(&mut self) -> crate::Result {
        self.state = self.saved.pop().ok_or(Error::RestoreUnderflow)?;
        Ok(())
    }

    #[inline]
    fn save_count(&self) -> usize {
        self.saved.len()
    }

    #[inline]
    fn transform(&self) -> Transform {
        self.state.transform
    }

    #[inline]
    fn concat(&mut self, transform: Transform) -> crate::Result {
        if !transform.is_finite() {
            log::debug!("Ignoring non-finite transform {:?}", transform);
            return Ok(());
        }

        self.state.transform = self.state.transform.pre_concat(transform);
        Ok(())
    }

    fn clip_path(&mut self, path: &Path, op: ClipOp) -> crate::Result {
        let transform = self.state.transform;
        let shape = path.to_skia();
        let shape_bounds = match shape {
            Some(_) => path.bounds().and_then(|b| geometry::map_rect(&transform, &b)),
            None => {
                log::debug!("Clipping with an empty path");
                None
            }
        };

        log::trace!("clip_path({:?}) with device bounds {:?}", op, shape_bounds);

        match (op, shape) {
            (ClipOp::Difference, None) => {}
            (_, None) => {
                self.state.clip = Some(self.blank_mask(0)?);
            }
            (op, Some(shape)) => {
                let mut coverage = self.blank_mask(0)?;
                coverage.fill_path(&shape, FillRule::Winding, true, transform);

                let mut current = match self.state.clip.take() {
                    Some(current) => current,
                    None => self.blank_mask(255)?,
                };
                combine_coverage(current.data_mut(), coverage.data(), op);
                self.state.clip = Some(current);
            }
        }

        self.state.clip_bounds = combine_bounds(
            self.state.clip_bounds,
            shape_bounds,
            op,
            device_bounds(&self.pixmap),
        );
        Ok(())
    }

    #[inline]
    fn quick_reject(&self, rect: Rect, edge: EdgeType) -> bool {
        clip::quick_reject(&self.state.clip_bounds, &self.state.transform, &rect, edge)
    }

    fn draw_color(&mut self, color: Color) -> crate::Result {
        if !geometry::is_drawable(&self.state.clip_bounds) {
            return Ok(());
        }

        let area = geometry::to_skia_rect(&device_bounds(&self.pixmap))
            .ok_or(Error::StaticMsg("surface bounds are not a valid rectangle"))?;
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(color.into());

        self.pixmap.fill_rect(
            area,
            &paint,
            Transform::identity(),
            self.state.clip.as_ref(),
        );
        Ok(())
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint) -> crate::Result {
        if ![x1, y1, x2, y2, paint.stroke_width].iter().all(|v| v.is_finite()) {
            log::debug!("Skipping non-finite line ({}, {}) -> ({}, {})", x1, y1, x2, y2);
            return Ok(());
        }
        if !self.can_draw() {
            return Ok(());
        }

        let mut builder = tiny_skia::PathBuilder::new();
        builder.move_to(x1, y1);
        builder.line_to(x2, y2);
        let line = match builder.finish() {
            Some(line) => line,
            None => {
                log::debug!("Skipping zero-length line at ({}, {})", x1, y1);
                return Ok(());
            }
        };

        let stroke = Stroke {
            width: paint.stroke_width.max(0.0),
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &line,
            &paint.to_skia(),
            &stroke,
            self.state.transform,
            self.state.clip.as_ref(),
        );
        Ok(())
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) -> crate::Result {
        if !self.can_draw() {
            return Ok(());
        }

        let shape = match path.to_skia() {
            Some(shape) => shape,
            None => {
                log::debug!("Skipping empty path");
                return Ok(());
            }
        };

        self.pixmap.fill_path(
            &shape,
            &paint.to_skia(),
            FillRule::Winding,
            self.state.transform,
            self.state.clip.as_ref(),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect;

    fn surface() -> RasterSurface {
        let mut surface = RasterSurface::new(100, 100).unwrap();
        surface.draw_color(Color::WHITE).unwrap();
        surface
    }

    #[test]
    fn zero_sized_surface_is_an_error() {
        assert!(matches!(
            RasterSurface::new(0, 10),
            Err(Error::SurfaceAllocation { width: 0, height: 10 })
        ));
    }

    #[test]
    fn starts_transparent() {
        let surface = RasterSurface::new(4, 4).unwrap();
        assert_eq!(surface.pixel(1, 1), Some(Color::TRANSPARENT));
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn restore_without_save_underflows() {
        let mut surface = surface();
        assert!(matches!(surface.restore(), Err(Error::RestoreUnderflow)));

        assert_eq!(surface.save(), 0);
        assert_eq!(surface.save(), 1);
        assert_eq!(surface.save_count(), 2);
        surface.restore_to_count(0).unwrap();
        assert_eq!(surface.save_count(), 0);
    }

    #[test]
    fn intersect_clip_limits_drawing() {
        let mut surface = surface();
        surface
            .clip_rect(rect(10.0, 10.0, 30.0, 30.0), ClipOp::Intersect)
            .unwrap();
        surface.draw_color(Color::RED).unwrap();

        assert_eq!(surface.pixel(20, 20), Some(Color::RED));
        assert_eq!(surface.pixel(5, 5), Some(Color::WHITE));
        assert_eq!(surface.pixel(30, 30), Some(Color::WHITE));
    }

    #[test]
    fn difference_clip_leaves_a_hole() {
        let mut surface = surface();
        surface.clip_out_rect(rect(40.0, 40.0, 60.0, 60.0)).unwrap();
        surface.draw_color(Color::BLUE).unwrap();

        assert_eq!(surface.pixel(50, 50), Some(Color::WHITE));
        assert_eq!(surface.pixel(10, 50), Some(Color::BLUE));
        assert_eq!(surface.clip_bounds(), rect(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn replace_discards_the_previous_clip() {
        let mut surface = surface();
        surface
            .clip_rect(rect(0.0, 0.0, 20.0, 20.0), ClipOp::Intersect)
            .unwrap();
        surface
            .clip_rect(rect(50.0, 50.0, 70.0, 70.0), ClipOp::Replace)
            .unwrap();
        surface.draw_color(Color::GREEN).unwrap();

        assert_eq!(surface.pixel(10, 10), Some(Color::WHITE));
        assert_eq!(surface.pixel(60, 60), Some(Color::GREEN));
    }

    #[test]
    fn degenerate_clip_rect_empties_the_clip() {
        let mut surface = surface();
        surface
            .clip_rect(rect(50.0, 50.0, 50.0, 80.0), ClipOp::Intersect)
            .unwrap();
        assert!(surface.quick_reject(rect(0.0, 0.0, 100.0, 100.0), EdgeType::Aliased));
        surface.draw_color(Color::RED).unwrap();
        assert_eq!(surface.pixel(50, 60), Some(Color::WHITE));
    }

    #[test]
    fn restore_brings_back_the_clip_and_transform() {
        let mut surface = surface();
        let count = surface.save();
        surface.translate(10.0, 10.0).unwrap();
        surface
            .clip_rect(rect(0.0, 0.0, 10.0, 10.0), ClipOp::Intersect)
            .unwrap();
        assert_eq!(surface.clip_bounds(), rect(10.0, 10.0, 20.0, 20.0));
        surface.restore_to_count(count).unwrap();

        assert_eq!(surface.transform(), Transform::identity());
        surface.draw_color(Color::BLACK).unwrap();
        assert_eq!(surface.pixel(90, 90), Some(Color::BLACK));
    }

    #[test]
    fn translate_moves_drawing() {
        let mut surface = surface();
        surface.translate(50.0, 0.0).unwrap();
        surface
            .draw_rect(rect(0.0, 0.0, 10.0, 10.0), &Paint::default())
            .unwrap();

        assert_eq!(surface.pixel(55, 5), Some(Color::BLACK));
        assert_eq!(surface.pixel(5, 5), Some(Color::WHITE));
    }

    #[test]
    fn line_is_stroked_with_paint_width() {
        let mut surface = surface();
        let paint = Paint::default().with_color(Color::RED).with_stroke_width(4.0);
        surface.draw_line(10.0, 50.0, 90.0, 50.0, &paint).unwrap();

        assert_eq!(surface.pixel(50, 49), Some(Color::RED));
        assert_eq!(surface.pixel(50, 50), Some(Color::RED));
        assert_eq!(surface.pixel(50, 45), Some(Color::WHITE));
    }

    #[test]
    fn non_finite_transform_is_ignored() {
        let mut surface = surface();
        surface.translate(f32::NAN, 0.0).unwrap();
        assert_eq!(surface.transform(), Transform::identity());
    }

    #[test]
    fn encodes_png() {
        let png = surface().encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
