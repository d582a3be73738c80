// MIT/Apache2 License

use super::{Surface, SurfaceFeatures};
use crate::{
    clip::{self, combine_bounds},
    geometry, ClipOp, Color, EdgeType, Error, Paint, Path, Rect, TextAlign, Transform,
};
use std::mem;
use tinyvec::TinyVec;

/// A single call made on a [`RecordingSurface`].
///
/// Geometry is kept in the local coordinates it was given in; the transform in effect can be
/// recovered by replaying the `Translate`, `Skew` and `Concat` commands before it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate {
        dx: f32,
        dy: f32,
    },
    Skew {
        sx: f32,
        sy: f32,
    },
    Concat(Transform),
    /// The clip was combined with a path. `bounds` is `None` for an empty path.
    ClipPath {
        op: ClipOp,
        bounds: Option<Rect>,
    },
    DrawColor(Color),
    DrawLine {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        stroke_width: f32,
    },
    DrawPath {
        bounds: Option<Rect>,
        color: Color,
    },
    DrawText {
        text: String,
        x: f32,
        y: f32,
        align: TextAlign,
        color: Color,
    },
}

#[derive(Debug, Copy, Clone)]
struct RecordingState {
    transform: Transform,
    clip_bounds: Rect,
}

impl Default for RecordingState {
    #[inline]
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            clip_bounds: Rect::zero(),
        }
    }
}

/// A `Surface` that draws nothing and instead keeps a list of what was asked of it.
///
/// It tracks the transform and the bounds of the clip the same way [`RasterSurface`] does, so
/// `quick_reject()` gives the same answers.
///
/// [`RasterSurface`]: super::RasterSurface
#[derive(Debug)]
pub struct RecordingSurface {
    device: Rect,
    state: RecordingState,
    saved: TinyVec<[RecordingState; 4]>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create a recording surface that pretends to be `width` by `height` pixels large.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        let device = geometry::rect(0.0, 0.0, width as f32, height as f32);
        Self {
            device,
            state: RecordingState {
                clip_bounds: device,
                ..RecordingState::default()
            },
            saved: TinyVec::default(),
            commands: Vec::new(),
        }
    }

    /// The commands recorded so far.
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the commands recorded so far, leaving the list empty.
    #[inline]
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        mem::take(&mut self.commands)
    }

    #[inline]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// The device-space bounds of the current clip.
    #[inline]
    pub fn clip_bounds(&self) -> Rect {
        self.state.clip_bounds
    }

    #[inline]
    fn push_transform(&mut self, transform: Transform, command: DrawCommand) -> crate::Result {
        if !transform.is_finite() {
            log::debug!("Ignoring non-finite transform {:?}", transform);
            return Ok(());
        }

        self.state.transform = self.state.transform.pre_concat(transform);
        self.commands.push(command);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        SurfaceFeatures {
            anti_aliasing: false,
            transforms: true,
            text: true,
            path_clipping: true,
        }
    }

    #[inline]
    fn save(&mut self) -> usize {
        let count = self.saved.len();
        self.saved.push(self.state);
        self.commands.push(DrawCommand::Save);
        count
    }

    #[inline]
    fn restore(&mut self) -> crate::Result {
        self.state = self.saved.pop().ok_or(Error::RestoreUnderflow)?;
        self.commands.push(DrawCommand::Restore);
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
        self.push_transform(transform, DrawCommand::Concat(transform))
    }

    #[inline]
    fn translate(&mut self, dx: f32, dy: f32) -> crate::Result {
        self.push_transform(
            Transform::from_translate(dx, dy),
            DrawCommand::Translate { dx, dy },
        )
    }

    #[inline]
    fn skew(&mut self, sx: f32, sy: f32) -> crate::Result {
        self.push_transform(Transform::from_skew(sx, sy), DrawCommand::Skew { sx, sy })
    }

    fn clip_path(&mut self, path: &Path, op: ClipOp) -> crate::Result {
        let bounds = path.bounds();
        let device_bounds = bounds.and_then(|b| geometry::map_rect(&self.state.transform, &b));
        log::trace!("clip_path({:?}) with device bounds {:?}", op, device_bounds);

        self.state.clip_bounds = combine_bounds(self.state.clip_bounds, device_bounds, op, self.device);
        self.commands.push(DrawCommand::ClipPath { op, bounds });
        Ok(())
    }

    #[inline]
    fn quick_reject(&self, rect: Rect, edge: EdgeType) -> bool {
        clip::quick_reject(&self.state.clip_bounds, &self.state.transform, &rect, edge)
    }

    #[inline]
    fn draw_color(&mut self, color: Color) -> crate::Result {
        self.commands.push(DrawCommand::DrawColor(color));
        Ok(())
    }

    #[inline]
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint) -> crate::Result {
        self.commands.push(DrawCommand::DrawLine {
            from: (x1, y1),
            to: (x2, y2),
            color: paint.color,
            stroke_width: paint.stroke_width,
        });
        Ok(())
    }

    #[inline]
    fn draw_path(&mut self, path: &Path, paint: &Paint) -> crate::Result {
        self.commands.push(DrawCommand::DrawPath {
            bounds: path.bounds(),
            color: paint.color,
        });
        Ok(())
    }

    #[inline]
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) -> crate::Result {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            x,
            y,
            align: paint.text_align,
            color: paint.color,
        });
        Ok(())
    }
}
