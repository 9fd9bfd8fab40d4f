use crate::viewport::Viewport;
use glam::Vec2;

/// Straight (non-premultiplied) color with a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string; alpha is clamped to [0, 1].
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("draw call `{op}` failed: {detail}")]
    Draw { op: &'static str, detail: String },
}

/// A 2D drawing target in logical (CSS pixel) coordinates.
pub trait Surface {
    /// Size the backing store to `viewport.backing_size()` and the displayed
    /// size to the logical viewport.
    fn resize(&mut self, viewport: &Viewport);

    fn clear(&mut self, viewport: &Viewport);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), SurfaceError>;

    /// Line from `head` to `tail` fading from `color` to fully transparent.
    fn stroke_streak(
        &mut self,
        head: Vec2,
        tail: Vec2,
        color: Rgba,
        width: f32,
    ) -> Result<(), SurfaceError>;

    fn stroke_closed_path(
        &mut self,
        points: &[Vec2],
        color: Rgba,
        width: f32,
    ) -> Result<(), SurfaceError>;
}
