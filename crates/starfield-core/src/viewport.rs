/// Logical viewport size plus the device pixel ratio used for the backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Replace values the host may report but that cannot size a surface:
    /// a missing/zero pixel ratio becomes 1, broken dimensions become 0.
    pub fn normalized(self) -> Self {
        let dim = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let pixel_ratio = if self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0 {
            self.pixel_ratio
        } else {
            1.0
        };
        Self {
            width: dim(self.width),
            height: dim(self.height),
            pixel_ratio,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Backing-store resolution in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).floor().max(0.0) as u32;
        let h = (self.height * self.pixel_ratio).floor().max(0.0) as u32;
        (w, h)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}
