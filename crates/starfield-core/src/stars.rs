use crate::constants::*;
use crate::uniform;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// A static background star whose opacity oscillates over time.
#[derive(Clone, Debug, PartialEq)]
pub struct TwinklePoint {
    pub position: Vec2,
    pub radius: f32,
    pub base_opacity: f32,
    pub twinkle_rate: f32,
    /// Advances by `twinkle_rate` per accepted frame; never wrapped.
    pub phase: f32,
}

impl TwinklePoint {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport) -> Self {
        Self {
            position: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            radius: uniform(rng, STAR_RADIUS_MIN, STAR_RADIUS_MAX),
            base_opacity: uniform(rng, STAR_OPACITY_MIN, STAR_OPACITY_MAX),
            twinkle_rate: uniform(rng, TWINKLE_RATE_MIN, TWINKLE_RATE_MAX),
            phase: rng.gen::<f32>() * TAU,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.phase += self.twinkle_rate;
    }

    /// Displayed opacity, between 0 and `base_opacity`.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.base_opacity * (0.5 + 0.5 * self.phase.sin())
    }
}

/// Create `count` stars spread uniformly over the viewport.
pub fn populate<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, count: usize) -> Vec<TwinklePoint> {
    (0..count)
        .map(|_| TwinklePoint::random(rng, viewport))
        .collect()
}
