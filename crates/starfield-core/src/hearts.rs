//! Heart-shaped constellations drawn from the proposal phase onwards.
//!
//! Outlines are recomputed from the current viewport on every frame so they
//! always follow the latest size; nothing here holds state.

use crate::constants::*;
use crate::viewport::Viewport;
use glam::Vec2;
use std::f32::consts::TAU;

pub type HeartOutline = [Vec2; HEART_SAMPLE_COUNT];

/// Sample the parametric heart curve at evenly spaced angles around `center`.
pub fn heart_points(center: Vec2, size: f32) -> HeartOutline {
    std::array::from_fn(|i| {
        let t = i as f32 / HEART_SAMPLE_COUNT as f32 * TAU;
        let x = center.x + size * (16.0 * t.sin().powi(3));
        let y = center.y
            - size
                * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos())
                / 16.0;
        Vec2::new(x, y)
    })
}

pub fn heart_constellations(viewport: &Viewport) -> [HeartOutline; 3] {
    HEART_LAYOUT.map(|(fx, fy, size)| {
        heart_points(Vec2::new(viewport.width * fx, viewport.height * fy), size)
    })
}
