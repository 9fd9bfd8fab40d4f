//! Capability tiers derived from the viewport width.
//!
//! The tier decides how rich the backdrop is: how many twinkle points exist,
//! how often frames are accepted, and whether shooting stars and the heart
//! overlay are drawn at all.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Mobile,
    Tablet,
    Desktop,
}

impl Tier {
    /// Classify a logical viewport width. Non-finite widths count as mobile.
    pub fn from_viewport_width(width: f32) -> Self {
        if !width.is_finite() || width < TABLET_MIN_WIDTH {
            Tier::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Tier::Tablet
        } else {
            Tier::Desktop
        }
    }

    #[inline]
    pub fn is_enabled(self) -> bool {
        !matches!(self, Tier::Mobile)
    }

    #[inline]
    pub fn target_fps(self) -> f64 {
        match self {
            Tier::Desktop => DESKTOP_TARGET_FPS,
            _ => REDUCED_TARGET_FPS,
        }
    }

    /// Minimum wall-clock spacing between accepted frames.
    #[inline]
    pub fn frame_interval_ms(self) -> f64 {
        1000.0 / self.target_fps()
    }

    pub fn star_count(self) -> usize {
        match self {
            Tier::Desktop => DESKTOP_STAR_COUNT,
            Tier::Tablet => TABLET_STAR_COUNT,
            Tier::Mobile => 0,
        }
    }

    #[inline]
    pub fn spawns_shooting_stars(self) -> bool {
        matches!(self, Tier::Desktop)
    }

    #[inline]
    pub fn shows_overlay(self) -> bool {
        matches!(self, Tier::Desktop)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Mobile => "mobile",
            Tier::Tablet => "tablet",
            Tier::Desktop => "desktop",
        }
    }
}
