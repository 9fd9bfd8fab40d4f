// Starfield tuning constants shared by the animator and the web frontend.

// Population per tier
pub const DESKTOP_STAR_COUNT: usize = 100;
pub const TABLET_STAR_COUNT: usize = 60;

// Frame pacing (frames per second)
pub const DESKTOP_TARGET_FPS: f64 = 60.0;
pub const REDUCED_TARGET_FPS: f64 = 30.0;
// Absorbs float error when timestamps are products of the display period
pub const FRAME_GATE_EPSILON_MS: f64 = 1e-6;

// Tier breakpoints (logical px)
pub const TABLET_MIN_WIDTH: f32 = 768.0;
pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;

// Twinkle points
pub const STAR_RADIUS_MIN: f32 = 0.5;
pub const STAR_RADIUS_MAX: f32 = 2.0;
pub const STAR_OPACITY_MIN: f32 = 0.5;
pub const STAR_OPACITY_MAX: f32 = 1.0;
pub const TWINKLE_RATE_MIN: f32 = 0.01;
pub const TWINKLE_RATE_MAX: f32 = 0.03;

// Shooting stars
pub const SHOOTING_INTERVAL_MS: f64 = 2000.0;
pub const SHOOTING_SPAWN_Y: f32 = -10.0; // just above the top edge
pub const SHOOTING_VX_SPAN: f32 = 1.0; // vx in [-span, span)
pub const SHOOTING_VY_MIN: f32 = 2.0;
pub const SHOOTING_VY_MAX: f32 = 5.0;
pub const SHOOTING_TRAIL_MIN: f32 = 40.0;
pub const SHOOTING_TRAIL_MAX: f32 = 120.0;
pub const SHOOTING_LIFE_DECAY: f32 = 0.01; // per accepted frame
pub const SHOOTING_LINE_WIDTH: f32 = 2.0;

// Heart overlay: (x fraction, y fraction, size) of the viewport
pub const HEART_LAYOUT: [(f32, f32, f32); 3] = [(0.2, 0.3, 30.0), (0.8, 0.4, 25.0), (0.5, 0.7, 35.0)];
pub const HEART_SAMPLE_COUNT: usize = 12;
pub const HEART_DOT_RADIUS: f32 = 2.0;
pub const HEART_LINE_WIDTH: f32 = 1.0;

// Palette
pub const STAR_RGB: [u8; 3] = [255, 255, 255];
pub const SHOOTING_RGB: [u8; 3] = [255, 200, 220];
pub const HEART_RGB: [u8; 3] = [255, 182, 193];
pub const HEART_OUTLINE_ALPHA: f32 = 0.3;
pub const HEART_DOT_ALPHA: f32 = 0.8;
