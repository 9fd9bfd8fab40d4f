/// DOM wiring and frame-budget constants for the web frontend.
///
/// Kept free of `web_sys` so host-side tests can include this file directly.

// Element id of the backdrop canvas when the page does not pass one
pub const DEFAULT_CANVAS_ID: &str = "starfield-canvas";

// Fixed behind the page content, never intercepts pointer input
pub const CANVAS_STYLE: [(&str, &str); 4] = [
    ("position", "fixed"),
    ("inset", "0"),
    ("z-index", "-10"),
    ("pointer-events", "none"),
];

pub const RESIZE_EVENT: &str = "resize";
// Only one animator listener is attached at a time
pub const RESIZE_LISTENER_ID: i32 = 1;

// One frame at 60 Hz; longer frames are logged, never cut short
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;
// Log every Nth over-budget frame
pub const SLOW_FRAME_LOG_EVERY: u32 = 120;
