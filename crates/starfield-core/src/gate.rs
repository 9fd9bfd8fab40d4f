use crate::constants::FRAME_GATE_EPSILON_MS;

/// Throttles a display-driven frame source down to a target rate.
///
/// A frame is accepted only when at least one frame interval has passed since
/// the previously accepted frame; skipped frames advance nothing.
#[derive(Clone, Debug)]
pub struct FrameGate {
    interval_ms: f64,
    last_accepted_ms: f64,
}

impl FrameGate {
    pub fn new(target_fps: f64) -> Self {
        Self {
            interval_ms: 1000.0 / target_fps,
            last_accepted_ms: 0.0,
        }
    }

    /// Change the cap without forgetting when the last frame was accepted.
    pub fn set_target_fps(&mut self, target_fps: f64) {
        self.interval_ms = 1000.0 / target_fps;
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn accept(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_accepted_ms + FRAME_GATE_EPSILON_MS < self.interval_ms {
            return false;
        }
        self.last_accepted_ms = now_ms;
        true
    }
}
