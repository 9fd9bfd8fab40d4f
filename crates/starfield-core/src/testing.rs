//! Test doubles: a host driven by a fake clock and a surface that records
//! draw calls instead of rasterizing them.

use crate::animator::Starfield;
use crate::host::{AnimationHost, FrameHandle, HostError, IntervalHandle, ListenerHandle};
use crate::surface::{Rgba, Surface, SurfaceError};
use crate::viewport::Viewport;
use glam::Vec2;

#[derive(Clone, Debug)]
struct ManualInterval {
    handle: IntervalHandle,
    period_ms: f64,
    next_due_ms: f64,
}

/// Host that never fires anything by itself; see [`run_for`].
#[derive(Clone, Debug)]
pub struct ManualHost {
    viewport: Viewport,
    now_ms: f64,
    next_id: i32,
    pending_frames: Vec<FrameHandle>,
    intervals: Vec<ManualInterval>,
    listeners: Vec<ListenerHandle>,
    frame_requests: u64,
    intervals_started: u64,
}

impl ManualHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            now_ms: 0.0,
            next_id: 1,
            pending_frames: Vec::new(),
            intervals: Vec::new(),
            listeners: Vec::new(),
            frame_requests: 0,
            intervals_started: 0,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn pending_frames(&self) -> usize {
        self.pending_frames.len()
    }

    pub fn active_intervals(&self) -> usize {
        self.intervals.len()
    }

    pub fn resize_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Total frame requests ever made, fired or not.
    pub fn frame_requests(&self) -> u64 {
        self.frame_requests
    }

    pub fn intervals_started(&self) -> u64 {
        self.intervals_started
    }

    /// Nothing pending, nothing periodic, nobody listening.
    pub fn is_idle(&self) -> bool {
        self.pending_frames.is_empty() && self.intervals.is_empty() && self.listeners.is_empty()
    }

    fn next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn take_frame(&mut self) -> Option<FrameHandle> {
        if self.pending_frames.is_empty() {
            None
        } else {
            Some(self.pending_frames.remove(0))
        }
    }

    fn next_interval_due(&self) -> Option<f64> {
        self.intervals
            .iter()
            .map(|i| i.next_due_ms)
            .min_by(|a, b| a.total_cmp(b))
    }

    fn fire_earliest_interval(&mut self) {
        if let Some(next) = self
            .intervals
            .iter_mut()
            .min_by(|a, b| a.next_due_ms.total_cmp(&b.next_due_ms))
        {
            self.now_ms = next.next_due_ms;
            next.next_due_ms += next.period_ms;
        }
    }
}

impl AnimationHost for ManualHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn request_frame(&mut self) -> Result<FrameHandle, HostError> {
        let handle = FrameHandle(self.next_id());
        self.pending_frames.push(handle);
        self.frame_requests += 1;
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending_frames.retain(|h| *h != handle);
    }

    fn start_interval(&mut self, period_ms: f64) -> Result<IntervalHandle, HostError> {
        if !(period_ms.is_finite() && period_ms > 0.0) {
            return Err(HostError::Interval(format!("bad period {period_ms}")));
        }
        let handle = IntervalHandle(self.next_id());
        self.intervals.push(ManualInterval {
            handle,
            period_ms,
            next_due_ms: self.now_ms + period_ms,
        });
        self.intervals_started += 1;
        Ok(handle)
    }

    fn clear_interval(&mut self, handle: IntervalHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }

    fn watch_resize(&mut self) -> Result<ListenerHandle, HostError> {
        let handle = ListenerHandle(self.next_id());
        self.listeners.push(handle);
        Ok(handle)
    }

    fn unwatch_resize(&mut self, handle: ListenerHandle) {
        self.listeners.retain(|h| *h != handle);
    }
}

/// Advance the fake clock by `duration_ms`, delivering display refreshes every
/// `frame_period_ms` and interval ticks at their due times (intervals first
/// when both land on the same instant).
pub fn run_for<S: Surface>(
    starfield: &mut Starfield<ManualHost, S>,
    duration_ms: f64,
    frame_period_ms: f64,
) {
    let start = starfield.host().now_ms();
    let end = start + duration_ms;
    let mut vsync: u64 = 1;
    loop {
        let frame_at = start + vsync as f64 * frame_period_ms;
        let interval_due = starfield
            .host()
            .next_interval_due()
            .filter(|&t| t <= end && t <= frame_at);
        if interval_due.is_some() {
            starfield.host_mut().fire_earliest_interval();
            starfield.on_spawn_tick();
            continue;
        }
        if frame_at > end {
            break;
        }
        let host = starfield.host_mut();
        host.now_ms = frame_at;
        if host.take_frame().is_some() {
            starfield.on_frame(frame_at);
        }
        vsync += 1;
    }
    starfield.host_mut().now_ms = end;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize(Viewport),
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Streak {
        head: Vec2,
        tail: Vec2,
        color: Rgba,
        width: f32,
    },
    ClosedPath {
        points: Vec<Vec2>,
        color: Rgba,
        width: f32,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of frames drawn so far (each frame starts with a clear).
    pub fn frames_drawn(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Clear))
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Ops recorded since the most recent clear.
    pub fn last_frame(&self) -> &[DrawOp] {
        match self.ops.iter().rposition(|op| matches!(op, DrawOp::Clear)) {
            Some(i) => &self.ops[i + 1..],
            None => &[],
        }
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: &Viewport) {
        self.ops.push(DrawOp::Resize(*viewport));
    }

    fn clear(&mut self, _viewport: &Viewport) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_streak(
        &mut self,
        head: Vec2,
        tail: Vec2,
        color: Rgba,
        width: f32,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Streak {
            head,
            tail,
            color,
            width,
        });
        Ok(())
    }

    fn stroke_closed_path(
        &mut self,
        points: &[Vec2],
        color: Rgba,
        width: f32,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::ClosedPath {
            points: points.to_vec(),
            color,
            width,
        });
        Ok(())
    }
}
