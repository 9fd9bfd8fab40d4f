use crate::canvas::CanvasSurface;
use crate::constants::*;
use crate::dom;
use instant::Instant;
use starfield_core::{
    AnimationHost, FrameHandle, HostError, IntervalHandle, ListenerHandle, Starfield, Viewport,
};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebStarfield = Starfield<WebHost, CanvasSurface>;

/// Browser scheduling for the animator: `requestAnimationFrame` for frames,
/// `setInterval` for the spawner and a window `resize` listener.
///
/// The three callbacks are created once and reused for every request; they
/// hold only a weak reference so dropping the animator frees everything.
pub struct WebHost {
    window: web::Window,
    on_frame: Closure<dyn FnMut(f64)>,
    on_spawn: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl WebHost {
    pub fn new(window: web::Window, starfield: Weak<RefCell<WebStarfield>>) -> Self {
        let frame_target = starfield.clone();
        let mut slow_frames: u32 = 0;
        let on_frame = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(sf) = frame_target.upgrade() else {
                return;
            };
            let started = Instant::now();
            sf.borrow_mut().on_frame(timestamp_ms);
            let spent_ms = started.elapsed().as_secs_f64() * 1000.0;
            if spent_ms > FRAME_BUDGET_MS {
                if slow_frames % SLOW_FRAME_LOG_EVERY == 0 {
                    log::debug!(
                        "[frame] {:.1}ms over the {:.1}ms budget ({} slow frames)",
                        spent_ms,
                        FRAME_BUDGET_MS,
                        slow_frames + 1
                    );
                }
                slow_frames = slow_frames.wrapping_add(1);
            }
        }) as Box<dyn FnMut(f64)>);

        let spawn_target = starfield.clone();
        let on_spawn = Closure::wrap(Box::new(move || {
            if let Some(sf) = spawn_target.upgrade() {
                sf.borrow_mut().on_spawn_tick();
            }
        }) as Box<dyn FnMut()>);

        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(sf) = starfield.upgrade() {
                sf.borrow_mut().on_resize();
            }
        }) as Box<dyn FnMut()>);

        Self {
            window,
            on_frame,
            on_spawn,
            on_resize,
        }
    }
}

impl AnimationHost for WebHost {
    fn viewport(&self) -> Viewport {
        dom::read_viewport(&self.window)
    }

    fn request_frame(&mut self) -> Result<FrameHandle, HostError> {
        self.window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| HostError::Frame(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }

    fn start_interval(&mut self, period_ms: f64) -> Result<IntervalHandle, HostError> {
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.on_spawn.as_ref().unchecked_ref(),
                period_ms.round() as i32,
            )
            .map(IntervalHandle)
            .map_err(|e| HostError::Interval(format!("{:?}", e)))
    }

    fn clear_interval(&mut self, handle: IntervalHandle) {
        self.window.clear_interval_with_handle(handle.0);
    }

    fn watch_resize(&mut self) -> Result<ListenerHandle, HostError> {
        self.window
            .add_event_listener_with_callback(RESIZE_EVENT, self.on_resize.as_ref().unchecked_ref())
            .map(|_| ListenerHandle(RESIZE_LISTENER_ID))
            .map_err(|e| HostError::Listener(format!("{:?}", e)))
    }

    fn unwatch_resize(&mut self, _handle: ListenerHandle) {
        _ = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, self.on_resize.as_ref().unchecked_ref());
    }
}
