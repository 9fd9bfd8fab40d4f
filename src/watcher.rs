use crate::constants::RESIZE_EVENT;
use crate::dom;
use crate::host::WebStarfield;
use starfield_core::Tier;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-derives the tier from the window width on every resize and
/// reconfigures the animator when it changes. Lives independently of the
/// animator's own resize listener so a mobile start can still come alive.
pub struct TierWatch {
    window: web::Window,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl TierWatch {
    pub fn install(
        window: &web::Window,
        starfield: Weak<RefCell<WebStarfield>>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        let wnd = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            let Some(sf) = starfield.upgrade() else {
                return;
            };
            let tier = Tier::from_viewport_width(dom::read_viewport(&wnd).width);
            let mut sf = sf.borrow_mut();
            let current = sf.config();
            if tier != current.tier {
                log::info!("[tier] {} -> {}", current.tier.name(), tier.name());
                dom::set_visible(&canvas, tier.is_enabled());
                sf.reconfigure(current.with_tier(tier));
            }
        }) as Box<dyn FnMut()>);
        if let Err(e) =
            window.add_event_listener_with_callback(RESIZE_EVENT, on_resize.as_ref().unchecked_ref())
        {
            log::warn!("[tier] resize listener not attached: {:?}", e);
        }
        Self {
            window: window.clone(),
            on_resize: Some(on_resize),
        }
    }

    pub fn remove(&mut self) {
        if let Some(cb) = self.on_resize.take() {
            _ = self
                .window
                .remove_event_listener_with_callback(RESIZE_EVENT, cb.as_ref().unchecked_ref());
        }
    }
}

impl Drop for TierWatch {
    fn drop(&mut self) {
        self.remove();
    }
}
