#![cfg(target_arch = "wasm32")]
//! Browser frontend for the starfield backdrop.
//!
//! Exposes [`StarfieldHandle`] to JavaScript: construct it with the canvas id
//! and the current flow step, call `setStep` as the flow advances, and
//! `destroy` (or `free`) when the page section unmounts.

use starfield_core::{AnimatorConfig, Phase, Starfield, Tier};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod host;
mod watcher;

use canvas::CanvasSurface;
use constants::DEFAULT_CANVAS_ID;
use host::{WebHost, WebStarfield};
use watcher::TierWatch;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");
    Ok(())
}

#[wasm_bindgen]
pub struct StarfieldHandle {
    starfield: Rc<RefCell<WebStarfield>>,
    tier_watch: Option<TierWatch>,
}

#[wasm_bindgen]
impl StarfieldHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>, step: u32) -> Result<StarfieldHandle, JsValue> {
        let id = canvas_id.as_deref().unwrap_or(DEFAULT_CANVAS_ID);
        init(id, Phase::from_step(step)).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    #[wasm_bindgen(js_name = setStep)]
    pub fn set_step(&self, step: u32) {
        let mut sf = self.starfield.borrow_mut();
        let config = sf.config().with_phase(Phase::from_step(step));
        sf.reconfigure(config);
    }

    pub fn tier(&self) -> String {
        self.starfield.borrow().config().tier.name().to_string()
    }

    pub fn destroy(&mut self) {
        if let Some(mut watch) = self.tier_watch.take() {
            watch.remove();
        }
        self.starfield.borrow_mut().teardown();
    }
}

fn init(canvas_id: &str, phase: Phase) -> anyhow::Result<StarfieldHandle> {
    let window = dom::window()?;
    let canvas = dom::canvas_by_id(&window, canvas_id)?;
    dom::apply_base_style(&canvas);

    let surface = match dom::context_2d(&canvas) {
        Ok(ctx) => Some(CanvasSurface::new(canvas.clone(), ctx)),
        Err(e) => {
            log::warn!("[init] {e:#}; backdrop disabled");
            None
        }
    };

    let tier = Tier::from_viewport_width(dom::read_viewport(&window).width);
    dom::set_visible(&canvas, tier.is_enabled());
    let config = AnimatorConfig::new(tier, phase);
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;

    let host_window = window.clone();
    let starfield = Rc::new_cyclic(|weak: &Weak<RefCell<WebStarfield>>| {
        RefCell::new(Starfield::new(
            WebHost::new(host_window, weak.clone()),
            surface,
            config,
            seed,
        ))
    });
    starfield.borrow_mut().mount();

    let tier_watch = TierWatch::install(&window, Rc::downgrade(&starfield), canvas);
    log::info!("[init] #{canvas_id} tier={} phase={:?}", tier.name(), phase);
    Ok(StarfieldHandle {
        starfield,
        tier_watch: Some(tier_watch),
    })
}
