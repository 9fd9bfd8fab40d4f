use crate::constants::CANVAS_STYLE;
use anyhow::anyhow;
use starfield_core::Viewport;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

pub fn canvas_by_id(window: &web::Window, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("#{id} is not a canvas: {:?}", e)))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!(format!("get_context error: {:?}", e)))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("unexpected context type: {:?}", e)))
}

/// Logical window size and device pixel ratio; unreadable sizes become 0.
pub fn read_viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(
        dim(window.inner_width()),
        dim(window.inner_height()),
        window.device_pixel_ratio() as f32,
    )
}

pub fn apply_base_style(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    for (prop, value) in CANVAS_STYLE {
        _ = style.set_property(prop, value);
    }
}

#[inline]
pub fn set_visible(canvas: &web::HtmlCanvasElement, visible: bool) {
    _ = canvas
        .style()
        .set_property("display", if visible { "block" } else { "none" });
}
