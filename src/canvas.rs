use glam::Vec2;
use starfield_core::{Rgba, Surface, SurfaceError, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

/// `Surface` backed by a `<canvas>` 2D context, drawing in CSS pixels.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

fn draw_err(op: &'static str) -> impl FnOnce(JsValue) -> SurfaceError {
    move |e| SurfaceError::Draw {
        op,
        detail: format!("{:?}", e),
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: &Viewport) {
        let (w_px, h_px) = viewport.backing_size();
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", viewport.width));
        _ = style.set_property("height", &format!("{}px", viewport.height));
        // Resizing resets the context transform
        let dpr = viewport.pixel_ratio as f64;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("[canvas] set_transform failed: {:?}", e);
        }
    }

    fn clear(&mut self, viewport: &Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .map_err(draw_err("arc"))?;
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
        Ok(())
    }

    fn stroke_streak(
        &mut self,
        head: Vec2,
        tail: Vec2,
        color: Rgba,
        width: f32,
    ) -> Result<(), SurfaceError> {
        let gradient = self.ctx.create_linear_gradient(
            head.x as f64,
            head.y as f64,
            tail.x as f64,
            tail.y as f64,
        );
        gradient
            .add_color_stop(0.0, &color.to_css())
            .map_err(draw_err("add_color_stop"))?;
        gradient
            .add_color_stop(1.0, &color.with_alpha(0.0).to_css())
            .map_err(draw_err("add_color_stop"))?;

        self.ctx.begin_path();
        self.ctx.move_to(head.x as f64, head.y as f64);
        self.ctx.line_to(tail.x as f64, tail.y as f64);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
        Ok(())
    }

    fn stroke_closed_path(
        &mut self,
        points: &[Vec2],
        color: Rgba,
        width: f32,
    ) -> Result<(), SurfaceError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
        Ok(())
    }
}
