use flowwave_core::{Blend, Painter, Rgba};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Painter`] backed by a canvas 2D context.
///
/// Colors are formatted to CSS strings per call; the scenes issue at most a
/// few hundred fills per frame.
#[derive(Clone)]
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Acquire the 2D context of `canvas`.
    pub fn for_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self::new(ctx))
    }

    #[inline]
    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Painter for CanvasPainter {
    fn set_blend(&mut self, blend: Blend) {
        _ = self.ctx.set_global_composite_operation(blend.as_css());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_string());
        _ = self.ctx.arc(cx as f64, cy as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.move_to(from[0] as f64, from[1] as f64);
        self.ctx.line_to(to[0] as f64, to[1] as f64);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Rgba) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(&color.to_string());
        _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
