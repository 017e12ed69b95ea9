//! Drawing seam between the views and whatever backs the canvas.
//!
//! The views only ever issue these few 2D primitives, so a browser front-end
//! maps them onto `CanvasRenderingContext2d` while host tests record them.

use std::fmt;

/// Straight-alpha sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Formats as a CSS color, e.g. `rgba(120,200,255,0.5)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// How new pixels combine with what is already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    #[default]
    SourceOver,
    /// Additive; overlapping particles brighten.
    Lighter,
}

impl Blend {
    /// Canvas `globalCompositeOperation` name.
    pub fn as_css(self) -> &'static str {
        match self {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        }
    }
}

/// Minimal immediate-mode 2D drawing target.
///
/// Coordinates are logical drawing units. Object-safe so a view can take
/// `&mut dyn Painter`.
pub trait Painter {
    fn set_blend(&mut self, blend: Blend);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], color: Rgba);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Rgba);
}

/// A boxed one-line caption drawn in the top-left corner of a scene.
#[derive(Clone, Copy, Debug)]
pub struct Label {
    pub text: &'static str,
    pub rect: [f32; 4],
    pub text_pos: [f32; 2],
    pub box_color: Rgba,
    pub text_color: Rgba,
}

impl Label {
    pub fn draw(&self, painter: &mut dyn Painter, font: &str) {
        let [x, y, w, h] = self.rect;
        painter.fill_rect(x, y, w, h, self.box_color);
        painter.fill_text(
            self.text,
            self.text_pos[0],
            self.text_pos[1],
            font,
            self.text_color,
        );
    }
}

/// Every call a [`Painter`] received, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Blend(Blend),
    Rect { x: f32, y: f32, w: f32, h: f32, color: Rgba },
    Circle { cx: f32, cy: f32, radius: f32, color: Rgba },
    Line { from: [f32; 2], to: [f32; 2], color: Rgba },
    Text { text: String, x: f32, y: f32 },
}

/// Painter that only records; used by host-side tests and diagnostics.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    pub calls: Vec<DrawCall>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { .. }))
    }
}

impl Painter for RecordingPainter {
    fn set_blend(&mut self, blend: Blend) {
        self.calls.push(DrawCall::Blend(blend));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.calls.push(DrawCall::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], color: Rgba) {
        self.calls.push(DrawCall::Line { from, to, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, _font: &str, _color: Rgba) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_formats_as_css() {
        assert_eq!(Rgba::new(6, 10, 18, 0.14).to_string(), "rgba(6,10,18,0.14)");
        assert_eq!(Rgba::new(7, 16, 38, 1.0).to_string(), "rgba(7,16,38,1)");
    }

    #[test]
    fn painter_is_object_safe() {
        let mut rec = RecordingPainter::new();
        {
            let p: &mut dyn Painter = &mut rec;
            p.set_blend(Blend::Lighter);
            p.fill_circle(1.0, 2.0, 3.0, Rgba::new(0, 0, 0, 1.0));
        }
        assert_eq!(rec.calls.len(), 2);
        assert_eq!(rec.circles().count(), 1);
        assert_eq!(Blend::Lighter.as_css(), "lighter");
    }
}
