use flowwave_core::Mode;
use glam::Vec2;
use web_sys as web;

/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Reset,
    Select(Mode),
    Toggle,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::Reset),
        "f" | "F" => Some(KeyAction::Select(Mode::Fluid)),
        "q" | "Q" => Some(KeyAction::Select(Mode::Quantum)),
        "m" | "M" => Some(KeyAction::Toggle),
        _ => None,
    }
}

// ---------------- Pointer helpers ----------------
/// Client coordinates relative to the canvas' top-left corner, in CSS pixels.
#[inline]
pub fn client_to_canvas(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new((client_x - rect_left) as f32, (client_y - rect_top) as f32)
}

#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}
