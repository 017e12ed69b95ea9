use flowwave_core::SimContext;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[init] no #{} element; click handler skipped", element_id),
    }
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Re-measure the canvas and bring its backing store and 2D transform in line
/// with the simulation surface.
///
/// The backing store is only reassigned when its size changes, since that
/// clears the canvas and would wipe the particle trails.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    sim: &mut SimContext,
) {
    let rect = canvas.get_bounding_client_rect();
    let changed = sim.resize(rect.width(), rect.height(), device_pixel_ratio());
    let surface = *sim.surface();
    if changed || canvas.width() != surface.width || canvas.height() != surface.height {
        canvas.set_width(surface.width);
        canvas.set_height(surface.height);
        log::info!(
            "[resize] {}x{} @{:.2}",
            surface.width,
            surface.height,
            surface.scale
        );
    }
    let [a, b, c, d, e, f] = surface.transform();
    _ = ctx.set_transform(a, b, c, d, e, f);
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}
