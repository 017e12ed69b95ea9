use crate::constants::{CAPTION_ID, MODE_SELECT_ID, RESET_BUTTON_ID};
use crate::controls::Controls;
use crate::dom;
use flowwave_core::Mode;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reflect `mode` in the selector and the caption line.
pub fn show_mode(document: &web::Document, mode: Mode) {
    if let Some(sel) = mode_select(document) {
        if sel.value() != mode.id() {
            sel.set_value(mode.id());
        }
    }
    if let Some(el) = document.get_element_by_id(CAPTION_ID) {
        el.set_text_content(Some(mode.caption()));
    }
}

fn mode_select(document: &web::Document) -> Option<web::HtmlSelectElement> {
    document
        .get_element_by_id(MODE_SELECT_ID)?
        .dyn_into::<web::HtmlSelectElement>()
        .ok()
}

/// Hook the mode selector and the reset button up to `controls`.
pub fn wire_controls(document: &web::Document, controls: &Controls) {
    match mode_select(document) {
        Some(sel) => {
            let c = controls.clone();
            let sel_read = sel.clone();
            let closure = Closure::wrap(Box::new(move || {
                c.set_mode_id(&sel_read.value());
            }) as Box<dyn FnMut()>);
            _ = sel.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[init] no #{} selector; mode fixed to keyboard/API", MODE_SELECT_ID),
    }

    let c = controls.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || c.reset());

    show_mode(document, controls.sim.borrow().mode());
}
