use crate::controls::Controls;
use crate::input::{key_action, KeyAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, controls: &Controls) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat() {
        return;
    }
    match key_action(&ev.key()) {
        Some(KeyAction::Reset) => controls.reset(),
        Some(KeyAction::Select(mode)) => controls.set_mode(mode),
        Some(KeyAction::Toggle) => controls.toggle_mode(),
        None => return,
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(controls: Controls) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &controls);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
