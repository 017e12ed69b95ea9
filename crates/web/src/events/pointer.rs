use crate::input;
use flowwave_core::SimContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<SimContext>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerenter(&w);
    wire_pointerleave(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

fn listen(w: &InputWiring, event: &str, handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointermove", move |ev| {
        let pos = input::pointer_canvas_css(&ev, &w2.canvas);
        w2.sim.borrow_mut().pointer.moved(pos.x, pos.y);
    });
}

fn wire_pointerenter(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointerenter", move |ev| {
        let pos = input::pointer_canvas_css(&ev, &w2.canvas);
        w2.sim.borrow_mut().pointer.entered(pos.x, pos.y);
    });
}

fn wire_pointerleave(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointerleave", move |_ev| {
        w2.sim.borrow_mut().pointer.left();
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointerdown", move |ev| {
        let pos = input::pointer_canvas_css(&ev, &w2.canvas);
        {
            let mut sim = w2.sim.borrow_mut();
            sim.pointer.moved(pos.x, pos.y);
            sim.pointer.set_pressed(true);
        }
        log::debug!("[input] press at ({:.0},{:.0})", pos.x, pos.y);
        ev.prevent_default();
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w2 = w.clone();
    listen(w, "pointerup", move |ev| {
        w2.sim.borrow_mut().pointer.set_pressed(false);
        ev.prevent_default();
    });
}
