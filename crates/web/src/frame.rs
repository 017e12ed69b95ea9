use crate::render::CanvasPainter;
use flowwave_core::SimContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<SimContext>>,
    pub painter: CanvasPainter,
}

impl FrameContext {
    /// `now_ms` is the `requestAnimationFrame` timestamp.
    pub fn frame(&mut self, now_ms: f64) {
        self.sim.borrow_mut().frame(now_ms, &mut self.painter);
    }
}

type TickClosure = Closure<dyn FnMut(f64)>;

/// Drive `frame_ctx` from `requestAnimationFrame`; each tick schedules the next.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx.borrow_mut().frame(now_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<TickClosure>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
