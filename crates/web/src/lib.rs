#![cfg(target_arch = "wasm32")]
use flowwave_core::{SimContext, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod debug;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

use constants::{CANVAS_ID, RESIZE_SETTLE_MS};
use controls::Controls;

fn wire_canvas_resize(controls: &Controls) {
    let c = controls.clone();
    let resize_closure = Closure::wrap(Box::new(move || c.resize()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();

    // layout may not have settled on the first measure
    let c = controls.clone();
    dom::set_timeout(RESIZE_SETTLE_MS, move || c.resize());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flowwave-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let painter = render::CanvasPainter::for_canvas(&canvas)?;

    let rect = canvas.get_bounding_client_rect();
    let surface = Surface::fit(rect.width(), rect.height(), dom::device_pixel_ratio());
    let sim = Rc::new(RefCell::new(SimContext::new(surface, StdRng::from_entropy())));

    let controls = Controls {
        canvas: canvas.clone(),
        ctx: painter.context().clone(),
        sim: sim.clone(),
    };
    controls.reset();
    wire_canvas_resize(&controls);

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        sim: sim.clone(),
    });
    events::wire_global_keydown(controls.clone());
    ui::wire_controls(&document, &controls);
    if let Err(e) = debug::install_debug_api(&window, &controls) {
        log::warn!("[init] debug API unavailable: {:?}", e);
    }

    log::info!(
        "[init] {}x{} mode={} particles={}",
        sim.borrow().surface().width,
        sim.borrow().surface().height,
        sim.borrow().mode(),
        sim.borrow().field().len()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { sim, painter }));
    frame::start_loop(frame_ctx);
    Ok(())
}
