//! `reset` / `set_mode` entry points shared by the DOM controls, keyboard
//! shortcuts and the console debug API.

use crate::{dom, ui};
use flowwave_core::{Mode, SimContext};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct Controls {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub sim: Rc<RefCell<SimContext>>,
}

impl Controls {
    /// Re-measure the canvas only.
    pub fn resize(&self) {
        let mut sim = self.sim.borrow_mut();
        dom::sync_canvas_backing_size(&self.canvas, &self.ctx, &mut sim);
    }

    /// Re-measure, then reinitialize both views.
    pub fn reset(&self) {
        let mut sim = self.sim.borrow_mut();
        dom::sync_canvas_backing_size(&self.canvas, &self.ctx, &mut sim);
        sim.reset();
        log::info!("[reset] {} particles", sim.field().len());
    }

    pub fn set_mode(&self, mode: Mode) {
        {
            let mut sim = self.sim.borrow_mut();
            dom::sync_canvas_backing_size(&self.canvas, &self.ctx, &mut sim);
            sim.set_mode(mode);
        }
        if let Some(doc) = dom::window_document() {
            ui::show_mode(&doc, mode);
        }
    }

    /// Like [`Controls::set_mode`] for a textual id; unknown ids are logged and ignored.
    pub fn set_mode_id(&self, id: &str) {
        match id.parse::<Mode>() {
            Ok(mode) => self.set_mode(mode),
            Err(e) => log::warn!("[mode] {}", e),
        }
    }

    pub fn toggle_mode(&self) {
        let next = self.sim.borrow().mode().toggled();
        self.set_mode(next);
    }
}
