use crate::core::ParticleField;
use crate::dom;
use crate::render::CanvasSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<ParticleField>>,
    pub surface: CanvasSurface,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.field.borrow_mut().step(dt, &mut self.surface);
    }

    /// Refit the canvas to the viewport and respawn the field.
    ///
    /// Writing the canvas size wipes the context state, so the surface's
    /// style cache is dropped along with it.
    pub fn resize_to_viewport(&mut self) -> (f32, f32) {
        let (w, h) = dom::fit_canvas_to_viewport(&self.canvas);
        self.surface.invalidate_styles();
        self.field.borrow_mut().resize(w, h);
        (w, h)
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
