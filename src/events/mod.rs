pub mod pointer;

pub use pointer::wire_pointer_handlers;

use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Refit the canvas and respawn the field whenever the window resizes.
pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = frame_ctx.borrow_mut().resize_to_viewport();
        log::debug!("[resize] {}x{}, respawned particles", w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
