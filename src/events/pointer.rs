use crate::core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(field: Rc<RefCell<ParticleField>>) {
    wire_pointermove(field.clone());
    wire_pointerout(field);
}

fn wire_pointermove(field: Rc<RefCell<ParticleField>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        field
            .borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

// `pointerout` bubbles from every element; only a null related target means
// the pointer actually left the window.
fn wire_pointerout(field: Rc<RefCell<ParticleField>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.related_target().is_none() {
            field.borrow_mut().pointer_left();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerout", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
