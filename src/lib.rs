#![cfg(target_arch = "wasm32")]
use crate::constants::{HEXAGON_SELECTOR, PARTICLE_CANVAS_ID};
use crate::core::{FieldConfig, ParticleField};
use crate::dom::MountError;
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod hexagons;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (_window, document) = dom::window_document()?;
    let mut rng = StdRng::from_entropy();

    let styled = hexagons::randomize(&document, HEXAGON_SELECTOR, &mut rng);
    if styled > 0 {
        log::debug!("[hexagons] randomized {}", styled);
    }

    // The background is decorative: a page without the canvas just goes without.
    match mount_particles(&document, rng.gen()) {
        Ok(()) => {}
        Err(MountError::MissingElement(id)) => {
            log::debug!("#{} not present; particle background inactive", id);
        }
        Err(e) => log::warn!("particle background inactive: {}", e),
    }
    Ok(())
}

fn mount_particles(document: &web::Document, seed: u64) -> Result<(), MountError> {
    let canvas = dom::canvas_by_id(document, PARTICLE_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    let (width, height) = dom::fit_canvas_to_viewport(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(
        FieldConfig::default(),
        width,
        height,
        seed,
    )));
    log::info!(
        "[particles] count={} viewport={}x{}",
        field.borrow().particles().len(),
        width,
        height
    );

    events::wire_pointer_handlers(field.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        field,
        surface: render::CanvasSurface::new(ctx),
        last_instant: Instant::now(),
    }));
    events::wire_resize(frame_ctx.clone());
    frame::start_loop(frame_ctx);
    Ok(())
}
