use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reasons the particle canvas could not be mounted.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{0} is not a <canvas>")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    NoContext,
}

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), MountError> {
    let window = web::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    Ok((window, document))
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(id.to_string()))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, MountError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(MountError::NoContext)
}

/// Viewport size in CSS pixels (`innerWidth` x `innerHeight`).
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Size the canvas backing store to the viewport; returns the new size.
pub fn fit_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let Some(window) = web::window() else {
        return (canvas.width() as f32, canvas.height() as f32);
    };
    let (w, h) = viewport_size(&window);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}
