use crate::core::HexagonStyle;
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Give every element matching `selector` a random scale, opacity, position
/// and animation delay. Returns how many elements were styled.
pub fn randomize<R: Rng + ?Sized>(document: &web::Document, selector: &str, rng: &mut R) -> u32 {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return 0;
    };
    let mut styled = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        let style = el.style();
        for (prop, value) in HexagonStyle::random(rng).css_properties() {
            _ = style.set_property(prop, &value);
        }
        styled += 1;
    }
    styled
}
