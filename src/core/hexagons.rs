use super::constants::{
    HEXAGON_DELAY_MAX_SEC, HEXAGON_OPACITY_MIN, HEXAGON_OPACITY_SPAN, HEXAGON_SCALE_MIN,
    HEXAGON_SCALE_SPAN,
};
use rand::prelude::*;

/// Randomized placement for one floating hexagon decoration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexagonStyle {
    pub scale: f32,
    pub opacity: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay_sec: f32,
}

impl HexagonStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scale: HEXAGON_SCALE_MIN + rng.gen::<f32>() * HEXAGON_SCALE_SPAN,
            opacity: HEXAGON_OPACITY_MIN + rng.gen::<f32>() * HEXAGON_OPACITY_SPAN,
            left_pct: rng.gen::<f32>() * 100.0,
            top_pct: rng.gen::<f32>() * 100.0,
            delay_sec: rng.gen::<f32>() * HEXAGON_DELAY_MAX_SEC,
        }
    }

    /// CSS `(property, value)` pairs for an element's inline style.
    pub fn css_properties(&self) -> [(&'static str, String); 5] {
        [
            ("transform", format!("scale({})", self.scale)),
            ("opacity", self.opacity.to_string()),
            ("left", format!("{}%", self.left_pct)),
            ("top", format!("{}%", self.top_pct)),
            ("animation-delay", format!("{}s", self.delay_sec)),
        ]
    }
}
