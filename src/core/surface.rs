use glam::Vec2;

/// Shape drawn for a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Disc,
    Diamond,
    Triangle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Disc, Shape::Diamond, Shape::Triangle];
}

/// An sRGB color with its own alpha, as used for CSS `rgba(...)` styles.
///
/// The alpha here is the style alpha; draw calls carry a separate
/// per-call alpha that multiplies it (canvas `globalAlpha`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self { rgb, a }
    }

    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.a
        )
    }
}

/// Line style for a single connection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub alpha: f32,
    pub width: f32,
}

/// Remembers the fill and stroke colors last applied to a drawing context so
/// repeated palette entries are not re-sent every call.
///
/// Resizing a canvas resets its whole 2D state (styles go back to black), so
/// whoever resizes the backing store must call `invalidate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleCache {
    fill: Option<Rgba>,
    stroke: Option<Rgba>,
}

impl StyleCache {
    /// True when `color` has to be applied as the fill style; records it.
    pub fn swap_fill(&mut self, color: Rgba) -> bool {
        let changed = self.fill != Some(color);
        self.fill = Some(color);
        changed
    }

    /// True when `color` has to be applied as the stroke style; records it.
    pub fn swap_stroke(&mut self, color: Rgba) -> bool {
        let changed = self.stroke != Some(color);
        self.stroke = Some(color);
        changed
    }

    pub fn invalidate(&mut self) {
        self.fill = None;
        self.stroke = None;
    }
}

/// Drawing target for the particle field.
///
/// The browser build maps this onto a `CanvasRenderingContext2d`; tests
/// record the calls instead.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);
    fn shape(&mut self, shape: Shape, center: Vec2, size: f32, color: Rgba, alpha: f32);
}
