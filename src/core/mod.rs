pub mod config;
pub mod constants;
pub mod field;
pub mod hexagons;
pub mod particle;
pub mod surface;

pub use config::FieldConfig;
pub use field::ParticleField;
pub use hexagons::HexagonStyle;
pub use surface::{Rgba, Shape, Stroke, StyleCache, Surface};
