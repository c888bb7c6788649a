use super::constants::*;
use super::surface::Rgba;

/// Colors used by the field renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub particle: Rgba,
    pub connection: Rgba,
    pub pointer_connection: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            particle: Rgba::new(TEAM_GOLD_RGB, PARTICLE_FILL_ALPHA),
            connection: Rgba::new(TEAM_GOLD_RGB, CONNECTION_STROKE_ALPHA),
            pointer_connection: Rgba::new(TEAM_GOLD_RGB, POINTER_STROKE_ALPHA),
        }
    }
}

/// Static configuration for a `ParticleField`, fixed at construction time.
///
/// Fields:
/// - `particle_count`: number of particles kept alive after every (re)spawn
/// - `size_min`/`size_max`: particle size bounds in pixels
/// - `speed`: velocity components are drawn from `[-speed/2, speed/2)`
/// - `connection_distance`: particle pairs closer than this get a line
/// - `pointer_radius`: interaction radius for pointer lines and repulsion
/// - `wrap_margin`: overscan allowed past each edge before wrapping
/// - `repulsion_strength`: displacement at zero distance from the pointer
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub speed: f32,
    pub connection_distance: f32,
    pub pointer_radius: f32,
    pub wrap_margin: f32,
    pub repulsion_strength: f32,
    pub connection_alpha: f32,
    pub pointer_connection_alpha: f32,
    pub connection_line_width: f32,
    pub pointer_line_width: f32,
    pub palette: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
            speed: PARTICLE_SPEED,
            connection_distance: CONNECTION_DISTANCE,
            pointer_radius: POINTER_RADIUS,
            wrap_margin: WRAP_MARGIN,
            repulsion_strength: REPULSION_STRENGTH,
            connection_alpha: CONNECTION_ALPHA,
            pointer_connection_alpha: POINTER_CONNECTION_ALPHA,
            connection_line_width: CONNECTION_LINE_WIDTH,
            pointer_line_width: POINTER_LINE_WIDTH,
            palette: Palette::default(),
        }
    }
}
