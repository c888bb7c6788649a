// Tuning constants for the particle background. Distances are CSS pixels,
// speeds are pixels per frame, pulse speeds are radians per millisecond.

// Field population
pub const PARTICLE_COUNT: usize = 80;
pub const PARTICLE_SIZE_MIN: f32 = 1.5;
pub const PARTICLE_SIZE_MAX: f32 = 4.0;
pub const PARTICLE_SPEED: f32 = 0.4; // velocity components span [-speed/2, speed/2)

// Base opacity drawn from [MIN, MIN + SPAN)
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;

// Pulsation: alpha = opacity * (sin(t * speed + phase) * DEPTH + (1 - DEPTH))
pub const PULSE_SPEED_MIN: f32 = 0.01;
pub const PULSE_SPEED_SPAN: f32 = 0.02;
pub const PULSE_DEPTH: f32 = 0.3;

// Connections
pub const CONNECTION_DISTANCE: f32 = 180.0;
pub const CONNECTION_ALPHA: f32 = 0.5;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;

// Pointer interaction
pub const POINTER_RADIUS: f32 = 150.0;
pub const POINTER_CONNECTION_ALPHA: f32 = 0.8;
pub const POINTER_LINE_WIDTH: f32 = 1.0;
pub const REPULSION_STRENGTH: f32 = 0.5; // max displacement per frame, px

// Off-screen overscan before a particle wraps to the opposite edge
pub const WRAP_MARGIN: f32 = 10.0;

// Triangle geometry relative to particle size
pub const TRIANGLE_APEX_SCALE: f32 = 1.5;
pub const TRIANGLE_HALF_BASE_SCALE: f32 = 1.3;

// Palette (team gold)
pub const TEAM_GOLD_RGB: [u8; 3] = [207, 184, 124];
pub const PARTICLE_FILL_ALPHA: f32 = 0.8;
pub const CONNECTION_STROKE_ALPHA: f32 = 0.15;
pub const POINTER_STROKE_ALPHA: f32 = 0.4;

// Floating hexagon decoration
pub const HEXAGON_SCALE_MIN: f32 = 0.5;
pub const HEXAGON_SCALE_SPAN: f32 = 1.0;
pub const HEXAGON_OPACITY_MIN: f32 = 0.02;
pub const HEXAGON_OPACITY_SPAN: f32 = 0.04;
pub const HEXAGON_DELAY_MAX_SEC: f32 = 5.0;
