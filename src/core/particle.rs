use super::config::FieldConfig;
use super::constants::{
    PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_SPAN, PULSE_DEPTH, PULSE_SPEED_MIN, PULSE_SPEED_SPAN,
};
use super::surface::Shape;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// A single drifting background particle.
///
/// Particles have no identity beyond their index in the field and are
/// regenerated wholesale whenever the viewport changes size.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
    /// Radians per millisecond of elapsed time.
    pub pulse_speed: f32,
    pub pulse_phase: f32,
    pub shape: Shape,
}

impl Particle {
    /// Draw a particle uniformly from the ranges in `config`, placed inside
    /// a `width` x `height` viewport.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &FieldConfig, width: f32, height: f32) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        let size = config.size_min + rng.gen::<f32>() * (config.size_max - config.size_min);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.speed,
            (rng.gen::<f32>() - 0.5) * config.speed,
        );
        Self {
            position,
            velocity,
            size,
            opacity: PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
            pulse_speed: PULSE_SPEED_MIN + rng.gen::<f32>() * PULSE_SPEED_SPAN,
            pulse_phase: rng.gen::<f32>() * TAU,
            shape: Shape::ALL[rng.gen_range(0..Shape::ALL.len())],
        }
    }

    /// A still particle at `position`, mostly useful for scripted layouts.
    #[allow(dead_code)]
    pub fn at(position: Vec2, size: f32, shape: Shape) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            opacity: PARTICLE_OPACITY_MIN + PARTICLE_OPACITY_SPAN,
            pulse_speed: PULSE_SPEED_MIN,
            pulse_phase: 0.0,
            shape,
        }
    }

    /// Brightness multiplier in `[1 - 2*DEPTH, 1]` at `elapsed_ms`.
    #[inline]
    pub fn pulse(&self, elapsed_ms: f64) -> f32 {
        // Phase is computed in f64; elapsed milliseconds outgrow f32 precision quickly.
        let phase = elapsed_ms * self.pulse_speed as f64 + self.pulse_phase as f64;
        phase.sin() as f32 * PULSE_DEPTH + (1.0 - PULSE_DEPTH)
    }

    #[inline]
    pub fn alpha(&self, elapsed_ms: f64) -> f32 {
        self.opacity * self.pulse(elapsed_ms)
    }
}
