use super::config::FieldConfig;
use super::particle::Particle;
use super::surface::{Stroke, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// Last known pointer position and the radius it influences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// `None` while the pointer is outside the viewport.
    pub position: Option<Vec2>,
    pub radius: f32,
}

/// Line opacity for two points `distance` apart, before any base factor.
///
/// Falls linearly from 1 at distance 0 to exactly 0 at `threshold` and
/// stays 0 beyond it.
#[inline]
pub fn connection_opacity(distance: f32, threshold: f32) -> f32 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    (1.0 - distance / threshold).clamp(0.0, 1.0)
}

/// Displacement pushing `position` away from `pointer`, or `None` when the
/// pointer is at least `radius` away.
///
/// Magnitude is `strength * (radius - d) / radius`. A particle sitting exactly
/// on the pointer is pushed along +x.
#[inline]
pub fn repulsion(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Option<Vec2> {
    let offset = position - pointer;
    let distance = offset.length();
    if distance >= radius {
        return None;
    }
    let force = (radius - distance) / radius;
    let dir = offset.try_normalize().unwrap_or(Vec2::X);
    Some(dir * force * strength)
}

/// Wrap `v` onto the opposite side of `[-margin, extent + margin]` once it
/// leaves that range.
#[inline]
fn wrap_axis(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

/// The animated particle background.
///
/// Owns the particles, the pointer state, the viewport size, a seeded RNG and
/// an elapsed-time clock. A driver calls `step` once per display frame and
/// forwards pointer and resize events in between.
///
/// Typical usage:
/// - Construct with `ParticleField::new(config, width, height, seed)`
/// - Call `step(dt, &mut surface)` every frame
/// - Forward `pointer_moved`, `pointer_left` and `resize` from input events
pub struct ParticleField {
    pub config: FieldConfig,
    particles: Vec<Particle>,
    pointer: Pointer,
    width: f32,
    height: f32,
    elapsed: Duration,
    rng: StdRng,
}

impl ParticleField {
    /// Build a field sized to `width` x `height` with `config.particle_count`
    /// randomly spawned particles.
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let pointer = Pointer {
            position: None,
            radius: config.pointer_radius,
        };
        let mut field = Self {
            config,
            particles: Vec::new(),
            pointer,
            width,
            height,
            elapsed: Duration::ZERO,
            rng: StdRng::seed_from_u64(seed),
        };
        field.spawn_all();
        field
    }

    /// Build a field from a fixed particle layout. The configured count is
    /// replaced by `particles.len()`.
    #[allow(dead_code)]
    pub fn from_particles(
        mut config: FieldConfig,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
        seed: u64,
    ) -> Self {
        config.particle_count = particles.len();
        Self {
            pointer: Pointer {
                position: None,
                radius: config.pointer_radius,
            },
            config,
            particles,
            width,
            height,
            elapsed: Duration::ZERO,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn spawn_all(&mut self) {
        let (w, h) = (self.width, self.height);
        let count = self.config.particle_count;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(&mut self.rng, &self.config, w, h));
        }
        self.particles = particles;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[allow(dead_code)]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[allow(dead_code)]
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    #[allow(dead_code)]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[allow(dead_code)]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Adopt a new viewport size and regenerate every particle.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.spawn_all();
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.position = Some(Vec2::new(x, y));
    }

    pub fn pointer_left(&mut self) {
        self.pointer.position = None;
    }

    /// Advance the clock by `dt`, draw the current frame, then move particles.
    pub fn step<S: Surface + ?Sized>(&mut self, dt: Duration, surface: &mut S) {
        self.elapsed += dt;
        self.render(surface);
        self.update();
    }

    /// Draw connections and particles for the current state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        self.draw_connections(surface);
        self.draw_particles(surface);
    }

    fn draw_connections<S: Surface + ?Sized>(&self, surface: &mut S) {
        let cfg = &self.config;
        let pair_stroke = |alpha: f32| Stroke {
            color: cfg.palette.connection,
            alpha,
            width: cfg.connection_line_width,
        };
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.position.distance(b.position);
                if d < cfg.connection_distance {
                    let alpha = connection_opacity(d, cfg.connection_distance) * cfg.connection_alpha;
                    surface.line(a.position, b.position, &pair_stroke(alpha));
                }
            }

            if let Some(p) = self.pointer.position {
                let d = a.position.distance(p);
                if d < self.pointer.radius {
                    let stroke = Stroke {
                        color: cfg.palette.pointer_connection,
                        alpha: connection_opacity(d, self.pointer.radius) * cfg.pointer_connection_alpha,
                        width: cfg.pointer_line_width,
                    };
                    surface.line(a.position, p, &stroke);
                }
            }
        }
    }

    fn draw_particles<S: Surface + ?Sized>(&self, surface: &mut S) {
        let elapsed_ms = self.elapsed.as_secs_f64() * 1000.0;
        let color = self.config.palette.particle;
        for p in &self.particles {
            surface.shape(p.shape, p.position, p.size, color, p.alpha(elapsed_ms));
        }
    }

    /// Physics pass: drift, pointer repulsion, then wrap at the overscan edges.
    pub fn update(&mut self) {
        let (w, h) = (self.width, self.height);
        let margin = self.config.wrap_margin;
        let strength = self.config.repulsion_strength;
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.position += p.velocity;
            if let Some(at) = pointer.position {
                if let Some(push) = repulsion(p.position, at, pointer.radius, strength) {
                    p.position += push;
                }
            }
            p.position.x = wrap_axis(p.position.x, w, margin);
            p.position.y = wrap_axis(p.position.y, h, margin);
        }
    }
}
