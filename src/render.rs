use crate::core::constants::{TRIANGLE_APEX_SCALE, TRIANGLE_HALF_BASE_SCALE};
use crate::core::{Rgba, Shape, Stroke, StyleCache, Surface};
use glam::Vec2;
use std::f64::consts::{FRAC_PI_4, TAU};
use web_sys as web;

/// `Surface` backed by a canvas 2D context.
///
/// Fill and stroke styles are only re-sent when the color changes. Call
/// `invalidate_styles` after touching the canvas width or height.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    styles: StyleCache,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            styles: StyleCache::default(),
        }
    }

    pub fn invalidate_styles(&mut self) {
        self.styles.invalidate();
    }

    fn set_stroke(&mut self, color: Rgba) {
        if self.styles.swap_stroke(color) {
            self.ctx.set_stroke_style_str(&color.css());
        }
    }

    fn set_fill(&mut self, color: Rgba) {
        if self.styles.swap_fill(color) {
            self.ctx.set_fill_style_str(&color.css());
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.set_stroke(stroke.color);
        let ctx = &self.ctx;
        ctx.set_global_alpha(stroke.alpha as f64);
        ctx.set_line_width(stroke.width as f64);
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn shape(&mut self, shape: Shape, center: Vec2, size: f32, color: Rgba, alpha: f32) {
        self.set_fill(color);
        let ctx = &self.ctx;
        let s = size as f64;
        ctx.save();
        ctx.set_global_alpha(alpha as f64);
        _ = ctx.translate(center.x as f64, center.y as f64);
        match shape {
            Shape::Disc => {
                ctx.begin_path();
                _ = ctx.arc(0.0, 0.0, s, 0.0, TAU);
                ctx.fill();
            }
            Shape::Diamond => {
                _ = ctx.rotate(FRAC_PI_4);
                ctx.fill_rect(-s, -s, s * 2.0, s * 2.0);
            }
            Shape::Triangle => {
                let half_base = s * TRIANGLE_HALF_BASE_SCALE as f64;
                ctx.begin_path();
                ctx.move_to(0.0, -s * TRIANGLE_APEX_SCALE as f64);
                ctx.line_to(half_base, s);
                ctx.line_to(-half_base, s);
                ctx.close_path();
                ctx.fill();
            }
        }
        // restore() also resets fillStyle, but to the value cached above
        ctx.restore();
    }
}
