//! Browser backend: `CanvasRenderingContext2d`
//!
//! Canvas calls that can fail (arcs, text, gradient stops) are logged and
//! skipped; a bad draw call never takes down the frame loop.

use glam::Vec2;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

use super::canvas::{Canvas, Color, Font, LinearGradient, Paint, Path, PathCmd, TextAlign};

/// 2D context wrapper scaled so one field pixel maps to `scale` canvas pixels
pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(ctx: CanvasRenderingContext2d, scale: f64) -> Self {
        if let Err(e) = ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0) {
            log::warn!("Failed to set canvas transform: {:?}", e);
        }
        Self { ctx }
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Gradient(gradient) => self.set_fill_gradient(gradient),
        }
    }

    fn set_fill_gradient(&self, gradient: &LinearGradient) {
        let g = self.ctx.create_linear_gradient(
            gradient.start.x as f64,
            gradient.start.y as f64,
            gradient.end.x as f64,
            gradient.end.y as f64,
        );
        for (offset, color) in &gradient.stops {
            if let Err(e) = g.add_color_stop(*offset, &color.to_css()) {
                log::warn!("Bad gradient stop {}: {:?}", offset, e);
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&g);
    }

    fn trace(&self, path: &Path) {
        self.ctx.begin_path();
        for cmd in &path.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathCmd::LineTo(p) => self.ctx.line_to(p.x as f64, p.y as f64),
                PathCmd::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCmd::Close => self.ctx.close_path(),
            }
        }
    }
}

impl Canvas for WebCanvas {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, paint: &Paint) {
        self.set_fill(paint);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
        {
            log::warn!("Circle failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            start as f64,
            end as f64,
        ) {
            log::warn!("Arc failed: {:?}", e);
            return;
        }
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        if path.is_empty() {
            return;
        }
        self.set_fill(paint);
        self.trace(path);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&font.to_css());
        self.ctx.set_text_align(align.as_str());
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("Text failed: {:?}", e);
        }
    }
}
