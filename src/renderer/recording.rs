//! In-memory canvas that records draw commands
//!
//! Used by the headless native build and by tests to inspect what a frame
//! drew without a browser.

use glam::Vec2;

use super::canvas::{Canvas, Color, Font, Paint, Path, TextAlign};

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect { pos: Vec2, size: Vec2, paint: Paint },
    Circle { center: Vec2, radius: f32, paint: Paint },
    Arc { center: Vec2, radius: f32, start: f32, end: f32, color: Color, width: f32 },
    Line { from: Vec2, to: Vec2, color: Color, width: f32 },
    Path { path: Path, paint: Paint },
    Text { text: String, pos: Vec2, font: Font, align: TextAlign, color: Color },
}

/// Canvas that stores every call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub cmds: Vec<DrawCmd>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any drawn text contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, paint: &Paint) {
        self.cmds.push(DrawCmd::Rect {
            pos,
            size,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.cmds.push(DrawCmd::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color, width: f32) {
        self.cmds.push(DrawCmd::Arc {
            center,
            radius,
            start,
            end,
            color,
            width,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.cmds.push(DrawCmd::Line { from, to, color, width });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.cmds.push(DrawCmd::Path {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Color) {
        self.cmds.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            font,
            align,
            color,
        });
    }
}
