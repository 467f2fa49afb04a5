//! Drawing surface abstraction
//!
//! A small immediate-mode 2D API shaped after the browser canvas: fill and
//! stroke paths, arcs, rectangles and text in field coordinates. The scene
//! draws through [`Canvas`] so the same frame can go to a browser context or
//! to an in-memory recorder.

use glam::Vec2;

/// RGBA color, channels 0-255 with alpha 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From a 0xRRGGBB literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a.max(0.0))
        }
    }
}

/// Linear gradient between two points
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    /// (offset 0-1, color), in ascending offset order
    pub stops: Vec<(f32, Color)>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    pub fn with_stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push((offset.clamp(0.0, 1.0), color));
        self
    }
}

/// How a shape is filled
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(LinearGradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::Gradient(gradient)
    }
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Font description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }

    /// CSS font shorthand
    pub fn to_css(&self) -> String {
        if self.bold {
            format!("bold {}px Arial", self.size)
        } else {
            format!("{}px Arial", self.size)
        }
    }
}

/// One path instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

/// A sequence of path instructions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Vec2) -> Self {
        self.cmds.push(PathCmd::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Vec2) -> Self {
        self.cmds.push(PathCmd::LineTo(p));
        self
    }

    pub fn quad_to(mut self, ctrl: Vec2, to: Vec2) -> Self {
        self.cmds.push(PathCmd::QuadTo { ctrl, to });
        self
    }

    pub fn close(mut self) -> Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

/// A 2D drawing surface in field coordinates
pub trait Canvas {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, paint: &Paint);

    /// Fill a full circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Stroke an arc from `start` to `end` radians (clockwise in screen space)
    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color, width: f32);

    /// Stroke a straight line
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// Fill a closed path
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Draw a single line of text with its baseline at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Color);
}
