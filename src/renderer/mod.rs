//! Rendering module
//!
//! The scene is drawn through the [`Canvas`] trait. The browser build
//! implements it on a 2D canvas context; native builds and tests record
//! commands in memory.

pub mod canvas;
pub mod recording;
pub mod scene;
pub mod shapes;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use canvas::{Canvas, Color, Font, LinearGradient, Paint, Path, PathCmd, TextAlign};
pub use recording::{DrawCmd, RecordingCanvas};
pub use scene::draw_frame;
