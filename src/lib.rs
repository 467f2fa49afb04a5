//! Puffer Reef - a one-button reef arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, decorations, game state)
//! - `renderer`: Drawing interface and per-phase scene composition
//! - `game`: Frame loop host tying input, simulation and drawing together
//! - `settings`: Player preferences

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// All distances are logical pixels in the field's coordinate space
/// (origin top-left, y grows downward). Per-frame quantities are applied
/// once per rendered frame, not scaled by elapsed time.
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Puffer defaults
    pub const PUFFER_X: f32 = 50.0;
    pub const PUFFER_RADIUS: f32 = 20.0;
    /// Gravity and jump before a difficulty has been chosen
    pub const PUFFER_DEFAULT_GRAVITY: f32 = 0.3;
    pub const PUFFER_DEFAULT_JUMP: f32 = -6.0;
    pub const MAX_INFLATE_SCALE: f32 = 1.5;
    /// Scale gained per frame while inflated
    pub const INFLATE_STEP: f32 = 0.2;
    /// Scale lost per frame while deflating
    pub const DEFLATE_STEP: f32 = 0.05;
    /// How long a tap keeps the puffer inflated (seconds of wall-clock time)
    pub const INFLATE_PULSE_SECS: f32 = 0.2;

    /// Obstacles
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    /// Minimum distance between a gap and the top/bottom field edge
    pub const OBSTACLE_EDGE_MARGIN: f32 = 60.0;

    /// Plants
    pub const PLANT_COUNT: usize = 8;
    pub const PLANT_SEGMENTS: usize = 5;
    /// Sway of the free tip; lower segments sway proportionally less
    pub const PLANT_SWAY_AMPLITUDE: f32 = 15.0;

    /// Bubbles
    pub const BUBBLE_SPAWN_CHANCE: f64 = 0.05;
    pub const DEFAULT_MAX_BUBBLES: usize = 128;
    /// Bubbles are retired once they rise above this y
    pub const BUBBLE_TOP_LIMIT: f32 = -10.0;

    /// Longest frame delta the host will report (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Frame delta assumed for the first frame
    pub const NOMINAL_FRAME_DT: f32 = 1.0 / 60.0;
}
