//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame physics steps
//! - Seeded RNG only
//! - Stable iteration order (oldest entity first)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod decor;
pub mod difficulty;
pub mod menu;
pub mod obstacles;
pub mod puffer;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, check_collision, circle_obstacle_collision};
pub use decor::{Bubble, Plant, PlantSegment};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use menu::{MenuButton, button_at, menu_buttons};
pub use obstacles::{Obstacle, ObstacleField};
pub use puffer::Puffer;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TapOutcome, TickInput, handle_tap, tick};
