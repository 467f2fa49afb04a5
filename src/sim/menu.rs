//! Menu layout and hit testing
//!
//! The layout lives in the simulation so taps can be resolved without a
//! renderer; the scene draws the same rectangles.

use glam::Vec2;

use super::difficulty::Difficulty;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Centre-to-centre distance between neighbouring buttons
pub const BUTTON_SPACING: f32 = 120.0;

/// A difficulty button on the menu screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuButton {
    pub difficulty: Difficulty,
    pub center: Vec2,
    pub size: Vec2,
}

impl MenuButton {
    /// Top-left corner
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    /// Strictly inside: a tap on the border does not count
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size / 2.0;
        point.x > self.center.x - half.x
            && point.x < self.center.x + half.x
            && point.y > self.center.y - half.y
            && point.y < self.center.y + half.y
    }
}

/// The three difficulty buttons, left to right, centred on the field
pub fn menu_buttons() -> [MenuButton; 3] {
    std::array::from_fn(|i| MenuButton {
        difficulty: Difficulty::ALL[i],
        center: Vec2::new(
            FIELD_WIDTH / 2.0 + (i as f32 - 1.0) * BUTTON_SPACING,
            FIELD_HEIGHT / 2.0,
        ),
        size: Vec2::new(BUTTON_WIDTH, BUTTON_HEIGHT),
    })
}

/// Difficulty under the given point, if any
pub fn button_at(point: Vec2) -> Option<Difficulty> {
    menu_buttons()
        .into_iter()
        .find(|b| b.contains(point))
        .map(|b| b.difficulty)
}
