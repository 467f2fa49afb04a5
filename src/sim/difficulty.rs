//! Difficulty profiles
//!
//! A profile bundles every tunable that changes between difficulties. It is
//! selected once from the menu and copied into the puffer and obstacle field.

use serde::{Deserialize, Serialize};

/// Selectable difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// All difficulties in menu order (left to right)
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Some(Difficulty::Easy),
            "normal" | "n" | "medium" => Some(Difficulty::Normal),
            "hard" | "h" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                gravity: 0.15,
                jump_impulse: -4.0,
                obstacle_speed: 1.2,
                gap_size: 200.0,
                spawn_interval: 280.0,
                name: "Easy",
            },
            Difficulty::Normal => DifficultyProfile {
                gravity: 0.25,
                jump_impulse: -5.0,
                obstacle_speed: 1.6,
                gap_size: 170.0,
                spawn_interval: 240.0,
                name: "Normal",
            },
            Difficulty::Hard => DifficultyProfile {
                gravity: 0.35,
                jump_impulse: -6.0,
                obstacle_speed: 2.0,
                gap_size: 150.0,
                spawn_interval: 200.0,
                name: "Hard",
            },
        }
    }
}

/// Tunables for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyProfile {
    /// Velocity added every frame (px/frame²)
    pub gravity: f32,
    /// Velocity set by a tap (negative = upward)
    pub jump_impulse: f32,
    /// Obstacle scroll per frame (px)
    pub obstacle_speed: f32,
    /// Vertical opening between the top and bottom coral
    pub gap_size: f32,
    /// Distance the newest obstacle must travel from the right edge before the next spawns
    pub spawn_interval: f32,
    /// Display name
    pub name: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harder_is_faster_and_tighter() {
        let easy = Difficulty::Easy.profile();
        let normal = Difficulty::Normal.profile();
        let hard = Difficulty::Hard.profile();

        assert!(easy.gravity < normal.gravity && normal.gravity < hard.gravity);
        assert!(easy.obstacle_speed < hard.obstacle_speed);
        assert!(easy.gap_size > normal.gap_size && normal.gap_size > hard.gap_size);
        assert!(easy.spawn_interval > hard.spawn_interval);
        // Jumps are always upward
        for d in Difficulty::ALL {
            assert!(d.profile().jump_impulse < 0.0);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("NORMAL"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("e"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
    }
}
