//! Scrolling coral obstacles
//!
//! Each obstacle is a top and bottom column sharing an x position, with a
//! vertical gap between them. Obstacles enter at the right edge, scroll left
//! at the difficulty's speed and are retired once fully off screen.

use rand::Rng;

use super::difficulty::DifficultyProfile;
use crate::consts::*;

/// A pair of coral columns with a gap
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Bottom of the top column
    pub gap_top: f32,
    /// Top of the bottom column (always `gap_top + gap_size`)
    pub gap_bottom: f32,
    /// Set once the puffer has cleared this obstacle; never unset
    pub passed: bool,
}

impl Obstacle {
    /// Build an obstacle at the right edge with a random gap that keeps
    /// `OBSTACLE_EDGE_MARGIN` clear of both field edges
    pub fn spawn<R: Rng>(rng: &mut R, gap_size: f32) -> Self {
        let range = (FIELD_HEIGHT - gap_size - 2.0 * OBSTACLE_EDGE_MARGIN).max(0.0);
        // Quarter-pixel grid keeps gap_bottom - gap_top exact in f32
        let gap_top = OBSTACLE_EDGE_MARGIN + (rng.random::<f32>() * range * 4.0).floor() / 4.0;
        Self {
            x: FIELD_WIDTH,
            gap_top,
            gap_bottom: gap_top + gap_size,
            passed: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Fully scrolled past the left edge of the field
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.x <= -OBSTACLE_WIDTH
    }
}

/// The set of live obstacles, oldest first
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    /// Per-frame scroll
    pub speed: f32,
    pub gap_size: f32,
    pub spawn_interval: f32,
}

impl ObstacleField {
    pub fn new(profile: &DifficultyProfile) -> Self {
        let mut field = Self::default();
        field.apply_profile(profile);
        field
    }

    pub fn apply_profile(&mut self, profile: &DifficultyProfile) {
        self.speed = profile.obstacle_speed;
        self.gap_size = profile.gap_size;
        self.spawn_interval = profile.spawn_interval;
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Spawn at the right edge when the field is empty or the newest obstacle
    /// has moved at least `spawn_interval` away from it. Returns true on spawn.
    pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R) -> bool {
        let due = match self.obstacles.last() {
            None => true,
            Some(newest) => FIELD_WIDTH - newest.x >= self.spawn_interval,
        };
        if due {
            let obstacle = Obstacle::spawn(rng, self.gap_size);
            log::debug!(
                "Spawned obstacle gap {:.1}..{:.1}",
                obstacle.gap_top,
                obstacle.gap_bottom
            );
            self.obstacles.push(obstacle);
        }
        due
    }

    /// Scroll every obstacle, mark the ones the puffer has cleared and drop
    /// the ones that left the screen.
    ///
    /// Passing is judged on the post-scroll position. Returns how many
    /// obstacles were passed this frame.
    pub fn advance(&mut self, puffer_x: f32) -> u32 {
        let mut newly_passed = 0;
        for obstacle in &mut self.obstacles {
            obstacle.x -= self.speed;
            if !obstacle.passed && obstacle.right() < puffer_x {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        let retired = before - self.obstacles.len();
        if retired > 0 {
            log::debug!("Retired {} obstacle(s)", retired);
        }

        newly_passed
    }
}
