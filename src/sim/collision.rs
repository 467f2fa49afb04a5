//! Collision detection between the puffer and the coral
//!
//! The puffer is a circle; each obstacle is two axis-aligned columns. The
//! test is the cheap extent check the game has always used: if the circle's
//! horizontal extent overlaps the column pair and its vertical extent pokes
//! outside the gap, it is a hit. Corners are not rounded off.

use glam::Vec2;

use super::obstacles::Obstacle;
use crate::consts::OBSTACLE_WIDTH;

/// Result of a collision check against the whole field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether any obstacle was hit
    pub hit: bool,
    /// Index of the first obstacle hit (oldest first)
    pub obstacle: Option<usize>,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            obstacle: None,
        }
    }
}

/// Check a circle against a single obstacle
pub fn circle_obstacle_collision(center: Vec2, radius: f32, obstacle: &Obstacle) -> bool {
    let overlaps_x = center.x + radius > obstacle.x && center.x - radius < obstacle.x + OBSTACLE_WIDTH;
    if !overlaps_x {
        return false;
    }
    center.y - radius < obstacle.gap_top || center.y + radius > obstacle.gap_bottom
}

/// Check a circle against every obstacle; the first hit wins
pub fn check_collision<'a>(
    center: Vec2,
    radius: f32,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
) -> CollisionResult {
    obstacles
        .into_iter()
        .position(|o| circle_obstacle_collision(center, radius, o))
        .map(|i| CollisionResult {
            hit: true,
            obstacle: Some(i),
        })
        .unwrap_or_else(CollisionResult::miss)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(x: f32, gap_top: f32, gap_bottom: f32) -> Obstacle {
        Obstacle {
            x,
            gap_top,
            gap_bottom,
            passed: false,
        }
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let o = obstacle(40.0, 100.0, 250.0);
        assert!(!circle_obstacle_collision(Vec2::new(50.0, 200.0), 20.0, &o));
    }

    #[test]
    fn test_above_gap_hits() {
        let o = obstacle(40.0, 100.0, 250.0);
        assert!(circle_obstacle_collision(Vec2::new(50.0, 90.0), 20.0, &o));
    }

    #[test]
    fn test_below_gap_hits() {
        let o = obstacle(40.0, 100.0, 250.0);
        assert!(circle_obstacle_collision(Vec2::new(50.0, 240.0), 20.0, &o));
    }

    #[test]
    fn test_touching_edges_is_not_a_hit() {
        // Circle top exactly on gap_top, bottom exactly on gap_bottom
        let o = obstacle(40.0, 100.0, 140.0);
        assert!(!circle_obstacle_collision(Vec2::new(50.0, 120.0), 20.0, &o));

        // Circle right edge exactly on obstacle left edge
        let o = obstacle(70.0, 300.0, 400.0);
        assert!(!circle_obstacle_collision(Vec2::new(50.0, 100.0), 20.0, &o));
    }

    #[test]
    fn test_no_horizontal_overlap_is_safe() {
        // Far outside the gap vertically, but not over the columns
        let o = obstacle(200.0, 300.0, 400.0);
        assert!(!circle_obstacle_collision(Vec2::new(50.0, 10.0), 20.0, &o));

        // Already behind the puffer
        let o = obstacle(-40.0, 300.0, 400.0);
        assert!(!circle_obstacle_collision(Vec2::new(50.0, 10.0), 20.0, &o));
    }

    #[test]
    fn test_inflated_radius_matters() {
        let o = obstacle(40.0, 100.0, 250.0);
        let center = Vec2::new(50.0, 125.0);
        assert!(!circle_obstacle_collision(center, 20.0, &o));
        assert!(circle_obstacle_collision(center, 30.0, &o));
    }

    #[test]
    fn test_check_collision_reports_first_hit() {
        let obstacles = vec![
            obstacle(300.0, 100.0, 250.0),
            obstacle(40.0, 100.0, 250.0),
            obstacle(45.0, 100.0, 250.0),
        ];
        let result = check_collision(Vec2::new(50.0, 90.0), 20.0, &obstacles);
        assert!(result.hit);
        assert_eq!(result.obstacle, Some(1));

        let result = check_collision(Vec2::new(50.0, 200.0), 20.0, &obstacles);
        assert_eq!(result, CollisionResult::miss());
    }
}
