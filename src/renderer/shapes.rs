//! Path generation for the scene's 2D shapes

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::canvas::Path;
use crate::consts::{OBSTACLE_WIDTH, PLANT_SEGMENTS};

/// Height of the triangular coral tip at each gap edge
pub const CORAL_TIP_HEIGHT: f32 = 20.0;

/// Rounded rectangle outline
pub fn round_rect(pos: Vec2, size: Vec2, radius: f32) -> Path {
    let r = radius.min(size.x / 2.0).min(size.y / 2.0).max(0.0);
    let (x, y, w, h) = (pos.x, pos.y, size.x, size.y);
    Path::new()
        .move_to(Vec2::new(x + r, y))
        .line_to(Vec2::new(x + w - r, y))
        .quad_to(Vec2::new(x + w, y), Vec2::new(x + w, y + r))
        .line_to(Vec2::new(x + w, y + h - r))
        .quad_to(Vec2::new(x + w, y + h), Vec2::new(x + w - r, y + h))
        .line_to(Vec2::new(x + r, y + h))
        .quad_to(Vec2::new(x, y + h), Vec2::new(x, y + h - r))
        .line_to(Vec2::new(x, y + r))
        .quad_to(Vec2::new(x, y), Vec2::new(x + r, y))
        .close()
}

/// Tapered stalk through the given joints (root first): up the left side,
/// back down the right side
pub fn plant_outline(points: &[Vec2], widths: &[f32]) -> Path {
    if points.is_empty() {
        return Path::new();
    }
    let half_width = |i: usize| {
        let taper = 1.0 - i as f32 / PLANT_SEGMENTS as f32;
        widths.get(i).copied().unwrap_or(0.0) * taper / 2.0
    };

    let mut path = Path::new().move_to(points[0] - Vec2::new(half_width(0), 0.0));
    for (i, p) in points.iter().enumerate().skip(1) {
        path = path.line_to(*p - Vec2::new(half_width(i), 0.0));
    }
    for (i, p) in points.iter().enumerate().rev() {
        path = path.line_to(*p + Vec2::new(half_width(i), 0.0));
    }
    path.close()
}

/// Triangular coral tip at a gap edge; points into the gap
pub fn coral_tip(x: f32, edge_y: f32, pointing_down: bool) -> Path {
    let tip_y = if pointing_down {
        edge_y + CORAL_TIP_HEIGHT
    } else {
        edge_y - CORAL_TIP_HEIGHT
    };
    Path::new()
        .move_to(Vec2::new(x, edge_y))
        .line_to(Vec2::new(x + OBSTACLE_WIDTH / 2.0, tip_y))
        .line_to(Vec2::new(x + OBSTACLE_WIDTH, edge_y))
        .close()
}

/// Forked tail behind the body
pub fn puffer_tail(center: Vec2, radius: f32) -> Path {
    let root = Vec2::new(center.x - radius, center.y);
    Path::new()
        .move_to(root)
        .quad_to(root + Vec2::new(-20.0, -15.0), root + Vec2::new(-25.0, -5.0))
        .quad_to(root + Vec2::new(-20.0, 15.0), root)
        .close()
}

/// Belly fin under the body
pub fn puffer_fin(center: Vec2, radius: f32) -> Path {
    Path::new()
        .move_to(Vec2::new(center.x, center.y + radius * 0.5))
        .quad_to(
            Vec2::new(center.x - 5.0, center.y + radius + 10.0),
            Vec2::new(center.x + 10.0, center.y + radius * 0.5),
        )
        .close()
}

/// Spot centres on an inflated body
pub fn spot_centers(center: Vec2, radius: f32, count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            center + Vec2::new(angle.cos(), angle.sin()) * radius * 0.6
        })
        .collect()
}

/// Spike line segments around an inflated body, leaving the face side bare
pub fn spikes(center: Vec2, radius: f32, length: f32, count: usize) -> Vec<(Vec2, Vec2)> {
    (0..count)
        .filter_map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            // Eye and mouth sit around angle 0
            if angle > PI * 0.3 && angle < PI * 1.7 {
                let dir = Vec2::new(angle.cos(), angle.sin());
                Some((center + dir * radius, center + dir * (radius + length)))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::canvas::PathCmd;

    #[test]
    fn test_round_rect_is_closed() {
        let path = round_rect(Vec2::new(10.0, 20.0), Vec2::new(100.0, 40.0), 10.0);
        assert_eq!(path.cmds.first(), Some(&PathCmd::MoveTo(Vec2::new(20.0, 20.0))));
        assert_eq!(path.cmds.last(), Some(&PathCmd::Close));
        assert_eq!(path.cmds.len(), 10);
    }

    #[test]
    fn test_round_rect_radius_clamped() {
        let path = round_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), 50.0);
        assert_eq!(path.cmds[0], PathCmd::MoveTo(Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn test_plant_outline_visits_both_sides() {
        let points = vec![Vec2::new(0.0, 100.0), Vec2::new(0.0, 80.0), Vec2::new(0.0, 60.0)];
        let widths = vec![20.0, 20.0, 20.0];
        let path = plant_outline(&points, &widths);
        // move + 2 left + 3 right + close
        assert_eq!(path.cmds.len(), 7);
        assert_eq!(path.cmds[0], PathCmd::MoveTo(Vec2::new(-10.0, 100.0)));
        assert_eq!(path.cmds[5], PathCmd::LineTo(Vec2::new(10.0, 100.0)));
        assert!(plant_outline(&[], &[]).is_empty());
    }

    #[test]
    fn test_coral_tip_points_into_gap() {
        let top = coral_tip(100.0, 200.0, true);
        assert_eq!(top.cmds[1], PathCmd::LineTo(Vec2::new(125.0, 220.0)));
        let bottom = coral_tip(100.0, 400.0, false);
        assert_eq!(bottom.cmds[1], PathCmd::LineTo(Vec2::new(125.0, 380.0)));
    }

    #[test]
    fn test_spikes_skip_face() {
        let center = Vec2::new(100.0, 100.0);
        let spikes = spikes(center, 30.0, 4.0, 12);
        assert!(!spikes.is_empty() && spikes.len() < 12);
        for (start, end) in &spikes {
            assert!((start.distance(center) - 30.0).abs() < 1e-3);
            assert!((end.distance(center) - 34.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_spot_centers_on_ring() {
        let spots = spot_centers(Vec2::ZERO, 20.0, 8);
        assert_eq!(spots.len(), 8);
        for s in spots {
            assert!((s.length() - 12.0).abs() < 1e-3);
        }
    }
}
