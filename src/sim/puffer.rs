//! The player-controlled pufferfish
//!
//! Vertical physics use fixed per-frame increments: gravity is added to the
//! velocity once per frame and the velocity to the position once per frame.
//! Only the inflation pulse is measured in wall-clock seconds.

use glam::Vec2;

use super::difficulty::DifficultyProfile;
use crate::consts::*;

/// The player entity
#[derive(Debug, Clone, PartialEq)]
pub struct Puffer {
    /// Centre position (x never changes)
    pub pos: Vec2,
    /// Base (deflated) radius
    pub radius: f32,
    /// Vertical velocity in px/frame (negative = upward)
    pub velocity: f32,
    /// Per-frame velocity increment
    pub gravity: f32,
    /// Velocity set by a tap
    pub jump_impulse: f32,
    /// Current inflation, kept within [1.0, MAX_INFLATE_SCALE]
    pub inflate_scale: f32,
    /// True while the inflation pulse is active
    pub inflated: bool,
    /// Seconds left before the pulse ends; zero when no pulse is pending
    pub inflate_timer: f32,
}

impl Default for Puffer {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PUFFER_X, FIELD_HEIGHT / 2.0),
            radius: PUFFER_RADIUS,
            velocity: 0.0,
            gravity: PUFFER_DEFAULT_GRAVITY,
            jump_impulse: PUFFER_DEFAULT_JUMP,
            inflate_scale: 1.0,
            inflated: false,
            inflate_timer: 0.0,
        }
    }
}

impl Puffer {
    /// Radius used for drawing and collision
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        self.radius * self.inflate_scale
    }

    /// Copy the difficulty's physics into the puffer
    pub fn apply_profile(&mut self, profile: &DifficultyProfile) {
        self.gravity = profile.gravity;
        self.jump_impulse = profile.jump_impulse;
    }

    /// Put the puffer back at the vertical centre, at rest and deflated.
    ///
    /// Clearing the timer here drops any pending deflate, so a pulse started
    /// in one session can never reach into the next.
    pub fn reset(&mut self) {
        self.pos = Vec2::new(PUFFER_X, FIELD_HEIGHT / 2.0);
        self.velocity = 0.0;
        self.inflate_scale = 1.0;
        self.inflated = false;
        self.inflate_timer = 0.0;
    }

    /// Kick upward and start (or restart) the inflation pulse
    pub fn apply_impulse(&mut self) {
        self.velocity = self.jump_impulse;
        self.inflated = true;
        self.inflate_timer = INFLATE_PULSE_SECS;
    }

    /// Count down the inflation pulse by the wall-clock time of this frame
    pub fn tick_inflation_timer(&mut self, dt: f32) {
        if self.inflate_timer <= 0.0 {
            return;
        }
        self.inflate_timer -= dt;
        if self.inflate_timer <= 0.0 {
            self.inflate_timer = 0.0;
            self.inflated = false;
        }
    }

    /// Advance one frame of physics and inflation, then keep the circle on screen
    pub fn integrate(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;

        if self.inflated {
            if self.inflate_scale < MAX_INFLATE_SCALE {
                self.inflate_scale += INFLATE_STEP;
            }
        } else if self.inflate_scale > 1.0 {
            self.inflate_scale -= DEFLATE_STEP;
        }
        self.inflate_scale = self.inflate_scale.clamp(1.0, MAX_INFLATE_SCALE);

        let r = self.effective_radius();
        if self.pos.y + r > FIELD_HEIGHT {
            self.pos.y = FIELD_HEIGHT - r;
            self.velocity = 0.0;
        }
        if self.pos.y - r < 0.0 {
            self.pos.y = r;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Difficulty;

    #[test]
    fn test_gravity_is_per_frame() {
        let mut puffer = Puffer::default();
        puffer.apply_profile(&Difficulty::Normal.profile());
        let y0 = puffer.pos.y;

        puffer.integrate();
        assert!((puffer.velocity - 0.25).abs() < 1e-6);
        assert!((puffer.pos.y - (y0 + 0.25)).abs() < 1e-4);

        puffer.integrate();
        assert!((puffer.velocity - 0.5).abs() < 1e-6);
        assert!((puffer.pos.y - (y0 + 0.75)).abs() < 1e-4);
    }

    #[test]
    fn test_impulse_sets_velocity_and_inflates() {
        let mut puffer = Puffer::default();
        puffer.apply_profile(&Difficulty::Hard.profile());
        puffer.velocity = 3.0;

        puffer.apply_impulse();
        assert_eq!(puffer.velocity, -6.0);
        assert!(puffer.inflated);

        // Scale climbs to the cap within a few frames
        for _ in 0..5 {
            puffer.integrate();
        }
        assert_eq!(puffer.inflate_scale, MAX_INFLATE_SCALE);
    }

    #[test]
    fn test_pulse_ends_after_wall_clock_duration() {
        let mut puffer = Puffer::default();
        puffer.apply_impulse();

        // 0.15s at 60 fps: still inflated
        for _ in 0..9 {
            puffer.tick_inflation_timer(1.0 / 60.0);
        }
        assert!(puffer.inflated);

        // Crossing 0.2s clears the flag regardless of frame rate
        puffer.tick_inflation_timer(0.06);
        assert!(!puffer.inflated);
        assert_eq!(puffer.inflate_timer, 0.0);
    }

    #[test]
    fn test_pulse_independent_of_frame_rate() {
        let mut slow = Puffer::default();
        let mut fast = Puffer::default();
        slow.apply_impulse();
        fast.apply_impulse();

        // 0.25s elapsed either way
        for _ in 0..5 {
            slow.tick_inflation_timer(0.05);
        }
        for _ in 0..30 {
            fast.tick_inflation_timer(0.25 / 30.0);
        }
        assert!(!slow.inflated);
        assert!(!fast.inflated);
    }

    #[test]
    fn test_deflates_slowly_to_one() {
        let mut puffer = Puffer::default();
        puffer.inflate_scale = MAX_INFLATE_SCALE;
        puffer.velocity = 0.0;
        puffer.gravity = 0.0;

        puffer.integrate();
        assert!((puffer.inflate_scale - (MAX_INFLATE_SCALE - DEFLATE_STEP)).abs() < 1e-6);

        for _ in 0..20 {
            puffer.integrate();
        }
        assert_eq!(puffer.inflate_scale, 1.0);
    }

    #[test]
    fn test_floor_clamp_zeroes_velocity() {
        let mut puffer = Puffer::default();
        puffer.pos.y = FIELD_HEIGHT - PUFFER_RADIUS - 1.0;
        puffer.velocity = 10.0;

        puffer.integrate();
        assert_eq!(puffer.pos.y, FIELD_HEIGHT - PUFFER_RADIUS);
        assert_eq!(puffer.velocity, 0.0);
    }

    #[test]
    fn test_ceiling_clamp_uses_inflated_radius() {
        let mut puffer = Puffer::default();
        puffer.gravity = 0.0;
        puffer.inflated = true;
        puffer.inflate_scale = MAX_INFLATE_SCALE;
        puffer.pos.y = 5.0;
        puffer.velocity = -4.0;

        puffer.integrate();
        assert_eq!(puffer.pos.y, PUFFER_RADIUS * MAX_INFLATE_SCALE);
        assert_eq!(puffer.velocity, 0.0);
    }

    #[test]
    fn test_reset_cancels_pending_pulse() {
        let mut puffer = Puffer::default();
        puffer.apply_impulse();
        puffer.integrate();
        puffer.reset();

        assert!(!puffer.inflated);
        assert_eq!(puffer.inflate_timer, 0.0);
        assert_eq!(puffer.inflate_scale, 1.0);
        assert_eq!(puffer.pos, Vec2::new(PUFFER_X, FIELD_HEIGHT / 2.0));

        // The old pulse cannot fire later
        puffer.inflated = true;
        puffer.tick_inflation_timer(1.0);
        assert!(puffer.inflated);
    }
}
