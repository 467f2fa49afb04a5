//! Per-frame simulation tick
//!
//! One call advances the game by exactly one rendered frame. Input queued
//! since the previous frame is applied first, then decorations, then (while
//! playing) the puffer and obstacles, then scoring and collision on the
//! updated positions.

use glam::Vec2;

use super::autopilot;
use super::collision::check_collision;
use super::decor::update_bubbles;
use super::menu::button_at;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::NOMINAL_FRAME_DT;

/// Input for a single frame
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Pointer activations since the previous frame, oldest first
    pub taps: Vec<Vec2>,
    /// Wall-clock seconds since the previous frame
    pub dt: f32,
    /// Monotonic wall-clock time in seconds
    pub time_secs: f64,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            taps: Vec::new(),
            dt: NOMINAL_FRAME_DT,
            time_secs: 0.0,
            idle_mode: false,
        }
    }
}

/// What a single tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Menu button pressed; a run started
    Started,
    /// Puffer jumped
    Jumped,
    /// Game over dismissed
    ReturnedToMenu,
    /// Tap landed on nothing interactive
    Ignored,
}

/// Apply one pointer activation to the current phase.
///
/// The phase is read once, so a single tap causes at most one transition:
/// the tap that dismisses a game over is never also a jump.
pub fn handle_tap(state: &mut GameState, pos: Vec2) -> TapOutcome {
    match state.phase {
        GamePhase::Menu => match button_at(pos) {
            Some(difficulty) => {
                state.start_game(difficulty);
                TapOutcome::Started
            }
            None => TapOutcome::Ignored,
        },
        GamePhase::Playing => {
            if state.game_over {
                return TapOutcome::Ignored;
            }
            state.puffer.apply_impulse();
            state.events.push(GameEvent::Jumped);
            log::debug!("Jump at y={:.1}", state.puffer.pos.y);
            TapOutcome::Jumped
        }
        GamePhase::GameOver => {
            state.return_to_menu();
            TapOutcome::ReturnedToMenu
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    for &tap in &input.taps {
        handle_tap(state, tap);
    }
    if input.idle_mode {
        if let Some(tap) = autopilot::choose_tap(state) {
            handle_tap(state, tap);
        }
    }

    state.frame += 1;
    state.time_secs = input.time_secs;

    // Decorations animate in every phase
    update_bubbles(&mut state.bubbles, &mut state.rng, state.max_bubbles);

    if state.phase != GamePhase::Playing || state.game_over {
        return;
    }

    state.puffer.tick_inflation_timer(input.dt);
    state.puffer.integrate();

    state.obstacles.maybe_spawn(&mut state.rng);
    let passed = state.obstacles.advance(state.puffer.pos.x);
    state.add_score(passed);

    let result = check_collision(
        state.puffer.pos,
        state.puffer.effective_radius(),
        state.obstacles.iter(),
    );
    if result.hit {
        state.end_game();
    }
}
