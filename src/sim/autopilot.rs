//! Idle/demo mode controller
//!
//! Produces the tap a player would make this frame, if any. It restarts the
//! last difficulty from the menu (Normal before any run), dismisses the game-over screen, and while
//! playing taps whenever the puffer is falling below its aim point in the
//! next gap.

use glam::Vec2;

use super::difficulty::Difficulty;
use super::menu::menu_buttons;
use super::state::{GamePhase, GameState};
use crate::consts::FIELD_HEIGHT;

/// Aim point within a gap, as a fraction of the gap from the top. Biased low
/// because a jump overshoots upward much faster than gravity pulls down.
const AIM_FRACTION: f32 = 0.6;

/// Frames to wait on the game-over screen before dismissing it
const GAME_OVER_PAUSE_FRAMES: u64 = 90;

/// Where the puffer should hover this frame
pub fn target_y(state: &GameState) -> f32 {
    let puffer = &state.puffer;
    let margin = puffer.effective_radius();
    state
        .obstacles
        .iter()
        .find(|o| o.right() + margin > puffer.pos.x)
        .map(|o| o.gap_top + (o.gap_bottom - o.gap_top) * AIM_FRACTION)
        .unwrap_or(FIELD_HEIGHT / 2.0)
}

/// The tap to make this frame, if any
pub fn choose_tap(state: &GameState) -> Option<Vec2> {
    match state.phase {
        GamePhase::Menu => {
            let difficulty = state.difficulty.unwrap_or(Difficulty::Normal);
            menu_buttons()
                .into_iter()
                .find(|b| b.difficulty == difficulty)
                .map(|b| b.center)
        }
        GamePhase::Playing => {
            let puffer = &state.puffer;
            let falling = puffer.velocity > 0.0;
            (falling && puffer.pos.y > target_y(state)).then_some(puffer.pos)
        }
        GamePhase::GameOver => {
            // Linger so the final score is visible
            let shown = state.frame.saturating_sub(state.game_over_frame);
            (shown >= GAME_OVER_PAUSE_FRAMES).then_some(Vec2::ZERO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameEvent;
    use crate::sim::obstacles::Obstacle;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_menu_picks_normal() {
        let state = GameState::new(1);
        let tap = choose_tap(&state);
        assert_eq!(tap, Some(menu_buttons()[1].center));
    }

    #[test]
    fn test_taps_only_when_falling_below_target() {
        let mut state = GameState::new(2);
        state.start_game(Difficulty::Normal);
        state.obstacles.obstacles.push(Obstacle {
            x: 150.0,
            gap_top: 200.0,
            gap_bottom: 370.0,
            passed: false,
        });
        let aim = target_y(&state);
        assert!((aim - 302.0).abs() < 1e-3);

        state.puffer.pos.y = aim + 10.0;
        state.puffer.velocity = 1.0;
        assert!(choose_tap(&state).is_some());

        // Rising: let it coast
        state.puffer.velocity = -1.0;
        assert!(choose_tap(&state).is_none());

        // Above the aim point: let it sink
        state.puffer.pos.y = aim - 10.0;
        state.puffer.velocity = 1.0;
        assert!(choose_tap(&state).is_none());
    }

    #[test]
    fn test_ignores_obstacles_behind() {
        let mut state = GameState::new(3);
        state.start_game(Difficulty::Normal);
        state.obstacles.obstacles.push(Obstacle {
            x: -45.0,
            gap_top: 60.0,
            gap_bottom: 230.0,
            passed: true,
        });
        assert_eq!(target_y(&state), FIELD_HEIGHT / 2.0);
    }

    #[test]
    fn test_idle_mode_starts_a_run() {
        let mut state = GameState::new(2024);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut started = false;
        for _ in 0..600 {
            tick(&mut state, &input);
            started |= state.phase == GamePhase::Playing;
        }
        assert!(started);
        assert_eq!(state.frame, 600);
    }

    #[test]
    fn test_menu_repeats_last_difficulty() {
        let mut state = GameState::new(4);
        state.start_game(Difficulty::Hard);
        state.end_game();
        state.return_to_menu();
        assert_eq!(choose_tap(&state), Some(menu_buttons()[2].center));
    }

    #[test]
    fn test_idle_mode_keeps_chosen_difficulty() {
        let mut state = GameState::new(5);
        state.start_game(Difficulty::Hard);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        let mut starts = Vec::new();
        for _ in 0..5_000 {
            tick(&mut state, &input);
            for event in &state.events {
                if let GameEvent::GameStarted(d) = event {
                    starts.push(*d);
                }
            }
            // Crash every few seconds so runs keep restarting
            if state.phase == GamePhase::Playing && state.frame % 400 == 0 {
                state.end_game();
            }
        }
        assert!(!starts.is_empty());
        assert!(starts.iter().all(|d| *d == Difficulty::Hard));
    }

    #[test]
    fn test_game_over_lingers_full_pause() {
        let mut state = GameState::new(6);
        state.start_game(Difficulty::Normal);
        state.frame = 1_234;
        state.end_game();

        for shown in 0..GAME_OVER_PAUSE_FRAMES {
            state.frame = 1_234 + shown;
            assert!(choose_tap(&state).is_none());
        }
        state.frame = 1_234 + GAME_OVER_PAUSE_FRAMES;
        assert!(choose_tap(&state).is_some());
    }

    #[test]
    fn test_idle_game_over_screen_stays_up() {
        let mut state = GameState::new(7);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut ended_at = None;
        let mut pauses = Vec::new();
        for _ in 0..5_000 {
            tick(&mut state, &input);
            if state.events.iter().any(|e| matches!(e, GameEvent::Collided { .. })) {
                ended_at = Some(state.frame);
            }
            if state.phase == GamePhase::Playing && state.frame % 400 == 0 {
                state.end_game();
                ended_at = Some(state.frame);
            }
            if state.events.contains(&GameEvent::ReturnedToMenu) {
                if let Some(end) = ended_at.take() {
                    pauses.push(state.frame - end);
                }
            }
        }
        assert!(!pauses.is_empty());
        assert!(pauses.iter().all(|p| *p >= GAME_OVER_PAUSE_FRAMES));
    }
}
