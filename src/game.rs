//! Frame loop host
//!
//! [`Game`] owns the session and everything the host feeds it between
//! frames: queued pointer taps, frame timing and FPS tracking. Each call to
//! [`Game::frame`] is one scheduler tick: queued input is applied, the
//! simulation advances one frame, and the scene is drawn.

use glam::Vec2;

use crate::consts::{MAX_FRAME_DT, NOMINAL_FRAME_DT};
use crate::renderer::{Canvas, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Frames in the FPS averaging window
const FPS_WINDOW: usize = 60;

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    /// Taps received since the last frame, oldest first
    pending_taps: Vec<Vec2>,
    /// Host timestamp (ms) of the previous frame
    last_time: Option<f64>,
    /// Idle/demo mode - the autopilot plays
    pub idle_mode: bool,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Game {
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut state = GameState::new(seed);
        state.max_bubbles = settings.max_bubbles;
        Self {
            state,
            settings,
            pending_taps: Vec::new(),
            last_time: None,
            idle_mode: false,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Queue a pointer activation in field coordinates; applied on the next frame
    pub fn push_tap(&mut self, x: f32, y: f32) {
        self.pending_taps.push(Vec2::new(x, y));
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Run one frame at host time `time_ms` and draw it.
    ///
    /// Returns the events the frame raised; the state's queue is left empty.
    pub fn frame<C: Canvas>(&mut self, time_ms: f64, canvas: &mut C) -> Vec<GameEvent> {
        let dt = match self.last_time {
            Some(last) => (((time_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => NOMINAL_FRAME_DT,
        };
        self.last_time = Some(time_ms);

        let input = TickInput {
            taps: std::mem::take(&mut self.pending_taps),
            dt,
            time_secs: time_ms / 1000.0,
            idle_mode: self.idle_mode,
        };
        tick(&mut self.state, &input);
        self.track_fps(time_ms);

        draw_frame(canvas, &self.state, &self.settings, Some(self.fps));

        let events = self.state.drain_events();
        for event in &events {
            log_event(event);
        }
        events
    }

    fn track_fps(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the one about to be overwritten
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW as f64 - 1.0) * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::GameStarted(difficulty) => log::info!("Run started on {}", difficulty.as_str()),
        GameEvent::Jumped => log::trace!("Jump"),
        GameEvent::ObstaclePassed { score } => log::debug!("Passed obstacle, score {}", score),
        GameEvent::Collided { score } => log::info!("Collision, final score {}", score),
        GameEvent::ReturnedToMenu => log::debug!("Back to menu"),
    }
}
