//! Game state and session lifecycle
//!
//! Everything a frame mutates lives in [`GameState`]: the puffer, the
//! obstacle field, decorations, score and phase. Resets go through here so
//! nothing from an old session leaks into a new one.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::decor::{Bubble, Plant, seed_plants};
use super::difficulty::{Difficulty, DifficultyProfile};
use super::obstacles::ObstacleField;
use super::puffer::Puffer;
use crate::consts::DEFAULT_MAX_BUBBLES;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Difficulty selection screen
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; waiting for a tap to return to the menu
    GameOver,
}

/// Things that happened during a tick, for the host to log or react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A difficulty was picked and a run began
    GameStarted(Difficulty),
    /// The puffer was tapped upward
    Jumped,
    /// An obstacle was cleared; carries the new score
    ObstaclePassed { score: u32 },
    /// The puffer hit coral; carries the final score
    Collided { score: u32 },
    /// Back on the menu after a game over
    ReturnedToMenu,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Source of all randomness: gaps, plants, bubbles
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Chosen on the menu; `None` until the first run starts
    pub difficulty: Option<Difficulty>,
    /// Obstacles passed in the current run
    pub score: u32,
    /// Highest score since the process started (not persisted)
    pub best_score: u32,
    /// Latched by the first collision of a run
    pub game_over: bool,
    /// Frame on which the latest run ended
    pub game_over_frame: u64,
    pub puffer: Puffer,
    pub obstacles: ObstacleField,
    pub plants: Vec<Plant>,
    pub bubbles: Vec<Bubble>,
    /// Upper bound on live bubbles
    pub max_bubbles: usize,
    /// Wall-clock seconds of the latest frame (drives plant sway)
    pub time_secs: f64,
    /// Frames simulated since creation
    pub frame: u64,
    /// Events raised during the latest tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session on the menu screen with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let plants = seed_plants(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Menu,
            difficulty: None,
            score: 0,
            best_score: 0,
            game_over: false,
            game_over_frame: 0,
            puffer: Puffer::default(),
            obstacles: ObstacleField::new(&Difficulty::Normal.profile()),
            plants,
            bubbles: Vec::new(),
            max_bubbles: DEFAULT_MAX_BUBBLES,
            time_secs: 0.0,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Profile of the selected difficulty
    pub fn profile(&self) -> Option<DifficultyProfile> {
        self.difficulty.map(|d| d.profile())
    }

    /// Menu -> Playing: apply the difficulty and start a fresh run
    pub fn start_game(&mut self, difficulty: Difficulty) {
        let profile = difficulty.profile();
        self.difficulty = Some(difficulty);
        self.puffer.apply_profile(&profile);
        self.obstacles.apply_profile(&profile);
        self.reset_run();
        self.plants = seed_plants(&mut self.rng);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::GameStarted(difficulty));
        log::info!("Started {} game (seed {})", profile.name, self.seed);
    }

    /// Playing -> GameOver. Only the first call of a run has any effect.
    pub fn end_game(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.game_over_frame = self.frame;
        self.phase = GamePhase::GameOver;
        self.best_score = self.best_score.max(self.score);
        self.events.push(GameEvent::Collided { score: self.score });
        log::info!("Game over with score {} (best {})", self.score, self.best_score);
    }

    /// GameOver -> Menu: clear the run; the difficulty stays remembered but
    /// is picked again from the menu
    pub fn return_to_menu(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Menu;
        self.events.push(GameEvent::ReturnedToMenu);
        log::info!("Returned to menu");
    }

    /// Credit passed obstacles
    pub fn add_score(&mut self, passed: u32) {
        for _ in 0..passed {
            self.score += 1;
            self.events.push(GameEvent::ObstaclePassed { score: self.score });
        }
    }

    fn reset_run(&mut self) {
        self.puffer.reset();
        self.obstacles.clear();
        self.score = 0;
        self.game_over = false;
    }

    /// Take the events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::obstacles::Obstacle;

    #[test]
    fn test_new_state_on_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.difficulty, None);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.plants.len(), PLANT_COUNT);
    }

    #[test]
    fn test_start_game_applies_profile() {
        let mut state = GameState::new(2);
        state.start_game(Difficulty::Easy);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, Some(Difficulty::Easy));
        assert_eq!(state.puffer.gravity, 0.15);
        assert_eq!(state.puffer.jump_impulse, -4.0);
        assert_eq!(state.obstacles.speed, 1.2);
        assert_eq!(state.obstacles.gap_size, 200.0);
        assert_eq!(state.obstacles.spawn_interval, 280.0);
        assert_eq!(state.drain_events(), vec![GameEvent::GameStarted(Difficulty::Easy)]);
    }

    #[test]
    fn test_start_game_reseeds_plants() {
        let mut state = GameState::new(3);
        let before = state.plants.clone();
        state.start_game(Difficulty::Normal);
        assert_eq!(state.plants.len(), PLANT_COUNT);
        assert_ne!(state.plants, before);
    }

    #[test]
    fn test_end_game_is_idempotent() {
        let mut state = GameState::new(4);
        state.start_game(Difficulty::Hard);
        state.score = 7;
        state.drain_events();

        state.end_game();
        state.end_game();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_score, 7);
        assert_eq!(state.drain_events(), vec![GameEvent::Collided { score: 7 }]);
    }

    #[test]
    fn test_return_to_menu_resets_run() {
        let mut state = GameState::new(5);
        state.start_game(Difficulty::Normal);
        state.score = 3;
        state.puffer.pos.y = 42.0;
        state.puffer.velocity = 5.0;
        state.puffer.apply_impulse();
        state.obstacles.obstacles.push(Obstacle {
            x: 100.0,
            gap_top: 100.0,
            gap_bottom: 270.0,
            passed: false,
        });
        state.end_game();

        state.return_to_menu();
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.puffer.pos.y, FIELD_HEIGHT / 2.0);
        assert_eq!(state.puffer.velocity, 0.0);
        assert!(!state.puffer.inflated);
        assert_eq!(state.best_score, 3);
    }

    #[test]
    fn test_add_score_emits_per_obstacle() {
        let mut state = GameState::new(6);
        state.add_score(2);
        assert_eq!(state.score, 2);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::ObstaclePassed { score: 1 },
                GameEvent::ObstaclePassed { score: 2 }
            ]
        );
        assert!(state.events.is_empty());
    }
}
