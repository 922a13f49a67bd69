//! Game state and core simulation types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::centered_paddle_x;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Drops are falling and the bucket moves
    Playing,
    /// A drop was missed; waiting for the retry control
    GameOver,
}

/// The player's bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(centered_paddle_x(), PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

impl Paddle {
    /// Center the bucket on a pointer x coordinate
    pub fn follow_pointer(&mut self, pointer_x: f32) {
        self.rect.x = pointer_x - self.rect.width / 2.0;
    }

    /// Move by `direction * PADDLE_SPEED * dt` (direction is -1, 0 or 1)
    pub fn nudge(&mut self, direction: f32, dt: f32) {
        self.rect.x += direction * PADDLE_SPEED * dt;
    }

    /// Keep the bucket inside the field
    pub fn clamp(&mut self) {
        self.rect.clamp_x(FIELD_WIDTH);
    }

    /// Back to the center of the field
    pub fn recenter(&mut self) {
        self.rect.x = centered_paddle_x();
        self.rect.y = PADDLE_Y;
    }
}

/// A falling raindrop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Raindrop {
    pub id: u32,
    pub rect: Rect,
}

impl Raindrop {
    pub fn new(id: u32, x: f32) -> Self {
        Self {
            id,
            rect: Rect::new(x, FIELD_HEIGHT, DROP_WIDTH, DROP_HEIGHT),
        }
    }

    /// Fall for `dt` seconds
    pub fn fall(&mut self, dt: f32) {
        self.rect.y -= DROP_FALL_SPEED * dt;
    }
}

/// Something that happened during a tick, drained by the screen for side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new raindrop entered the field
    Spawned { id: u32 },
    /// A raindrop landed in the bucket
    Caught { id: u32 },
    /// A raindrop left through the bottom edge
    Missed { id: u32 },
    /// Playing -> GameOver
    GameOver { score: u32 },
    /// GameOver -> Playing
    Restarted,
}

/// Complete game state (deterministic given seed, inputs and timestamps)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Drops caught this run
    pub score: u32,
    /// Player bucket
    pub paddle: Paddle,
    /// Live raindrops
    pub drops: Vec<Raindrop>,
    /// Timestamp (ns) of the most recent spawn
    pub last_spawn_ns: u64,
    /// Text shown on the game-over screen, formatted on transition
    pub game_over_text: String,
    /// Events recorded since the last drain
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed, starting at `now_ns`
    pub fn new(seed: u64, now_ns: u64) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            paddle: Paddle::default(),
            drops: Vec::new(),
            last_spawn_ns: now_ns,
            game_over_text: String::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.reset(now_ns);
        state
    }

    /// Start a fresh run: centered bucket, zero score, a single drop
    pub fn reset(&mut self, now_ns: u64) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.paddle.recenter();
        self.drops.clear();
        self.game_over_text.clear();
        self.spawn_drop(now_ns);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Spawn a drop at a random column along the top edge
    pub fn spawn_drop(&mut self, now_ns: u64) {
        let max_x = (FIELD_WIDTH - DROP_WIDTH) as u32;
        let x = self.rng.random_range(0..=max_x) as f32;
        let id = self.next_entity_id();
        self.drops.push(Raindrop::new(id, x));
        self.last_spawn_ns = now_ns;
        self.events.push(GameEvent::Spawned { id });
        log::debug!("Spawned drop {} at x={}", id, x);
    }

    /// Whether enough time has passed since the last spawn
    pub fn spawn_due(&self, now_ns: u64) -> bool {
        now_ns.saturating_sub(self.last_spawn_ns) > SPAWN_INTERVAL_NS
    }

    /// Playing -> GameOver; a no-op when already over
    pub fn end_game(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.game_over_text = format!("Drops Gathered: {}", self.score);
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over with {} drops", self.score);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// HUD line for the playing screen
    pub fn score_text(&self) -> String {
        format!("Drops Collected: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(7, 1_000);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.drops.len(), 1);
        assert_eq!(state.last_spawn_ns, 1_000);
        assert_eq!(state.paddle.rect.x, 368.0);
        assert_eq!(state.paddle.rect.y, 20.0);
    }

    #[test]
    fn test_spawn_position_in_bounds() {
        let mut state = GameState::new(42, 0);
        for i in 0..200 {
            state.spawn_drop(i);
        }
        for drop in &state.drops {
            assert!(drop.rect.x >= 0.0 && drop.rect.x <= FIELD_WIDTH - DROP_WIDTH);
            assert_eq!(drop.rect.y, FIELD_HEIGHT);
            assert_eq!(drop.rect.width, 64.0);
        }
    }

    #[test]
    fn test_spawn_due_threshold() {
        let state = GameState::new(1, 0);
        assert!(!state.spawn_due(SPAWN_INTERVAL_NS));
        assert!(state.spawn_due(SPAWN_INTERVAL_NS + 1));
        // Clock going backwards never spawns
        let late = GameState::new(1, 5_000_000_000);
        assert!(!late.spawn_due(0));
    }

    #[test]
    fn test_end_game_once() {
        let mut state = GameState::new(3, 0);
        state.score = 4;
        state.drain_events();

        state.end_game();
        state.end_game();

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.game_over_text, "Drops Gathered: 4");
        assert_eq!(state.drain_events(), vec![GameEvent::GameOver { score: 4 }]);
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new(3, 0);
        state.score = 9;
        state.paddle.rect.x = 0.0;
        state.spawn_drop(10);
        state.end_game();

        state.reset(77);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.paddle.rect.x, 368.0);
        assert_eq!(state.drops.len(), 1);
        assert_eq!(state.last_spawn_ns, 77);
        assert!(state.game_over_text.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999, 0);
        let mut b = GameState::new(99999, 0);
        for t in 1..20 {
            a.spawn_drop(t);
            b.spawn_drop(t);
        }
        let xa: Vec<f32> = a.drops.iter().map(|d| d.rect.x).collect();
        let xb: Vec<f32> = b.drops.iter().map(|d| d.rect.x).collect();
        assert_eq!(xa, xb);
    }
}
