//! Per-frame simulation step
//!
//! Advances the game state by one host frame. Pure: no rendering, no audio;
//! side effects are recorded as `GameEvent`s on the state.

use glam::Vec2;

use super::collision::{DropOutcome, classify};
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer/touch position in field coordinates while pressed
    pub pointer: Option<Vec2>,
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
}

impl TickInput {
    /// Keyboard direction: -1 left, 1 right, 0 for none or both
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance a playing game by `dt` seconds at host time `now_ns`
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now_ns: u64) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Move the bucket
    if let Some(pointer) = input.pointer {
        state.paddle.follow_pointer(pointer.x);
    } else {
        state.paddle.nudge(input.direction(), dt);
    }
    state.paddle.clamp();

    if state.spawn_due(now_ns) {
        state.spawn_drop(now_ns);
    }

    // Build the surviving set in one pass; miss is checked before catch
    let bucket = state.paddle.rect;
    let drops = std::mem::take(&mut state.drops);
    let mut survivors = Vec::with_capacity(drops.len());
    for mut drop in drops {
        drop.fall(dt);
        match classify(&drop.rect, &bucket) {
            DropOutcome::Missed => {
                state.events.push(GameEvent::Missed { id: drop.id });
                state.end_game();
            }
            DropOutcome::Caught if state.phase == GamePhase::Playing => {
                state.score += 1;
                state.events.push(GameEvent::Caught { id: drop.id });
                log::debug!("Caught drop {} (score {})", drop.id, state.score);
            }
            _ => survivors.push(drop),
        }
    }
    state.drops = survivors;

    log::trace!(
        "tick dt={:.4} bucket_x={:.1} drops={} score={}",
        dt,
        state.paddle.rect.x,
        state.drops.len(),
        state.score
    );
}

/// Handle a tap on the game-over screen; returns true if the game restarted
pub fn tap(state: &mut GameState, point: Vec2, retry: &Rect, now_ns: u64) -> bool {
    if state.phase != GamePhase::GameOver || !retry.contains(point) {
        return false;
    }
    state.reset(now_ns);
    state.events.push(GameEvent::Restarted);
    log::info!("Restarted");
    true
}
