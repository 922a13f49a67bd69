//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes from the host (`dt` seconds, `now` nanoseconds)
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{DropOutcome, classify, is_caught, is_missed};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, Paddle, Raindrop};
pub use tick::{TickInput, tap, tick};
