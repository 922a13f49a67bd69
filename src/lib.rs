//! Rain Catch - catch the falling raindrops with a bucket
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, raindrops, scoring, game phase)
//! - `screen`: Per-frame driver wiring the simulation to host collaborators
//! - `renderer`, `audio`, `input`, `assets`: Collaborator traits the host implements

pub mod assets;
pub mod audio;
pub mod fps;
pub mod input;
pub mod renderer;
pub mod screen;
pub mod sim;

pub use assets::{AssetMetrics, FixedMetrics};
pub use audio::{AudioManager, AudioPlayer, SoundEffect};
pub use fps::FpsCounter;
pub use input::{InputSource, InputState};
pub use renderer::{Backdrop, DrawCommand, RecordingRenderer, Renderer, Sprite};
pub use screen::{GameLoop, Screen};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (y grows upward, origin bottom-left)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Bucket defaults
    pub const PADDLE_WIDTH: f32 = 64.0;
    pub const PADDLE_HEIGHT: f32 = 64.0;
    /// Bottom edge of the bucket, measured from the bottom of the field
    pub const PADDLE_Y: f32 = 20.0;
    /// Keyboard movement speed (units per second)
    pub const PADDLE_SPEED: f32 = 200.0;

    /// Raindrop defaults
    pub const DROP_WIDTH: f32 = 64.0;
    pub const DROP_HEIGHT: f32 = 64.0;
    /// Fall speed (units per second)
    pub const DROP_FALL_SPEED: f32 = 200.0;

    /// Minimum gap between spawns, in nanoseconds
    pub const SPAWN_INTERVAL_NS: u64 = 1_000_000_000;

    /// Max distance between bucket top and drop bottom for a catch
    pub const CATCH_TOLERANCE: f32 = 15.0;

    /// Retry button bottom edge, measured from the bottom of the field
    pub const RETRY_OFFSET_Y: f32 = 20.0;

    /// HUD text anchors
    pub const SCORE_TEXT_Y: f32 = 480.0;
    pub const FPS_TEXT_Y: f32 = 440.0;
    /// Game-over text is centered horizontally at this height
    pub const GAME_OVER_TEXT_Y: f32 = 150.0;
}

/// Paddle x that centers the bucket in the field
#[inline]
pub fn centered_paddle_x() -> f32 {
    consts::FIELD_WIDTH / 2.0 - consts::PADDLE_WIDTH / 2.0
}
