//! Rendering collaborator
//!
//! The game describes each frame as backdrop, sprites and text; the host maps
//! those onto its graphics API.

pub mod recording;

pub use recording::{DrawCommand, RecordingRenderer};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Full-screen background images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backdrop {
    /// Rainy wallpaper behind the playing field
    Rain,
    /// Wallpaper behind the game-over screen
    GameOver,
}

/// Sprites drawn into a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Bucket,
    Raindrop,
    RetryButton,
}

/// Drawing operations the game needs from the host
pub trait Renderer {
    /// Fill the field with a background image
    fn draw_background(&mut self, backdrop: Backdrop);
    /// Draw a sprite stretched over `rect`
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    /// Draw a line of text; `position` is the top-left of the text box
    fn draw_text(&mut self, text: &str, position: Vec2);
    /// Draw a line of text horizontally centered on `position.x`
    ///
    /// Hosts that can measure glyphs should override this.
    fn draw_text_centered(&mut self, text: &str, position: Vec2) {
        self.draw_text(text, position);
    }
}
