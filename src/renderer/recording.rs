//! Renderer that records draw calls instead of drawing
//!
//! Used by the headless host for JSON frame traces and by tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Backdrop, Renderer, Sprite};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Background { backdrop: Backdrop },
    Sprite { sprite: Sprite, rect: Rect },
    Text { text: String, position: Vec2, centered: bool },
}

/// Collects draw commands for the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded frame, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of sprites of the given kind drawn so far
    pub fn sprite_count(&self, kind: Sprite) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { sprite, .. } if *sprite == kind))
            .count()
    }

    /// All text drawn so far
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Serialize the recorded frame as one JSON line
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }
}

impl Renderer for RecordingRenderer {
    fn draw_background(&mut self, backdrop: Backdrop) {
        self.commands.push(DrawCommand::Background { backdrop });
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        self.commands.push(DrawCommand::Sprite { sprite, rect });
    }

    fn draw_text(&mut self, text: &str, position: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            centered: false,
        });
    }

    fn draw_text_centered(&mut self, text: &str, position: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            centered: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_and_takes() {
        let mut r = RecordingRenderer::new();
        r.draw_background(Backdrop::Rain);
        r.draw_sprite(Sprite::Raindrop, Rect::new(1.0, 2.0, 64.0, 64.0));
        r.draw_sprite(Sprite::Bucket, Rect::new(368.0, 20.0, 64.0, 64.0));
        r.draw_text("hello", Vec2::new(0.0, 480.0));

        assert_eq!(r.sprite_count(Sprite::Raindrop), 1);
        assert_eq!(r.texts(), vec!["hello"]);
        assert_eq!(r.take().len(), 4);
        assert!(r.commands().is_empty());
    }

    #[test]
    fn test_json_trace() {
        let mut r = RecordingRenderer::new();
        r.draw_background(Backdrop::GameOver);
        r.draw_text_centered("Drops Gathered: 2", Vec2::new(400.0, 150.0));

        let json = r.to_json().unwrap();
        assert!(json.contains(r#""op":"background""#));
        assert!(json.contains(r#""backdrop":"GameOver""#));
        assert!(json.contains(r#""centered":true"#));

        let back: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r.commands());
    }
}
