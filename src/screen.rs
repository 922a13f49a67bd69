//! The game screen: per-frame driver and host lifecycle hooks
//!
//! `GameLoop` renders the current frame, samples input, advances the
//! simulation and turns the resulting events into audio cues.

use glam::Vec2;

use crate::assets::AssetMetrics;
use crate::audio::AudioPlayer;
use crate::consts::*;
use crate::fps::FpsCounter;
use crate::input::InputSource;
use crate::renderer::{Backdrop, Renderer, Sprite};
use crate::sim::{GameEvent, GamePhase, GameState, Rect, tap, tick};

/// Lifecycle callbacks the host invokes on the active screen
pub trait Screen {
    fn on_show(&mut self);
    fn on_hide(&mut self);
    fn on_pause(&mut self);
    fn on_resume(&mut self);
    fn on_dispose(&mut self);
}

/// One game session bound to its renderer and audio collaborators
pub struct GameLoop<R: Renderer, A: AudioPlayer> {
    state: GameState,
    renderer: R,
    audio: A,
    retry_button: Rect,
    fps: FpsCounter,
}

impl<R: Renderer, A: AudioPlayer> GameLoop<R, A> {
    /// Start a session at host time `now_ns`
    pub fn new(seed: u64, now_ns: u64, renderer: R, audio: A, metrics: &impl AssetMetrics) -> Self {
        let mut game = Self {
            state: GameState::new(seed, now_ns),
            renderer,
            audio,
            retry_button: Rect::default(),
            fps: FpsCounter::new(),
        };
        game.ensure_game_over_assets(metrics);
        // Spawn of the first drop is not worth a cue
        game.state.drain_events();
        log::info!("New game (seed {})", seed);
        game
    }

    /// Size and place the retry button from its sprite dimensions
    pub fn ensure_game_over_assets(&mut self, metrics: &impl AssetMetrics) {
        let (width, height) = metrics.retry_button_size();
        self.retry_button = Rect::centered_x(FIELD_WIDTH, RETRY_OFFSET_Y, width, height);
    }

    /// Start over without touching audio
    pub fn reset(&mut self, now_ns: u64) {
        self.state.reset(now_ns);
        self.state.drain_events();
    }

    /// Advance one host frame: `delta` seconds since the last frame, `now_ns` host time
    pub fn update(&mut self, delta: f32, input: &impl InputSource, now_ns: u64) {
        self.fps.record(now_ns);
        let input = input.sample();

        match self.state.phase {
            GamePhase::GameOver => {
                self.render_game_over();
                if let Some(point) = input.pointer {
                    tap(&mut self.state, point, &self.retry_button, now_ns);
                }
            }
            GamePhase::Playing => {
                self.render_playing();
                tick(&mut self.state, &input, delta, now_ns);
            }
        }

        self.dispatch_events();
    }

    fn render_playing(&mut self) {
        self.renderer.draw_background(Backdrop::Rain);
        self.renderer
            .draw_text(&self.state.score_text(), Vec2::new(0.0, SCORE_TEXT_Y));
        self.renderer
            .draw_text(&format!("FPS: {}", self.fps.fps()), Vec2::new(0.0, FPS_TEXT_Y));
        self.renderer.draw_sprite(Sprite::Bucket, self.state.paddle.rect);
        for drop in &self.state.drops {
            self.renderer.draw_sprite(Sprite::Raindrop, drop.rect);
        }
    }

    fn render_game_over(&mut self) {
        self.renderer.draw_background(Backdrop::GameOver);
        self.renderer.draw_text_centered(
            &self.state.game_over_text,
            Vec2::new(FIELD_WIDTH / 2.0, GAME_OVER_TEXT_Y),
        );
        self.renderer.draw_sprite(Sprite::RetryButton, self.retry_button);
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Caught { .. } => self.audio.play_catch_sound(),
                GameEvent::GameOver { .. } => {
                    self.audio.stop_ambient_loop();
                    self.audio.play_game_over_sound();
                }
                GameEvent::Restarted => self.audio.start_ambient_loop(),
                GameEvent::Spawned { .. } | GameEvent::Missed { .. } => {}
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn retry_button(&self) -> Rect {
        self.retry_button
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}

impl<R: Renderer, A: AudioPlayer> Screen for GameLoop<R, A> {
    fn on_show(&mut self) {
        log::info!("Screen shown");
        self.audio.start_ambient_loop();
    }

    fn on_hide(&mut self) {
        log::info!("Screen hidden");
        self.audio.stop_ambient_loop();
    }

    fn on_pause(&mut self) {
        log::info!("Screen paused");
    }

    fn on_resume(&mut self) {
        log::info!("Screen resumed");
    }

    fn on_dispose(&mut self) {
        self.audio.stop_ambient_loop();
        log::info!("Screen disposed after {} drops", self.state.score);
    }
}
