//! Audio collaborator
//!
//! The host owns the actual device; the game only asks for four cues.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Drop landed in the bucket
    Catch,
    /// Drop missed, run ended
    GameOver,
}

/// Audio cues the game needs from the host
pub trait AudioPlayer {
    fn play_catch_sound(&mut self);
    fn play_game_over_sound(&mut self);
    /// Start the looping rain ambience (no-op if already playing)
    fn start_ambient_loop(&mut self);
    fn stop_ambient_loop(&mut self);
}

/// Audio manager that tracks volume, mute and ambience state and reports cues through `log`
///
/// Suitable as-is for headless hosts; windowed hosts wrap their device behind
/// the same trait.
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    ambient_playing: bool,
    /// Effects played so far, in order
    played: Vec<SoundEffect>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            ambient_playing: false,
            played: Vec::new(),
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn ambient_playing(&self) -> bool {
        self.ambient_playing
    }

    pub fn played(&self) -> &[SoundEffect] {
        &self.played
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("Playing {:?} at volume {:.2}", effect, vol);
        self.played.push(effect);
    }
}

impl AudioPlayer for AudioManager {
    fn play_catch_sound(&mut self) {
        self.play(SoundEffect::Catch);
    }

    fn play_game_over_sound(&mut self) {
        self.play(SoundEffect::GameOver);
    }

    fn start_ambient_loop(&mut self) {
        if !self.ambient_playing {
            log::debug!("Rain ambience started");
            self.ambient_playing = true;
        }
    }

    fn stop_ambient_loop(&mut self) {
        if self.ambient_playing {
            log::debug!("Rain ambience stopped");
            self.ambient_playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_effects() {
        let mut audio = AudioManager::new();
        audio.play_catch_sound();
        audio.play_game_over_sound();
        assert_eq!(audio.played(), &[SoundEffect::Catch, SoundEffect::GameOver]);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new();
        audio.set_muted(true);
        audio.play_catch_sound();
        assert!(audio.played().is_empty());

        audio.set_muted(false);
        audio.set_sfx_volume(-1.0);
        audio.play_catch_sound();
        assert!(audio.played().is_empty());
    }

    #[test]
    fn test_ambient_toggle() {
        let mut audio = AudioManager::new();
        assert!(!audio.ambient_playing());
        audio.start_ambient_loop();
        audio.start_ambient_loop();
        assert!(audio.ambient_playing());
        audio.stop_ambient_loop();
        assert!(!audio.ambient_playing());
    }
}
