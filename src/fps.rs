//! Rolling frames-per-second counter for the HUD

const WINDOW: usize = 60;

/// FPS over the last 60 frames, computed from host timestamps
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [u64; WINDOW],
    frame_index: usize,
    recorded: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: [0; WINDOW],
            frame_index: 0,
            recorded: 0,
            fps: 0,
        }
    }

    /// Record a frame at `now_ns` and return the updated estimate
    pub fn record(&mut self, now_ns: u64) -> u32 {
        self.frame_times[self.frame_index] = now_ns;
        self.frame_index = (self.frame_index + 1) % WINDOW;
        self.recorded = (self.recorded + 1).min(WINDOW);

        // Oldest sample sits where the next write will go once the window is full
        let oldest = if self.recorded == WINDOW {
            self.frame_times[self.frame_index]
        } else {
            self.frame_times[0]
        };
        let frames = (self.recorded - 1) as f64;
        let elapsed = now_ns.saturating_sub(oldest);
        if frames > 0.0 && elapsed > 0 {
            self.fps = (frames * 1e9 / elapsed as f64).round() as u32;
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
