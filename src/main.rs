//! Rain Catch headless host
//!
//! Runs the game at a fixed 60 Hz on simulated time with an autopilot
//! standing in for the player. Useful for smoke runs and for dumping
//! frame traces.
//!
//! Flags: `--frames N`, `--seed N`, `--trace` (one JSON line of draw
//! commands per frame on stdout).

use glam::Vec2;

use rain_catch::sim::{GamePhase, GameState};
use rain_catch::{AudioManager, FixedMetrics, GameLoop, InputState, RecordingRenderer, Screen};

const FRAME_NS: u64 = 1_000_000_000 / 60;
const FRAME_DT: f32 = 1.0 / 60.0;
/// Frames to linger on the game-over screen before tapping retry
const RETRY_DELAY_FRAMES: u32 = 90;

struct Options {
    frames: u32,
    seed: u64,
    trace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            frames: 60 * 30,
            seed: 0x5EED,
            trace: false,
        }
    }
}

fn parse_args() -> Options {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => match args.next().and_then(|v| v.parse().ok()) {
                Some(n) => opts.frames = n,
                None => log::warn!("--frames expects a number, using {}", opts.frames),
            },
            "--seed" => match args.next().and_then(|v| v.parse().ok()) {
                Some(n) => opts.seed = n,
                None => log::warn!("--seed expects a number, using {}", opts.seed),
            },
            "--trace" => opts.trace = true,
            other => log::warn!("Ignoring unknown argument {}", other),
        }
    }
    opts
}

/// Steer toward the lowest drop with the arrow keys
fn autopilot(state: &GameState, input: &mut InputState) {
    input.release_pointer();
    let target = state
        .drops
        .iter()
        .min_by(|a, b| {
            a.rect
                .y
                .partial_cmp(&b.rect.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|d| d.rect.x + d.rect.width / 2.0);

    let center = state.paddle.rect.x + state.paddle.rect.width / 2.0;
    match target {
        Some(x) if x < center - 4.0 => {
            input.left = true;
            input.right = false;
        }
        Some(x) if x > center + 4.0 => {
            input.left = false;
            input.right = true;
        }
        _ => {
            input.left = false;
            input.right = false;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = parse_args();
    let mut game = GameLoop::new(
        opts.seed,
        0,
        RecordingRenderer::new(),
        AudioManager::new(),
        &FixedMetrics::default(),
    );
    game.on_show();

    let mut input = InputState::default();
    let mut now = 0u64;
    let mut runs = 1u32;
    let mut best = 0u32;
    let mut over_frames = 0u32;

    for _ in 0..opts.frames {
        now += FRAME_NS;

        match game.state().phase {
            GamePhase::Playing => {
                over_frames = 0;
                autopilot(game.state(), &mut input);
            }
            GamePhase::GameOver => {
                over_frames += 1;
                input.left = false;
                input.right = false;
                if over_frames >= RETRY_DELAY_FRAMES {
                    let retry = game.retry_button();
                    input.press_pointer(Vec2::new(
                        retry.x + retry.width / 2.0,
                        retry.y + retry.height / 2.0,
                    ));
                    runs += 1;
                } else {
                    input.release_pointer();
                }
            }
        }

        game.update(FRAME_DT, &input, now);
        best = best.max(game.state().score);

        if opts.trace {
            match game.renderer().to_json() {
                Ok(line) => println!("{}", line),
                Err(e) => log::warn!("Failed to encode frame: {}", e),
            }
        }
        game.renderer_mut().take();
    }

    game.on_dispose();

    log::info!(
        "{} frames, {} runs, best {} drops, {} fps",
        opts.frames,
        runs,
        best,
        game.fps()
    );
    match serde_json::to_string(game.state()) {
        Ok(snapshot) => log::debug!("Final state: {}", snapshot),
        Err(e) => log::warn!("Failed to encode final state: {}", e),
    }
}
