//! Paw Runner entry point
//!
//! Headless host: owns the fixed-cadence scheduler, the input source, the
//! audio sink, and the high-score file. The simulation core knows nothing
//! about wall-clock time; it just gets one `tick` call per interval, and a
//! renderer would read `state.snapshot()` between ticks.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use paw_runner::assets::AssetCatalog;
use paw_runner::audio::{self, LogAudio};
use paw_runner::consts::TICK_MS;
use paw_runner::sim::{GameEvent, GameState, ObstacleKind, PlayerState, TickInput, tick};
use paw_runner::{HighScore, Tuning};

/// Demo pilot: jump when a ground obstacle is about to close in
fn auto_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.player.state() != PlayerState::Running {
        return input;
    }
    let game_speed = state.tuning.base_speed * state.speed_multiplier;
    let closing = state.obstacles.iter().any(|o| {
        o.kind == ObstacleKind::Ground
            && o.pos.x > state.player.pos.x
            && o.pos.x - state.player.pos.x < 15.0 * game_speed
    });
    if closing {
        input.jump = true;
    }
    input
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random);
    log::info!("Paw Runner starting (seed {seed})");

    let tuning = Tuning::load(Path::new("tuning.json"));
    let mut state = GameState::new(seed, tuning, AssetCatalog::with_defaults());
    let mut audio_sink = LogAudio;
    let highscore_path = PathBuf::from("highscore.json");
    let mut highscore = HighScore::load(&highscore_path);

    let tick_interval = Duration::from_millis(TICK_MS);
    let mut runs_left = 3u32;
    // Demo pilot only loses to birds, so bound each run's length
    let max_run_ticks = 120 * u64::from(paw_runner::consts::TICK_HZ);

    while runs_left > 0 {
        let started = Instant::now();

        let input = auto_input(&state);
        let events = tick(&mut state, &input);
        audio::dispatch(&events, &mut audio_sink);
        for event in &events {
            match event {
                GameEvent::ChaseStarted => log::info!("the chaser appears"),
                GameEvent::ChaseEnded => log::info!("the chaser gives up"),
                _ => {}
            }
        }

        let snapshot = state.snapshot();
        let run_done = (snapshot.game_over && snapshot.death_animation_done)
            || state.tick_count >= max_run_ticks;
        if run_done {
            log::info!("run over: score {} (best {})", snapshot.score, highscore.best);
            if highscore.submit(snapshot.score) {
                highscore.save(&highscore_path);
            }
            runs_left -= 1;
            if runs_left > 0 {
                state.restart();
            }
            continue;
        }

        // Hold the fixed cadence; a late tick is never replayed
        if let Some(remaining) = tick_interval.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    log::info!("done; best score {}", highscore.best);
}
