//! Mirror Jump entry point
//!
//! Headless demo driver: runs the simulation with a scripted input source
//! and logs progression. Rendering is an external concern; this binary
//! exists to exercise the engine end to end.

use std::path::PathBuf;
use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use mirror_jump::consts::FRAME_MS;
use mirror_jump::sim::{GamePhase, GameState, tick};
use mirror_jump::{InputEvent, InputQueue, JsonFileStore, ProgressStore, SimConfig};

/// Ticks before the demo gives up on a level attempt.
const MAX_DEMO_TICKS: u64 = 3600;

fn main() {
    env_logger::init();
    log::info!("Mirror Jump (headless demo) starting...");

    let config = match std::env::var("MIRROR_JUMP_CONFIG") {
        Ok(path) => SimConfig::load(&PathBuf::from(path)),
        Err(_) => SimConfig::default(),
    };

    let save_path = std::env::var("MIRROR_JUMP_SAVE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("mirror-jump-progress.json"));
    let mut store = JsonFileStore::new(save_path);

    let progress = store.load();
    let mut state = GameState::new(&config, &progress);
    let mut rng = Pcg32::seed_from_u64(rand::random());
    let mut queue = InputQueue::new();

    log::info!(
        "Session at level {} with {} coins banked",
        state.current_level,
        state.total_coins
    );

    queue.push(InputEvent::StartRequested);
    queue.push(InputEvent::MoveRightStart);

    let mut completed = 0u32;
    let mut deaths = 0u32;

    for ticks in 0..MAX_DEMO_TICKS {
        // Hop every half second; both portals sit away from the start edges,
        // so holding right walks each character toward its own goal.
        if ticks % 30 == 0 {
            queue.push(InputEvent::JumpPressed);
        }

        match state.phase {
            GamePhase::Dead => {
                deaths += 1;
                if deaths >= 3 {
                    queue.push(InputEvent::MenuRequested);
                } else {
                    queue.push(InputEvent::RestartRequested);
                }
            }
            GamePhase::LevelComplete => {
                completed += 1;
                if completed >= 2 {
                    queue.push(InputEvent::MenuRequested);
                } else {
                    queue.push(InputEvent::AdvanceLevelRequested);
                }
            }
            GamePhase::Menu => break,
            _ => {}
        }

        let input = queue.drain();
        tick(&mut state, &input, &config, &mut rng, &mut store);

        std::thread::sleep(Duration::from_millis(FRAME_MS));
    }

    log::info!(
        "Demo finished: level {}, {} coins, {} completions, {} deaths",
        state.current_level,
        state.total_coins,
        completed,
        deaths
    );
}
