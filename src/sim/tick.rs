//! Per-tick simulation driver
//!
//! One synchronous pass per display frame: control transitions, mirrored
//! movement, integration, collision resolution, event application. The
//! simulation is frame-coupled with unit timesteps; all constants are per
//! tick.

use rand::Rng;

use crate::config::SimConfig;
use crate::input::TickInput;
use crate::persistence::ProgressStore;

use super::collision;
use super::level::generate_level;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the run by one tick.
///
/// Control input is honored in every phase; physics and collisions run only
/// while `Playing`.
pub fn tick<R: Rng, S: ProgressStore>(
    state: &mut GameState,
    input: &TickInput,
    config: &SimConfig,
    rng: &mut R,
    store: &mut S,
) {
    // Return to menu halts everything, from any phase.
    if input.menu && state.phase != GamePhase::Menu {
        log::info!("Returning to menu");
        state.phase = GamePhase::Menu;
        return;
    }

    // Leave the menu: load the current level fresh and play.
    if input.start && state.phase == GamePhase::Menu {
        let level = generate_level(state.current_level, config, rng);
        state.begin_level(level, config);
        state.phase = GamePhase::Playing;
        log::info!("Starting level {}", state.current_level);
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    if input.restart {
        match state.phase {
            // Mid-play restart: same layout, bodies back at the start.
            GamePhase::Playing | GamePhase::Paused => {
                state.reset_positions(config);
                state.phase = GamePhase::Playing;
                log::info!("Restarted level {}", state.current_level);
            }
            // Retry after death: the level is rebuilt from scratch.
            GamePhase::Dead => {
                let level = generate_level(state.current_level, config, rng);
                state.begin_level(level, config);
                state.phase = GamePhase::Playing;
                log::info!("Retrying level {}", state.current_level);
            }
            _ => {}
        }
    }

    if input.advance && state.phase == GamePhase::LevelComplete {
        state.current_level += 1;
        state.highest_level = state.highest_level.max(state.current_level);
        store.save(&state.progress());

        let level = generate_level(state.current_level, config, rng);
        state.begin_level(level, config);
        state.phase = GamePhase::Playing;
        log::info!("Advanced to level {}", state.current_level);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    let events = {
        let Some(level) = state.level.as_ref() else {
            // Missing level data: abort this tick's effects, keep running.
            log::warn!("No level data for level {}, skipping tick", state.current_level);
            return;
        };

        state
            .bodies
            .apply_horizontal(input.move_left, input.move_right, state.at_portal, config);
        if input.jump {
            state.bodies.apply_jump(state.at_portal);
        }
        state.bodies.integrate(state.at_portal, config);

        collision::resolve(&state.bodies, level, state.at_portal, &state.collected, config)
    };

    for event in events {
        match event {
            GameEvent::Death { side } => {
                log::info!("Death on {side:?} in level {}", state.current_level);
                state.phase = GamePhase::Dead;
                break;
            }
            GameEvent::CoinCollected { id, .. } => {
                // The set makes pickup idempotent even if an id is re-emitted.
                if state.collected.insert(id) {
                    state.level_coins += 1;
                    state.total_coins += 1;
                    store.save(&state.progress());
                }
            }
            GameEvent::PortalReached { side } => {
                log::debug!("{side:?} reached its portal");
                state.at_portal[side.index()] = true;
            }
            GameEvent::LevelComplete => {
                log::info!(
                    "Level {} complete with {} coins",
                    state.current_level,
                    state.level_coins
                );
                state.phase = GamePhase::LevelComplete;
                store.save(&state.progress());
            }
        }
    }
}
