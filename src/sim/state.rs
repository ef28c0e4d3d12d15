//! Run state and progression types
//!
//! Everything the simulation mutates over a session lives here, explicitly
//! constructed and serializable; there is no ambient game singleton.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::persistence::Progress;

use super::body::Side;
use super::level::Level;
use super::mirror::MirrorPair;

/// Current phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not ticking; entered at startup and via explicit return-to-menu.
    Menu,
    /// Ticking and accepting input.
    Playing,
    /// Halted with full state preserved.
    Paused,
    /// Halted after a monster collision; retry or return to menu.
    Dead,
    /// Halted after both portals were reached; advance to continue.
    LevelComplete,
}

/// Events produced by collision resolution, consumed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Death { side: Side },
    CoinCollected { side: Side, id: u32 },
    PortalReached { side: Side },
    LevelComplete,
}

/// Complete run state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// 1-based, monotonically increasing, unbounded.
    pub current_level: u32,
    /// Coins banked across levels; persisted.
    pub total_coins: u32,
    /// Coins collected in the current level; reset on level load and restart.
    pub level_coins: u32,
    /// Highest level ever reached; persisted.
    pub highest_level: u32,
    /// Per-side portal latch, indexed by [`Side::index`].
    pub at_portal: [bool; 2],
    /// Ids of coins already collected in the current level.
    pub collected: HashSet<u32>,
    /// The two coupled character bodies.
    pub bodies: MirrorPair,
    /// Current level layout; absent until the first level is loaded.
    pub level: Option<Level>,
}

impl GameState {
    /// Create a session at the menu, resuming from persisted progress.
    pub fn new(config: &SimConfig, progress: &Progress) -> Self {
        Self {
            phase: GamePhase::Menu,
            current_level: progress.current_level,
            total_coins: progress.total_coins,
            level_coins: 0,
            highest_level: progress.highest_level.max(progress.current_level),
            at_portal: [false, false],
            collected: HashSet::new(),
            bodies: MirrorPair::new(config),
            level: None,
        }
    }

    /// Install a freshly generated level and reset all per-level state.
    pub fn begin_level(&mut self, level: Level, config: &SimConfig) {
        self.level_coins = 0;
        self.at_portal = [false, false];
        self.collected.clear();
        self.bodies.reset(config);
        self.level = Some(level);
    }

    /// Reset bodies and per-level latches without touching the layout or the
    /// coin ledger. Used by mid-play restart.
    pub fn reset_positions(&mut self, config: &SimConfig) {
        self.level_coins = 0;
        self.at_portal = [false, false];
        self.bodies.reset(config);
    }

    /// Snapshot of the fields the persistence gateway stores.
    pub fn progress(&self) -> Progress {
        Progress {
            current_level: self.current_level,
            total_coins: self.total_coins,
            highest_level: self.highest_level,
        }
    }
}
