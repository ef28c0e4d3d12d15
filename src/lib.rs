//! Mirror Jump - a two-character synchronized platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, mirroring, levels, collisions, progression)
//! - `input`: Input event queue, drained once per tick
//! - `persistence`: Progress snapshot load/save
//! - `config`: Explicit geometry and physics configuration

pub mod config;
pub mod input;
pub mod persistence;
pub mod sim;

pub use config::SimConfig;
pub use input::{InputEvent, InputQueue, TickInput};
pub use persistence::{JsonFileStore, MemoryStore, Progress, ProgressStore};

/// Constants that are not tunable per-session.
pub mod consts {
    /// Nominal frame interval for the driving loop (milliseconds).
    ///
    /// The simulation is frame-coupled: velocities are in units per tick, so
    /// this paces the loop without scaling physics.
    pub const FRAME_MS: u64 = 16;
}
