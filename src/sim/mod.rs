//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform concerns:
//! - One logical thread, one synchronous tick per frame
//! - Explicit state passed in, no ambient globals
//! - Randomness only through a caller-supplied RNG

pub mod body;
pub mod collision;
pub mod level;
pub mod mirror;
pub mod state;
pub mod tick;

pub use body::{Body, Side};
pub use collision::{boxes_overlap_inset, monster_overlap, resolve};
pub use level::{CoinSpec, Level, LevelLayout, MonsterSpec, PortalSpec, generate_level};
pub use mirror::MirrorPair;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
