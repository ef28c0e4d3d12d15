//! Simulation configuration
//!
//! All geometry the original game measured from the document (section width,
//! sprite sizes) lives here as explicit values, so physics never depends on
//! presentation.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tunable simulation parameters.
///
/// One value per session, passed to the simulation at construction. Distances
/// are in world units, speeds in units per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Geometry ===
    /// Width of one character's section.
    pub section_width: f32,
    /// Minimum allowed vertical position (platform height).
    pub ground_level: f32,
    /// Maximum allowed vertical position during active play.
    pub height_ceiling: f32,
    /// Character bounding box.
    pub character_size: Vec2,
    /// Horizontal inset of each character's start position from its near edge.
    pub start_offset: f32,

    // === Kinematics ===
    /// Horizontal movement per tick.
    pub speed: f32,
    /// Initial upward velocity of a jump.
    pub jump_force: f32,
    /// Downward acceleration per tick.
    pub gravity: f32,

    // === Level generation ===
    /// Monster bounding box.
    pub monster_size: Vec2,
    /// Coin bounding box.
    pub coin_size: Vec2,
    /// Portal bounding box.
    pub portal_size: Vec2,
    /// Monster count before level scaling.
    pub base_monster_count: u32,
    /// Coin count before level scaling.
    pub base_coin_count: u32,
    /// Monster patrol range before difficulty scaling (placement metadata only).
    pub base_move_range: f32,
    /// Monster patrol speed before difficulty scaling (placement metadata only).
    pub base_monster_speed: f32,
    /// Minimum distance of a portal from its side's start edge.
    pub min_portal_distance: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            section_width: 600.0,
            ground_level: 20.0,
            height_ceiling: 300.0,
            character_size: Vec2::new(40.0, 40.0),
            start_offset: 20.0,

            speed: 5.0,
            jump_force: 12.0,
            gravity: 0.5,

            monster_size: Vec2::new(40.0, 40.0),
            coin_size: Vec2::new(20.0, 20.0),
            portal_size: Vec2::new(40.0, 60.0),
            base_monster_count: 3,
            base_coin_count: 5,
            base_move_range: 100.0,
            base_monster_speed: 2.0,
            min_portal_distance: 300.0,
        }
    }
}

impl SimConfig {
    /// Maximum x a character's left edge may reach.
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.section_width - self.character_size.x
    }

    /// Start position of either character in its own section coordinates.
    #[inline]
    pub fn start_pos(&self) -> Vec2 {
        Vec2::new(self.start_offset, self.ground_level)
    }

    /// Load configuration from a JSON file, falling back to defaults if the
    /// file is missing or unparseable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
