//! Procedural level generation
//!
//! Deterministic shape, randomized placement: entity counts and scaling are
//! fixed functions of the level number, positions are drawn uniformly from
//! per-kind rectangles. Layouts are immutable once generated; coin pickup is
//! tracked in the run state, not here.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// A static hazard.
///
/// `move_range` and `speed` are placement metadata carried for presentation;
/// the resolver treats monsters as stationary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub pos: Vec2,
    pub size: Vec2,
    pub move_range: f32,
    pub speed: f32,
}

/// A collectible coin. Ids are unique within a level across both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinSpec {
    pub id: u32,
    pub pos: Vec2,
}

/// A per-side goal marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalSpec {
    pub pos: Vec2,
}

/// Entity placements for one side of the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    pub monsters: Vec<MonsterSpec>,
    pub coins: Vec<CoinSpec>,
    pub portal: PortalSpec,
}

/// A generated level: one layout per side plus the informational coin
/// threshold (never enforced at completion).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub number: u32,
    pub sides: [LevelLayout; 2],
    pub required_coins: u32,
}

/// Difficulty scale for a level, capped at 5.
#[inline]
pub fn difficulty(level: u32) -> f32 {
    (level as f32 * 0.5).min(5.0)
}

/// Monster count for a level, per side.
#[inline]
pub fn monster_count(level: u32, config: &SimConfig) -> u32 {
    config.base_monster_count + level / 2
}

/// Coin count for a level, per side.
#[inline]
pub fn coin_count(level: u32, config: &SimConfig) -> u32 {
    config.base_coin_count + level / 2
}

/// Generate the layouts for both sides of a level.
pub fn generate_level<R: Rng>(level: u32, config: &SimConfig, rng: &mut R) -> Level {
    let difficulty = difficulty(level);
    let monsters = monster_count(level, config);
    let coins = coin_count(level, config);

    let mut next_coin_id = 1u32;
    let left = generate_side(
        SideKind::Left,
        monsters,
        coins,
        difficulty,
        config,
        rng,
        &mut next_coin_id,
    );
    let right = generate_side(
        SideKind::Right,
        monsters,
        coins,
        difficulty,
        config,
        rng,
        &mut next_coin_id,
    );

    let total_coins = (left.coins.len() + right.coins.len()) as u32;
    let required_coins = (level + 2).min(total_coins);

    log::info!(
        "Level {level} generated: {monsters} monsters, {coins} coins per side, \
         {required_coins} coins suggested"
    );

    Level {
        number: level,
        sides: [left, right],
        required_coins,
    }
}

/// Portal bias differs per side; everything else is side-symmetric.
enum SideKind {
    Left,
    Right,
}

fn generate_side<R: Rng>(
    kind: SideKind,
    monsters: u32,
    coins: u32,
    difficulty: f32,
    config: &SimConfig,
    rng: &mut R,
    next_coin_id: &mut u32,
) -> LevelLayout {
    let sw = config.section_width;

    let monsters = (0..monsters)
        .map(|_| MonsterSpec {
            pos: Vec2::new(
                rng.random_range(100.0..sw - 100.0),
                rng.random_range(50.0..250.0),
            ),
            size: config.monster_size,
            move_range: config.base_move_range * (1.0 + difficulty * 0.2),
            speed: config.base_monster_speed * (1.0 + difficulty * 0.1),
        })
        .collect();

    let coins = (0..coins)
        .map(|_| {
            let id = *next_coin_id;
            *next_coin_id += 1;
            CoinSpec {
                id,
                pos: Vec2::new(
                    rng.random_range(100.0..sw - 200.0),
                    rng.random_range(50.0..250.0),
                ),
            }
        })
        .collect();

    // Portals sit away from the side's start edge so a level is never won by
    // standing still. Each side's start is at its near edge, so the left
    // portal biases right and the right portal biases left.
    let portal_x = match kind {
        SideKind::Left => {
            rng.random_range(config.min_portal_distance..sw - config.portal_size.x - config.start_offset)
        }
        SideKind::Right => rng.random_range(0.0..sw - config.min_portal_distance),
    };
    let portal = PortalSpec {
        pos: Vec2::new(portal_x, rng.random_range(50.0..250.0)),
    };

    LevelLayout {
        monsters,
        coins,
        portal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_level_five_counts() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let level = generate_level(5, &config, &mut rng);

        for side in &level.sides {
            assert_eq!(side.monsters.len(), 5);
            assert_eq!(side.coins.len(), 7);
        }
    }

    #[test]
    fn test_difficulty_caps_at_five() {
        assert_eq!(difficulty(1), 0.5);
        assert_eq!(difficulty(10), 5.0);
        assert_eq!(difficulty(200), 5.0);
    }

    #[test]
    fn test_required_coins_capped_by_generated_total() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);

        // Level 1: threshold 3 is far below the 10 generated coins.
        let level = generate_level(1, &config, &mut rng);
        assert_eq!(level.required_coins, 3);

        // With a sparse generator the threshold caps at what exists.
        let sparse = SimConfig {
            base_coin_count: 0,
            ..SimConfig::default()
        };
        let level = generate_level(4, &sparse, &mut rng);
        let total = (level.sides[0].coins.len() + level.sides[1].coins.len()) as u32;
        assert_eq!(total, 4);
        assert_eq!(level.required_coins, 4);
    }

    #[test]
    fn test_coin_ids_unique_across_sides() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let level = generate_level(3, &config, &mut rng);

        let mut seen = std::collections::HashSet::new();
        for side in &level.sides {
            for coin in &side.coins {
                assert!(seen.insert(coin.id));
            }
        }
    }

    /// Placement is random, so assert the distribution bounds over many
    /// generations rather than exact positions.
    #[test]
    fn test_placement_rectangles() {
        let config = SimConfig::default();
        let sw = config.section_width;
        let mut rng = Pcg32::seed_from_u64(99);

        for level in 1..=50 {
            let level = generate_level(level, &config, &mut rng);
            for side in &level.sides {
                for monster in &side.monsters {
                    assert!(monster.pos.x >= 100.0 && monster.pos.x <= sw - 100.0);
                    assert!(monster.pos.y >= 50.0 && monster.pos.y <= 250.0);
                }
                for coin in &side.coins {
                    assert!(coin.pos.x >= 100.0 && coin.pos.x <= sw - 200.0);
                    assert!(coin.pos.y >= 50.0 && coin.pos.y <= 250.0);
                }
                assert!(side.portal.pos.y >= 50.0 && side.portal.pos.y <= 250.0);
            }
            assert!(level.sides[0].portal.pos.x >= config.min_portal_distance);
            assert!(level.sides[1].portal.pos.x <= sw - config.min_portal_distance);
        }
    }

    #[test]
    fn test_monster_scaling_fields() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let level = generate_level(10, &config, &mut rng);

        // difficulty 5.0: range x2, speed x1.5
        let monster = &level.sides[0].monsters[0];
        assert!((monster.move_range - config.base_move_range * 2.0).abs() < 1e-3);
        assert!((monster.speed - config.base_monster_speed * 1.5).abs() < 1e-3);
    }
}
