//! Collision resolution
//!
//! Two deliberately different metrics: monsters use a lenient circular test
//! on body centers, coins and portals use a strict axis-aligned box test with
//! an inward tolerance. Resolution runs once per tick after integration, in
//! the order monsters, coins, portals.

use std::collections::HashSet;

use glam::Vec2;

use crate::config::SimConfig;

use super::body::{Body, Side};
use super::level::{Level, MonsterSpec};
use super::mirror::MirrorPair;
use super::state::GameEvent;

/// Shrink factor for the circular monster metric.
const MONSTER_SHRINK: f32 = 2.5;

/// Inward tolerance for the coin/portal box metric, in units.
const BOX_INSET: f32 = 5.0;

/// Circular overlap between a character and a monster: center distance under
/// the smallest extent of either box divided by the shrink factor.
pub fn monster_overlap(body: &Body, monster: &MonsterSpec) -> bool {
    let monster_center = monster.pos + monster.size * 0.5;
    let threshold = body
        .width
        .min(body.height)
        .min(monster.size.x)
        .min(monster.size.y)
        / MONSTER_SHRINK;
    body.center().distance(monster_center) < threshold
}

/// Box overlap with both boxes shrunk inward by [`BOX_INSET`] on every side.
///
/// Positions are bottom-left corners, y up.
pub fn boxes_overlap_inset(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    let a_min = pos_a + BOX_INSET;
    let a_max = pos_a + size_a - BOX_INSET;
    let b_min = pos_b + BOX_INSET;
    let b_max = pos_b + size_b - BOX_INSET;

    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Run all collision checks for one tick and emit the resulting events.
///
/// `at_portal` is the latch state at the start of the tick: a latched side is
/// exempt from monster and coin checks, and cannot latch again. The
/// `LevelComplete` emission is idempotent; it requires at least one side to
/// have latched this tick.
pub fn resolve(
    pair: &MirrorPair,
    level: &Level,
    at_portal: [bool; 2],
    collected: &HashSet<u32>,
    config: &SimConfig,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // 1. Monsters
    for side in [Side::Left, Side::Right] {
        if at_portal[side.index()] {
            continue;
        }
        let body = pair.body(side);
        if level.sides[side.index()]
            .monsters
            .iter()
            .any(|m| monster_overlap(body, m))
        {
            events.push(GameEvent::Death { side });
        }
    }

    // 2. Coins
    for side in [Side::Left, Side::Right] {
        if at_portal[side.index()] {
            continue;
        }
        let body = pair.body(side);
        for coin in &level.sides[side.index()].coins {
            if collected.contains(&coin.id) {
                continue;
            }
            if boxes_overlap_inset(
                body.pos,
                Vec2::new(body.width, body.height),
                coin.pos,
                config.coin_size,
            ) {
                events.push(GameEvent::CoinCollected { side, id: coin.id });
            }
        }
    }

    // 3. Portals
    let mut now_at_portal = at_portal;
    for side in [Side::Left, Side::Right] {
        if now_at_portal[side.index()] {
            continue;
        }
        let body = pair.body(side);
        let portal = &level.sides[side.index()].portal;
        if boxes_overlap_inset(
            body.pos,
            Vec2::new(body.width, body.height),
            portal.pos,
            config.portal_size,
        ) {
            now_at_portal[side.index()] = true;
            events.push(GameEvent::PortalReached { side });
        }
    }

    if now_at_portal[0] && now_at_portal[1] && !(at_portal[0] && at_portal[1]) {
        events.push(GameEvent::LevelComplete);
    }

    events
}
