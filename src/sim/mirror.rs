//! Mirroring coordinator
//!
//! The player drives the left body; the right body replays inverted
//! horizontal input and shares the left body's vertical state. Each side
//! stops responding once it has reached its portal.

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

use super::body::{Body, Side};

/// The two coupled character bodies.
///
/// `primary` is the directly-controlled left body, `mirror` the right one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorPair {
    pub primary: Body,
    pub mirror: Body,
}

impl MirrorPair {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            primary: Body::new(Side::Left, config),
            mirror: Body::new(Side::Right, config),
        }
    }

    pub fn body(&self, side: Side) -> &Body {
        match side {
            Side::Left => &self.primary,
            Side::Right => &self.mirror,
        }
    }

    /// Apply held horizontal input. The mirror moves opposite to the primary;
    /// a side that has reached its portal ignores horizontal input.
    pub fn apply_horizontal(
        &mut self,
        left_held: bool,
        right_held: bool,
        at_portal: [bool; 2],
        config: &SimConfig,
    ) {
        if left_held {
            if !at_portal[Side::Left.index()] {
                self.primary.move_left(config.section_width);
            }
            if !at_portal[Side::Right.index()] {
                self.mirror.move_right(config.section_width);
            }
        }
        if right_held {
            if !at_portal[Side::Left.index()] {
                self.primary.move_right(config.section_width);
            }
            if !at_portal[Side::Right.index()] {
                self.mirror.move_left(config.section_width);
            }
        }
    }

    /// Apply a jump request to both bodies, each gated by its own portal flag
    /// (and its own airborne guard).
    pub fn apply_jump(&mut self, at_portal: [bool; 2]) {
        if !at_portal[Side::Left.index()] {
            self.primary.jump();
        }
        if !at_portal[Side::Right.index()] {
            self.mirror.jump();
        }
    }

    /// Integrate vertical physics for the tick.
    ///
    /// While both sides are active the primary integrates and the mirror
    /// copies its vertical state exactly. Once a side is latched at its
    /// portal it is excluded from integration and ceiling clamping; the
    /// remaining body integrates on its own.
    pub fn integrate(&mut self, at_portal: [bool; 2], config: &SimConfig) {
        let left_active = !at_portal[Side::Left.index()];
        let right_active = !at_portal[Side::Right.index()];

        if left_active {
            self.primary.integrate(config.ground_level);
            self.primary.clamp_ceiling(config.height_ceiling);
        }

        if right_active {
            if left_active {
                self.mirror.pos.y = self.primary.pos.y;
                self.mirror.velocity_y = self.primary.velocity_y;
                self.mirror.is_jumping = self.primary.is_jumping;
            } else {
                self.mirror.integrate(config.ground_level);
                self.mirror.clamp_ceiling(config.height_ceiling);
            }
        }
    }

    /// Reset both bodies to the level start.
    pub fn reset(&mut self, config: &SimConfig) {
        self.primary.reset(config);
        self.mirror.reset(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE_AT_PORTAL: [bool; 2] = [false, false];

    fn pair() -> (MirrorPair, SimConfig) {
        let config = SimConfig::default();
        (MirrorPair::new(&config), config)
    }

    #[test]
    fn test_horizontal_input_is_inverted() {
        let (mut pair, config) = pair();
        let (px, mx) = (pair.primary.pos.x, pair.mirror.pos.x);

        pair.apply_horizontal(true, false, NONE_AT_PORTAL, &config);
        assert_eq!(pair.primary.pos.x, px - config.speed);
        assert_eq!(pair.mirror.pos.x, mx + config.speed);

        pair.apply_horizontal(false, true, NONE_AT_PORTAL, &config);
        assert_eq!(pair.primary.pos.x, px);
        assert_eq!(pair.mirror.pos.x, mx);
    }

    #[test]
    fn test_vertical_state_shared_exactly() {
        let (mut pair, config) = pair();
        pair.apply_jump(NONE_AT_PORTAL);

        for _ in 0..10 {
            pair.integrate(NONE_AT_PORTAL, &config);
            assert_eq!(pair.mirror.pos.y, pair.primary.pos.y);
            assert_eq!(pair.mirror.velocity_y, pair.primary.velocity_y);
            assert_eq!(pair.mirror.is_jumping, pair.primary.is_jumping);
        }
    }

    #[test]
    fn test_at_portal_side_ignores_input() {
        let (mut pair, config) = pair();
        let at_portal = [true, false];
        let px = pair.primary.pos.x;
        let mx = pair.mirror.pos.x;

        pair.apply_horizontal(true, false, at_portal, &config);
        assert_eq!(pair.primary.pos.x, px);
        assert_eq!(pair.mirror.pos.x, mx + config.speed);
    }

    #[test]
    fn test_remaining_side_integrates_alone() {
        let (mut pair, config) = pair();
        let at_portal = [true, false];
        let frozen_y = pair.primary.pos.y;

        pair.apply_jump(at_portal);
        assert!(!pair.primary.is_jumping);
        assert!(pair.mirror.is_jumping);

        pair.integrate(at_portal, &config);
        assert_eq!(pair.primary.pos.y, frozen_y);
        assert_eq!(pair.mirror.pos.y, 20.0 + 11.5);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn mirror_tracks_primary_vertically(inputs in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..300)) {
                let config = SimConfig::default();
                let mut pair = MirrorPair::new(&config);
                for (left, right, jump) in inputs {
                    pair.apply_horizontal(left, right, NONE_AT_PORTAL, &config);
                    if jump {
                        pair.apply_jump(NONE_AT_PORTAL);
                    }
                    pair.integrate(NONE_AT_PORTAL, &config);
                    prop_assert_eq!(pair.mirror.pos.y, pair.primary.pos.y);
                    prop_assert_eq!(pair.mirror.velocity_y, pair.primary.velocity_y);
                }
            }
        }
    }
}
