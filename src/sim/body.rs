//! Character kinematics
//!
//! One body per player slot. Vertical motion is gravity-integrated per tick;
//! horizontal motion is discrete steps clamped to the section bounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// Which section a character occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Index into per-side arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// The other side.
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A character body.
///
/// Position is the bottom-left corner in the body's own section coordinates,
/// y measured up from the section floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub side: Side,
    pub pos: Vec2,
    pub velocity_y: f32,
    pub is_jumping: bool,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
}

impl Body {
    pub fn new(side: Side, config: &SimConfig) -> Self {
        Self {
            side,
            pos: config.start_pos(),
            velocity_y: 0.0,
            is_jumping: false,
            width: config.character_size.x,
            height: config.character_size.y,
            speed: config.speed,
            jump_force: config.jump_force,
            gravity: config.gravity,
        }
    }

    /// Begin a jump. A request while airborne is a no-op.
    pub fn jump(&mut self) {
        if !self.is_jumping {
            self.is_jumping = true;
            self.velocity_y = self.jump_force;
        }
    }

    /// Apply one tick of gravity and vertical motion, clamping to the ground.
    ///
    /// The height ceiling is the caller's concern, see [`Body::clamp_ceiling`].
    pub fn integrate(&mut self, ground_level: f32) {
        self.velocity_y -= self.gravity;
        self.pos.y += self.velocity_y;

        if self.pos.y <= ground_level {
            self.pos.y = ground_level;
            self.velocity_y = 0.0;
            self.is_jumping = false;
        }
    }

    /// Cap y at the height ceiling. Applied by the tick driver after
    /// integration, never inside [`Body::integrate`].
    pub fn clamp_ceiling(&mut self, height_ceiling: f32) {
        if self.pos.y > height_ceiling {
            self.pos.y = height_ceiling;
        }
    }

    /// Step left, clamped to the section's left edge.
    pub fn move_left(&mut self, section_width: f32) {
        self.pos.x = (self.pos.x - self.speed).clamp(0.0, section_width - self.width);
    }

    /// Step right, clamped to the section's right edge.
    pub fn move_right(&mut self, section_width: f32) {
        self.pos.x = (self.pos.x + self.speed).clamp(0.0, section_width - self.width);
    }

    /// Reset to the level start position with zeroed motion.
    pub fn reset(&mut self, config: &SimConfig) {
        self.pos = config.start_pos();
        self.velocity_y = 0.0;
        self.is_jumping = false;
    }

    /// Center of the bounding box, for the circular monster metric.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Body {
        Body::new(Side::Left, &SimConfig::default())
    }

    #[test]
    fn test_jump_then_integrate() {
        let mut b = body();
        assert_eq!(b.pos.y, 20.0);
        assert_eq!(b.velocity_y, 0.0);

        b.jump();
        assert!(b.is_jumping);
        assert_eq!(b.velocity_y, 12.0);

        b.integrate(20.0);
        assert_eq!(b.velocity_y, 11.5);
        assert_eq!(b.pos.y, 31.5);
        assert!(b.is_jumping);
    }

    #[test]
    fn test_jump_while_airborne_is_noop() {
        let mut b = body();
        b.jump();
        b.integrate(20.0);
        let velocity = b.velocity_y;

        b.jump();
        assert_eq!(b.velocity_y, velocity);
    }

    #[test]
    fn test_ground_clamp() {
        let mut b = body();
        b.jump();
        // Fall back down.
        for _ in 0..100 {
            b.integrate(20.0);
        }
        assert_eq!(b.pos.y, 20.0);
        assert_eq!(b.velocity_y, 0.0);
        assert!(!b.is_jumping);
    }

    #[test]
    fn test_move_left_clamped_at_zero() {
        let mut b = body();
        b.pos.x = 0.0;
        b.move_left(600.0);
        assert_eq!(b.pos.x, 0.0);
    }

    #[test]
    fn test_move_right_clamped_at_far_edge() {
        let mut b = body();
        b.pos.x = 558.0;
        b.move_right(600.0);
        assert_eq!(b.pos.x, 560.0);
        b.move_right(600.0);
        assert_eq!(b.pos.x, 560.0);
    }

    #[test]
    fn test_ceiling_applied_separately() {
        let mut b = body();
        b.pos.y = 400.0;
        b.velocity_y = 5.0;
        b.integrate(20.0);
        assert!(b.pos.y > 300.0);
        b.clamp_ceiling(300.0);
        assert_eq!(b.pos.y, 300.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ground_holds_for_any_history(steps in proptest::collection::vec(0u8..3, 1..200)) {
                let mut b = body();
                for step in steps {
                    match step {
                        0 => b.jump(),
                        1 => b.move_left(600.0),
                        _ => b.move_right(600.0),
                    }
                    b.integrate(20.0);
                    b.clamp_ceiling(300.0);
                    prop_assert!(b.pos.y >= 20.0);
                    prop_assert!(b.pos.y <= 300.0);
                    prop_assert!(b.pos.x >= 0.0);
                    prop_assert!(b.pos.x <= 560.0);
                }
            }
        }
    }
}
