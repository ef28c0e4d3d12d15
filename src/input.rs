//! Input event queue
//!
//! Embedders push discrete [`InputEvent`]s as they happen; the simulation
//! drains the queue exactly once per tick, in arrival order, into a
//! [`TickInput`]. Held keys survive across ticks, one-shot actions do not.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A discrete input event from the embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    JumpPressed,
    JumpReleased,
    PauseToggled,
    RestartRequested,
    AdvanceLevelRequested,
    StartRequested,
    MenuRequested,
}

/// Flattened input for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held directions.
    pub move_left: bool,
    pub move_right: bool,
    /// Jump was pressed since the last tick.
    pub jump: bool,
    /// Pause toggles since the last tick were odd.
    pub pause: bool,
    pub restart: bool,
    pub advance: bool,
    pub start: bool,
    pub menu: bool,
}

/// Ordered queue of pending events plus the held-key state that persists
/// between ticks.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
    left_held: bool,
    right_held: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Consume all pending events in order and produce this tick's input.
    pub fn drain(&mut self) -> TickInput {
        let mut input = TickInput::default();

        while let Some(event) = self.events.pop_front() {
            match event {
                InputEvent::MoveLeftStart => self.left_held = true,
                InputEvent::MoveLeftStop => self.left_held = false,
                InputEvent::MoveRightStart => self.right_held = true,
                InputEvent::MoveRightStop => self.right_held = false,
                InputEvent::JumpPressed => input.jump = true,
                InputEvent::JumpReleased => {}
                InputEvent::PauseToggled => input.pause = !input.pause,
                InputEvent::RestartRequested => input.restart = true,
                InputEvent::AdvanceLevelRequested => input.advance = true,
                InputEvent::StartRequested => input.start = true,
                InputEvent::MenuRequested => input.menu = true,
            }
        }

        input.move_left = self.left_held;
        input.move_right = self.right_held;
        input
    }
}
