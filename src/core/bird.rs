//! Bird entity: gravity integration and flap impulses.
//!
//! The bird never moves horizontally; its x stays fixed and the world scrolls
//! past it. Out-of-bounds detection is the game state's job, so `update`
//! applies no clamping.

use crate::types::{Rect, BIRD_SIZE, BIRD_START_Y, BIRD_X, GRAVITY, JUMP_VELOCITY};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Top-left corner of the bounding box.
    pub x: f32,
    pub y: f32,
    /// Vertical velocity in units per tick. Negative is up.
    pub velocity: f32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            velocity: 0.0,
        }
    }

    /// Advance one tick: accumulate gravity, then integrate position.
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Discrete upward impulse. Overrides any accumulated velocity.
    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
    }

    /// Current axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, BIRD_SIZE, BIRD_SIZE)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}
