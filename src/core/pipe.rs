//! Pipe pair entity and its shared geometry template.
//!
//! Every pipe is a top and bottom segment sharing one x-position with a fixed
//! vertical gap between them. Geometry common to all pipes (segment width, gap
//! size, playfield height) lives in an immutable `PipeTemplate` built once per
//! session and passed by reference at construction.

use crate::core::rng::SimpleRng;
use crate::types::{
    FieldConfig, Rect, GAP_MIN_Y, GAP_RANGE, GAP_SIZE, PIPE_EXPIRY_X, PIPE_SPEED, PIPE_WIDTH,
};

/// Geometry shared by all pipes in a session. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeTemplate {
    pub width: f32,
    pub gap_size: f32,
    pub field_height: f32,
}

impl PipeTemplate {
    pub fn new(field: FieldConfig) -> Self {
        Self {
            width: PIPE_WIDTH,
            gap_size: GAP_SIZE,
            field_height: field.height,
        }
    }
}

/// One pipe pair. Geometry is fixed at creation; only `x` and the scoring
/// flag mutate afterward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Leading edge. Shared by both segments, which move in lockstep.
    pub x: f32,
    /// Top of the gap; equals the top segment's height.
    pub gap_y: f32,
    /// Set once, when the leading edge crosses the bird's x.
    pub passed: bool,
    width: f32,
    gap_size: f32,
    field_height: f32,
}

impl Pipe {
    /// Spawn a pipe at `x` with a gap offset drawn from the session RNG.
    pub fn new(x: f32, template: &PipeTemplate, rng: &mut SimpleRng) -> Self {
        let gap_y = GAP_MIN_Y + rng.next_range(GAP_RANGE) as f32;
        Self {
            x,
            gap_y,
            passed: false,
            width: template.width,
            gap_size: template.gap_size,
            field_height: template.field_height,
        }
    }

    /// Advance one tick. Both segments share `x`, so they cannot drift apart.
    pub fn update(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// True once the whole shape is past the left edge and safe to remove.
    pub fn is_expired(&self) -> bool {
        self.x < PIPE_EXPIRY_X
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_y)
    }

    pub fn bottom_rect(&self) -> Rect {
        let bottom_y = self.gap_y + self.gap_size;
        Rect::new(self.x, bottom_y, self.width, self.field_height - bottom_y)
    }

    /// True if `bounds` overlaps either segment.
    pub fn check_collision(&self, bounds: &Rect) -> bool {
        bounds.intersects(&self.top_rect()) || bounds.intersects(&self.bottom_rect())
    }
}
