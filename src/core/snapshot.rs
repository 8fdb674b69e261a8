//! Read-only view of a session, handed to the render layer each tick.

use crate::types::{FieldConfig, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSnapshot {
    pub x: f32,
    pub gap_y: f32,
    pub top: Rect,
    pub bottom: Rect,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub field: FieldConfig,
    pub bird_y: f32,
    pub bird_velocity: f32,
    pub bird_bounds: Rect,
    pub pipes: Vec<PipeSnapshot>,
    pub score: u32,
    pub best: u32,
    pub game_over: bool,
}
