//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Playfield dimensions in logical units
pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 600.0;

/// Bird physics (logical units per tick)
pub const GRAVITY: f32 = 0.5;
pub const JUMP_VELOCITY: f32 = -10.0;

/// Bird geometry
pub const BIRD_X: f32 = 100.0;
pub const BIRD_START_Y: f32 = 300.0;
pub const BIRD_SIZE: f32 = 40.0;

/// Pipe geometry and motion
pub const PIPE_SPEED: f32 = 3.0;
pub const PIPE_WIDTH: f32 = 50.0;
pub const GAP_SIZE: f32 = 200.0;

/// Gap start offset is uniform in [GAP_MIN_Y, GAP_MIN_Y + GAP_RANGE)
pub const GAP_MIN_Y: f32 = 100.0;
pub const GAP_RANGE: u32 = 300;

/// Seconds between pipe spawns
pub const SPAWN_INTERVAL_SECS: f32 = 2.0;

/// Pipes are removed once x drops below this (fully offscreen)
pub const PIPE_EXPIRY_X: f32 = -50.0;

/// Frame timing for the terminal runner (milliseconds)
pub const FRAME_MS: u64 = 16;

/// Playfield dimensions, passed into the core instead of read from globals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// Axis-aligned rectangle in logical playfield units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Exact AABB overlap test with non-inclusive edges: rectangles that
    /// merely touch do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Flap,
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Flap => "flap",
            GameAction::Restart => "restart",
        }
    }
}
