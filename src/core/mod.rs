//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod bird;
pub mod game_state;
pub mod pipe;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use bird::Bird;
pub use game_state::{GameState, TickOutcome};
pub use pipe::{Pipe, PipeTemplate};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PipeSnapshot};
