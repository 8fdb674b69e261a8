//! Terminal Flappy Bird.
//!
//! The gameplay core (`core`) is pure and tick-driven; the terminal shell
//! (`term`, `input`, the binary) feeds it real time and key events and draws
//! its snapshots. `highscore` persists the best score behind a checksum.

pub mod core;
pub mod highscore;
pub mod input;
pub mod term;
pub mod types;
