//! Terminal rendering layer.
//!
//! `fb` is a plain styled-character framebuffer, `game_view` fills one from a
//! core snapshot (pure, unit-testable), and `renderer` flushes it to a real
//! terminal via crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, FrameBuffer, Rgb, Style};
pub use game_view::{GameView, Skin, Viewport};
pub use renderer::TerminalRenderer;
