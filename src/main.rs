//! Terminal Flappy Bird runner.
//!
//! Frame loop: poll input until the next frame is due, advance the core by
//! one tick with the measured elapsed time, persist the best score when it
//! improves, and draw.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_flappy::core::GameState;
use tui_flappy::highscore::{HighscoreStore, LoadOutcome};
use tui_flappy::input::{handle_key_event, should_quit};
use tui_flappy::term::{GameView, Skin, TerminalRenderer, Viewport};
use tui_flappy::types::{FieldConfig, FRAME_MS};

fn main() -> Result<()> {
    let store = HighscoreStore::new()?;
    let loaded = store.load();
    match loaded {
        LoadOutcome::Missing => eprintln!("no highscore file found, starting fresh"),
        LoadOutcome::Tampered => eprintln!("highscore file tampered with, resetting to 0"),
        LoadOutcome::Loaded(_) => {}
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &store, loaded.best());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, store: &HighscoreStore, best: u32) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
        ^ std::process::id();
    let mut game = GameState::new(seed, FieldConfig::default());
    game.set_best(best);

    let view = GameView::new(Skin::Sprite);
    let frame_duration = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
            }
        }

        // Tick.
        if last_frame.elapsed() >= frame_duration {
            let dt = last_frame.elapsed().as_secs_f32();
            last_frame = Instant::now();

            let outcome = game.tick(dt);
            if outcome.new_best {
                // Non-fatal: a failed save only costs the record, not the run.
                let _ = store.save(game.best);
            }

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(&game.snapshot(), Viewport::new(w, h));
            term.draw(&fb)?;
        }
    }
}
