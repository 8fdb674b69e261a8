//! Render-layer tests: snapshots map to framebuffer cells without touching a
//! real terminal.

use tui_flappy::core::{GameState, Pipe, SimpleRng};
use tui_flappy::term::{GameView, Skin, Viewport};
use tui_flappy::types::FieldConfig;

fn state_with_pipe() -> GameState {
    let mut state = GameState::new(1, FieldConfig::default());
    let mut rng = SimpleRng::new(1);
    let mut pipe = Pipe::new(state.field.width, &state.template, &mut rng);
    pipe.x = 400.0;
    pipe.gap_y = 200.0;
    state.pipes.push(pipe);
    state
}

fn row_text(fb: &tui_flappy::term::FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).unwrap().ch)
        .collect()
}

#[test]
fn test_render_fills_viewport() {
    let state = state_with_pipe();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);
}

#[test]
fn test_hud_shows_score_and_best() {
    let mut state = state_with_pipe();
    state.score = 3;
    state.best = 12;

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
    assert!(row_text(&fb, 0).contains("SCORE 3"));
    assert!(row_text(&fb, 1).contains("BEST  12"));
}

#[test]
fn test_pipe_cells_are_drawn() {
    let state = state_with_pipe();
    let fb = GameView::new(Skin::Shape).render(&state.snapshot(), Viewport::new(80, 24));

    // Pipe occupies x 400..450 of 800 -> columns 40..45. Top segment covers
    // logical y 0..200 -> rows 0..8. Row 3 avoids the HUD text rows.
    assert_eq!(fb.get(41, 3).unwrap().ch, '█');
    // The gap (logical 200..400 -> rows 8..16) stays sky.
    assert_eq!(fb.get(41, 12).unwrap().ch, ' ');
}

#[test]
fn test_sprite_skin_uses_patterned_glyphs() {
    let state = state_with_pipe();
    let fb = GameView::new(Skin::Sprite).render(&state.snapshot(), Viewport::new(80, 24));
    assert_eq!(fb.get(41, 3).unwrap().ch, '▒');
}

#[test]
fn test_bird_is_drawn_at_its_bounds() {
    let state = state_with_pipe();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));

    // Bird box (100,300,40,40) of 800x600 -> columns 10..14, rows 12..14.
    assert_eq!(fb.get(10, 12).unwrap().ch, '▓');
}

#[test]
fn test_game_over_overlay() {
    let mut state = state_with_pipe();
    state.game_over = true;

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
    let screen: Vec<String> = (0..fb.height()).map(|y| row_text(&fb, y)).collect();
    assert!(screen.iter().any(|row| row.contains("GAME OVER")));
    assert!(screen.iter().any(|row| row.contains("PRESS R TO RESTART")));
}

#[test]
fn test_no_overlay_while_running() {
    let state = state_with_pipe();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
    let screen: Vec<String> = (0..fb.height()).map(|y| row_text(&fb, y)).collect();
    assert!(!screen.iter().any(|row| row.contains("GAME OVER")));
}
