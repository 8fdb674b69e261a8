//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Two skins exist because the game originally shipped in a shape-drawn and a
//! sprite-drawn variant; here they are just two static pipe art templates
//! over the same core.

use crate::core::snapshot::{GameSnapshot, PipeSnapshot};
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::Rect;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Pipe rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    /// Flat colored blocks.
    #[default]
    Shape,
    /// Patterned glyphs with a darker cap row at the gap.
    Sprite,
}

/// Static pipe art, shared by every pipe drawn with a given skin.
struct PipeArt {
    body: char,
    cap: char,
    body_fg: Rgb,
    cap_fg: Rgb,
}

const SHAPE_ART: PipeArt = PipeArt {
    body: '█',
    cap: '█',
    body_fg: Rgb::new(40, 160, 40),
    cap_fg: Rgb::new(40, 160, 40),
};

const SPRITE_ART: PipeArt = PipeArt {
    body: '▒',
    cap: '▄',
    body_fg: Rgb::new(100, 190, 50),
    cap_fg: Rgb::new(60, 110, 25),
};

const SKY: Rgb = Rgb::new(135, 206, 235);
const BIRD: Rgb = Rgb::new(245, 205, 60);
const TEXT: Rgb = Rgb::new(255, 255, 255);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    skin: Skin,
}

impl Default for GameView {
    fn default() -> Self {
        Self { skin: Skin::Shape }
    }
}

impl GameView {
    pub fn new(skin: Skin) -> Self {
        Self { skin }
    }

    fn art(&self) -> &'static PipeArt {
        match self.skin {
            Skin::Shape => &SHAPE_ART,
            Skin::Sprite => &SPRITE_ART,
        }
    }

    /// Render a snapshot into a framebuffer sized to the viewport.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let sky = Style::new(SKY, SKY);
        fb.clear(crate::term::fb::Cell { ch: ' ', style: sky });

        for pipe in &snapshot.pipes {
            self.draw_pipe(&mut fb, snapshot, viewport, pipe);
        }
        self.draw_bird(&mut fb, snapshot, viewport);
        self.draw_hud(&mut fb, snapshot);

        if snapshot.game_over {
            self.draw_game_over(&mut fb, viewport);
        }

        fb
    }

    fn draw_pipe(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        viewport: Viewport,
        pipe: &PipeSnapshot,
    ) {
        let art = self.art();
        let body = Style::new(art.body_fg, SKY);
        let cap = Style::new(art.cap_fg, SKY);

        if let Some((x, y, w, h)) = cell_rect(&pipe.top, snapshot, viewport) {
            fb.fill_rect(x, y, w, h, art.body, body);
            // Cap row sits on the gap side of each segment.
            fb.fill_rect(x, y + h - 1, w, 1, art.cap, cap);
        }
        if let Some((x, y, w, h)) = cell_rect(&pipe.bottom, snapshot, viewport) {
            fb.fill_rect(x, y, w, h, art.body, body);
            fb.fill_rect(x, y, w, 1, art.cap, cap);
        }
    }

    fn draw_bird(&self, fb: &mut FrameBuffer, snapshot: &GameSnapshot, viewport: Viewport) {
        if let Some((x, y, w, h)) = cell_rect(&snapshot.bird_bounds, snapshot, viewport) {
            fb.fill_rect(x, y, w, h, '▓', Style::new(BIRD, SKY));
            // Eye on the leading side, when there is room for one.
            if w >= 2 && h >= 1 {
                fb.put_char(x + w - 1, y, 'o', Style::new(Rgb::new(30, 30, 30), SKY));
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snapshot: &GameSnapshot) {
        let label = Style::new(TEXT, SKY).bold();
        fb.put_str(1, 0, &format!("SCORE {}", snapshot.score), label);
        fb.put_str(1, 1, &format!("BEST  {}", snapshot.best), label);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let style = Style::new(TEXT, Rgb::new(0, 0, 0)).bold();
        let mid_y = viewport.height / 2;
        center_str(fb, viewport, mid_y.saturating_sub(1), "GAME OVER", style);
        center_str(fb, viewport, mid_y + 1, "PRESS R TO RESTART", style);
    }
}

fn center_str(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: Style) {
    let text_w = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}

/// Map a logical playfield rectangle to whole terminal cells, clipped to the
/// viewport. Returns `None` when nothing of it is visible.
fn cell_rect(
    rect: &Rect,
    snapshot: &GameSnapshot,
    viewport: Viewport,
) -> Option<(u16, u16, u16, u16)> {
    let sx = viewport.width as f32 / snapshot.field.width;
    let sy = viewport.height as f32 / snapshot.field.height;

    let x0 = (rect.x * sx).floor().max(0.0) as u16;
    let y0 = (rect.y * sy).floor().max(0.0) as u16;
    let x1 = ((rect.x + rect.w) * sx).ceil().max(0.0) as u16;
    let y1 = ((rect.y + rect.h) * sy).ceil().max(0.0) as u16;

    let x1 = x1.min(viewport.width);
    let y1 = y1.min(viewport.height);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some((x0, y0, x1 - x0, y1 - y0))
}
