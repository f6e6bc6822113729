//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellState, GameSnapshot, Outcome};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Shown instead of the board when the viewport cannot hold it.
pub const TOO_SMALL_MESSAGE: &str = "Terminal is too small. Please resize.";

const PANEL_GAP: u16 = 2;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const HIDDEN_BG: Rgb = Rgb::new(70, 70, 82);
const OPEN_BG: Rgb = Rgb::new(28, 28, 36);
const CURSOR_BG: Rgb = Rgb::new(210, 180, 60);
const MINE_BG: Rgb = Rgb::new(170, 30, 30);
const WON_BG: Rgb = Rgb::new(40, 150, 60);

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

/// A lightweight terminal renderer for the Minesweeper board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.width.saturating_mul(self.cell_w).saturating_add(2),
            snap.height.saturating_add(2),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and cleared first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        if frame_w > viewport.width || frame_h > viewport.height {
            fb.put_str(0, 0, TOO_SMALL_MESSAGE, CellStyle::default());
            return;
        }

        let panel_w = panel_width();
        let total_w = if viewport.width >= frame_w + PANEL_GAP + panel_w {
            frame_w + PANEL_GAP + panel_w
        } else {
            frame_w
        };
        let start_x = (viewport.width - total_w) / 2;
        let start_y = (viewport.height - frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);
        for row in 0..snap.height {
            for col in 0..snap.width {
                let state = snap.cell(row, col).unwrap_or(CellState::Unchecked);
                let is_cursor = snap.cursor.row == row && snap.cursor.col == col;
                self.draw_cell(fb, start_x, start_y, row, col, state, is_cursor);
            }
        }

        match snap.outcome {
            Outcome::Won => {
                self.draw_banner(fb, start_x, start_y + frame_h - 1, frame_w, " YOU WIN ")
            }
            Outcome::Lost => {
                self.draw_banner(fb, start_x, start_y + frame_h - 1, frame_w, " GAME OVER ")
            }
            Outcome::Playing => {}
        }

        if total_w > frame_w {
            self.draw_side_panel(fb, snap, start_x + frame_w + PANEL_GAP, start_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        state: CellState,
        is_cursor: bool,
    ) {
        let (ch, mut style) = cell_glyph(state);
        if is_cursor {
            style = CellStyle::new(BLACK, CURSOR_BG).bold();
        }

        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row;
        fb.put_char(px, py, ch, style);
        fb.fill_rect(px + 1, py, self.cell_w - 1, 1, ' ', style);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let bx = x + frame_w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold();
        fb.put_str(bx, y, text, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, start_y: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

        // Rows past the bottom edge are clipped by the framebuffer.
        let mut y = start_y;
        fb.put_str(x, y, "MINES", label);
        y = y.saturating_add(1);
        fb.put_u32(x, y, snap.max_flags, value);
        y = y.saturating_add(2);

        fb.put_str(x, y, "FLAGS LEFT", label);
        y = y.saturating_add(1);
        fb.put_u32(x, y, snap.flags_left(), value);
        y = y.saturating_add(2);

        let safe_cells = (snap.width as u32 * snap.height as u32).saturating_sub(snap.max_flags);
        fb.put_str(x, y, "OPENED", label);
        y = y.saturating_add(1);
        let end = fb.put_u32(x, y, snap.revealed, value);
        let end = fb.put_str(end, y, "/", value);
        fb.put_u32(end, y, safe_cells, value);
        y = y.saturating_add(2);

        let status = match snap.outcome {
            Outcome::Playing => "PLAYING",
            Outcome::Won => "CLEARED",
            Outcome::Lost => "BOOM",
        };
        fb.put_str(x, y, status, label);
        y = y.saturating_add(2);

        for text in HELP_LINES {
            fb.put_str(x, y, text, value.dim());
            y = y.saturating_add(1);
        }
    }
}

const HELP_LINES: [&str; 4] = [
    "arrows/wasd move",
    "enter/space open",
    "f flag",
    "q quit",
];

fn panel_width() -> u16 {
    HELP_LINES
        .iter()
        .map(|l| l.chars().count() as u16)
        .max()
        .unwrap_or(0)
}

/// Glyph and style for one visible cell state.
pub fn cell_glyph(state: CellState) -> (char, CellStyle) {
    match state {
        CellState::Unchecked => ('·', CellStyle::new(Rgb::new(150, 150, 160), HIDDEN_BG).dim()),
        CellState::Revealed(0) => (' ', CellStyle::new(Rgb::new(120, 120, 120), OPEN_BG)),
        CellState::Revealed(n) => {
            let ch = char::from_digit(n as u32, 10).unwrap_or('?');
            (ch, CellStyle::new(count_color(n), OPEN_BG).bold())
        }
        CellState::Flagged => ('F', CellStyle::new(Rgb::new(255, 90, 90), HIDDEN_BG).bold()),
        CellState::RevealedMine => ('*', CellStyle::new(Rgb::new(255, 255, 255), MINE_BG).bold()),
        CellState::WonMarker => (' ', CellStyle::new(BLACK, WON_BG)),
    }
}

fn count_color(n: u8) -> Rgb {
    match n {
        1 => Rgb::new(90, 140, 255),
        2 => Rgb::new(90, 200, 110),
        3 => Rgb::new(240, 90, 90),
        4 => Rgb::new(170, 110, 240),
        5 => Rgb::new(230, 150, 60),
        6 => Rgb::new(80, 210, 210),
        7 => Rgb::new(230, 230, 230),
        _ => Rgb::new(160, 160, 160),
    }
}
