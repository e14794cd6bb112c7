//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{is_numbered, GameSnapshot, Level, SessionState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, ANCHOR, CHAIN_PALETTE_SIZE};

/// Chain colours, picked by chain index modulo the palette size.
pub const CHAIN_PALETTE: [Rgb; CHAIN_PALETTE_SIZE] = [
    Rgb::new(220, 80, 80),
    Rgb::new(100, 220, 120),
    Rgb::new(240, 220, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(200, 120, 220),
    Rgb::new(80, 220, 220),
];

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Colour of chain `index`
pub fn chain_color(index: usize) -> Rgb {
    CHAIN_PALETTE[index % CHAIN_PALETTE.len()]
}

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the puzzle grid.
pub struct GameView {
    /// Minimum grid cell width in terminal columns. Levels with wider labels
    /// get wider cells.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two digits plus a gap.
        Self {
            cell_w: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Cell width for `level`: the widest label plus a one-column gap.
    pub fn cell_width(&self, level: &Level) -> u16 {
        let widest = level
            .cells()
            .map(|(_, value)| cell_label(value).chars().count())
            .max()
            .unwrap_or(0);
        let wanted = clamp_u16(widest).saturating_add(1);
        wanted.max(self.cell_w)
    }

    /// Outer size of the bordered grid for `snap`
    pub fn frame_size(&self, snap: &GameSnapshot<'_>) -> (u16, u16) {
        let cols = clamp_u16(snap.level.max_row_len());
        let rows = clamp_u16(snap.level.row_count());
        (
            cols.saturating_mul(self.cell_width(snap.level))
                .saturating_add(2),
            rows.saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2).min(viewport.width),
            frame_h.saturating_sub(2).min(viewport.height),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let cell_w = self.cell_width(snap.level);
        for (pos, value) in snap.level.cells() {
            self.draw_grid_cell(fb, snap, (start_x, start_y), cell_w, pos, value);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.state {
            SessionState::Playing(_) => {}
            SessionState::LevelComplete(_) => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "LEVEL COMPLETE")
            }
            SessionState::AllLevelsComplete => self.draw_overlay_text(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "ALL LEVELS COMPLETE",
            ),
            SessionState::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        // Only the visible part of an oversized frame is drawn.
        let visible_w = w.min(fb.width().saturating_sub(x));
        let visible_h = h.min(fb.height().saturating_sub(y));
        for dx in 1..visible_w.min(w - 1) {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, bottom, '─', style);
        }
        for dy in 1..visible_h.min(h - 1) {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(right, y + dy, '│', style);
        }
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot<'_>,
        (start_x, start_y): (u16, u16),
        cell_w: u16,
        pos: Position,
        value: i32,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(clamp_u16(pos.col).saturating_mul(cell_w));
        let py = start_y.saturating_add(1).saturating_add(clamp_u16(pos.row));
        if px >= fb.width() || py >= fb.height() {
            return;
        }

        let style = match snap.owner(pos) {
            Some(chain) => {
                let style = CellStyle::new(chain_color(chain), BOARD_BG).bold();
                if snap.is_current_tip(pos) {
                    // Selected tip: swap colours so the cursor stands out.
                    CellStyle::new(BOARD_BG, chain_color(chain)).bold()
                } else {
                    style
                }
            }
            None if is_numbered(value) => CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG),
            // Inert cells stay blank.
            None => return,
        };

        let label = cell_label(value);
        let label_w = clamp_u16(label.chars().count());
        let width = cell_w - 1;
        fb.fill_rect(px, py, width, 1, ' ', style);
        fb.put_str(px.saturating_add(width.saturating_sub(label_w)), py, &label, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            &format!(
                "{} ({}/{})",
                snap.level.number(),
                snap.level_index + 1,
                snap.level_count
            ),
            value,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CHAIN", label);
        y = y.saturating_add(1);
        if snap.chains.is_empty() {
            fb.put_str(panel_x, y, "-", value);
        } else {
            let chain_style =
                CellStyle::new(chain_color(snap.current_chain), PANEL_BG).bold();
            fb.put_str(
                panel_x,
                y,
                &format!("Chain {}/{}", snap.current_chain + 1, snap.chains.len()),
                chain_style,
            );
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "POSITION", label);
        y = y.saturating_add(1);
        match snap.current_tip() {
            Some(tip) => fb.put_str(
                panel_x,
                y,
                &format!("row {}, col {}", tip.row + 1, tip.col + 1),
                value,
            ),
            None => fb.put_str(panel_x, y, "-", value),
        };
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEFT", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.remaining().to_string(), value);
        y = y.saturating_add(2);

        let help = value.dim();
        for line in HELP_LINES {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

const HELP_LINES: [&str; 6] = [
    "N/S/E/W move",
    "B undo",
    "R erase chain",
    "X restart",
    "C next chain",
    "Q quit",
];

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn cell_label(value: i32) -> String {
    if value == ANCHOR {
        "x".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_by_chain_index() {
        assert_eq!(chain_color(0), chain_color(CHAIN_PALETTE_SIZE));
        assert_ne!(chain_color(0), chain_color(1));
    }

    #[test]
    fn anchors_are_labelled_x() {
        assert_eq!(cell_label(ANCHOR), "x");
        assert_eq!(cell_label(12), "12");
    }

    #[test]
    fn cell_width_grows_with_the_widest_label() {
        let view = GameView::default();
        assert_eq!(view.cell_width(&Level::new(1, vec![vec![-1, 1, 2]])), 3);
        assert_eq!(view.cell_width(&Level::new(1, vec![vec![-1, 100]])), 4);
        assert_eq!(view.cell_width(&Level::new(1, vec![vec![-1, 12345]])), 6);
        assert_eq!(GameView::new(5).cell_width(&Level::new(1, vec![vec![-1, 1]])), 5);
    }
}
