//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It owns the screen layout, so it is also
//! where pointer positions are resolved back into tiles ([`GameView::hit_test`]).

use crate::core::{countdown_label, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, GuessClass, GRID_SIZE};

const BACKGROUND: Rgb = Rgb::new(75, 94, 72);
const FRAME: Rgb = Rgb::new(48, 60, 46);
const INK: Rgb = Rgb::new(30, 30, 30);
const PAPER: Rgb = Rgb::new(240, 240, 235);
const WOOD: Rgb = Rgb::new(222, 184, 135);
const WOOD_EDGE: Rgb = Rgb::new(176, 132, 84);
const COVER_WHITE: Rgb = Rgb::new(255, 255, 255);
const COVER_GREEN: Rgb = Rgb::new(135, 247, 135);
const COVER_YELLOW: Rgb = Rgb::new(254, 252, 130);
const STAR_GOLD: Rgb = Rgb::new(255, 200, 40);

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

/// Where everything goes for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Top-left of tile (0, 0).
    pub grid_x: u16,
    pub grid_y: u16,
    /// Left edge of the side panel, if there is room for one.
    pub panel_x: Option<u16>,
}

/// Minimum side panel width.
const PANEL_MIN_W: u16 = 20;

/// A terminal renderer for the Word Hunt screen.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Space between tiles (columns, rows).
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 reads close to square with typical terminal glyphs.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap_x: 1,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn grid_w(&self) -> u16 {
        let n = GRID_SIZE as u16;
        n * self.tile_w + (n - 1) * self.gap_x
    }

    fn grid_h(&self) -> u16 {
        let n = GRID_SIZE as u16;
        n * self.tile_h + (n - 1) * self.gap_y
    }

    /// Compute the screen layout. The grid frame and side panel are centered
    /// together horizontally.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        // One column of padding on each side inside the border.
        let frame_w = self.grid_w() + 4;
        let frame_h = self.grid_h() + 2;

        let with_panel = frame_w + 2 + PANEL_MIN_W;
        let has_panel = viewport.width >= with_panel;
        let total_w = if has_panel { with_panel } else { frame_w };

        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            grid_x: frame_x + 2,
            grid_y: frame_y + 1,
            panel_x: has_panel.then(|| frame_x + frame_w + 2),
        }
    }

    /// Top-left screen cell of a tile.
    pub fn tile_origin(&self, layout: &Layout, coord: Coord) -> (u16, u16) {
        (
            layout.grid_x + coord.col as u16 * (self.tile_w + self.gap_x),
            layout.grid_y + coord.row as u16 * (self.tile_h + self.gap_y),
        )
    }

    /// Resolve a screen cell to the tile under it.
    ///
    /// Only a tile's interior counts; its one-cell rim and the gaps between
    /// tiles do not. Cutting across a corner while dragging diagonally
    /// therefore doesn't clip the neighbouring tiles.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<Coord> {
        let layout = self.layout(viewport);
        let col = Self::hit_axis(x, layout.grid_x, self.tile_w, self.gap_x)?;
        let row = Self::hit_axis(y, layout.grid_y, self.tile_h, self.gap_y)?;
        Some(Coord::new(row, col))
    }

    fn hit_axis(pos: u16, origin: u16, size: u16, gap: u16) -> Option<u8> {
        let offset = pos.checked_sub(origin)?;
        let step = size + gap;
        let index = offset / step;
        let within = offset % step;
        if index >= GRID_SIZE as u16 || within == 0 || within >= size - 1 {
            return None;
        }
        Some(index as u8)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(PAPER, BACKGROUND).into_cell(' '));

        let layout = self.layout(viewport);
        let border = CellStyle::new(PAPER, FRAME);

        fb.fill_rect(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            ' ',
            CellStyle::new(PAPER, FRAME),
        );
        self.draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                self.draw_tile(fb, &layout, snap, Coord::new(row, col));
            }
        }

        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, snap, viewport, panel_x, layout.frame_y);
        }

        if snap.game_over {
            self.draw_overlay_text(fb, &layout, "TIME UP");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot, coord: Coord) {
        let (x, y) = self.tile_origin(layout, coord);

        let face = if snap.revealed(coord.row, coord.col) {
            COVER_GREEN
        } else if snap.on_path(coord.row, coord.col) {
            class_color(snap.guess_class)
        } else {
            WOOD
        };

        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(INK, face));

        // Rim shading along the bottom row.
        let rim = CellStyle::new(WOOD_EDGE, face);
        for dx in 0..self.tile_w {
            fb.put_char(x + dx, y + self.tile_h - 1, '▁', rim);
        }

        let letter = snap.board[coord.row as usize][coord.col as usize];
        let cx = x + self.tile_w / 2;
        let cy = y + (self.tile_h - 1) / 2;
        fb.put_char(cx, cy, letter, CellStyle::new(INK, face).bold());
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        let title = CellStyle::new(PAPER, BACKGROUND).bold();
        let label = CellStyle::new(PAPER, BACKGROUND).bold();
        let value = CellStyle::new(PAPER, BACKGROUND);
        let dim = CellStyle {
            dim: true,
            ..value
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "Word Hunt", title);
        y = y.saturating_add(2);

        let w = fb.put_str_len(panel_x, y, "WORDS: ", label);
        fb.put_u32(panel_x + w, y, snap.word_count, value);
        y = y.saturating_add(1);

        let w = fb.put_str_len(panel_x, y, "SCORE: ", label);
        fb.put_u32(panel_x + w, y, snap.score, value);
        y = y.saturating_add(2);

        // Current guess on a background matching its class.
        if !snap.guess.is_empty() {
            let style = CellStyle::new(INK, class_color(snap.guess_class)).bold();
            let mut x = panel_x;
            x += fb.put_str_len(x, y, " ", style);
            x += fb.put_str_len(x, y, &snap.guess, style);
            if let Some(points) = snap.guess_points {
                x += fb.put_str_len(x, y, " (+", style);
                x += fb.put_u32(x, y, points, style);
                x += fb.put_str_len(x, y, ")", style);
            }
            fb.put_char(x, y, ' ', style);
        }
        y = y.saturating_add(2);

        let clock = CellStyle::new(INK, COVER_WHITE).bold();
        let countdown = countdown_label(snap.remaining_secs);
        let mut x = panel_x;
        x += fb.put_str_len(x, y, " ", clock);
        x += fb.put_str_len(x, y, &countdown, clock);
        fb.put_char(x, y, ' ', clock);

        let star_x = x + 2;
        if snap.bonus_found {
            fb.put_char(star_x, y, '★', CellStyle::new(STAR_GOLD, BACKGROUND).bold());
        } else {
            fb.put_char(star_x, y, '☆', value);
        }
        y = y.saturating_add(2);

        if !snap.recent.is_empty() {
            fb.put_str(panel_x, y, "FOUND", label);
            y = y.saturating_add(1);
            for found in snap.recent.iter() {
                if y >= viewport.height {
                    break;
                }
                let w = fb.put_str_len(panel_x, y, &found.word, value);
                fb.put_str(panel_x + w + 1, y, "+", dim);
                fb.put_u32(panel_x + w + 2, y, found.points, dim);
                y = y.saturating_add(1);
            }
            y = y.saturating_add(1);
        }

        if y < viewport.height {
            fb.put_str(panel_x, y, "r restart  q quit", dim);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16 + 2;
        let x = layout
            .frame_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_char(x, mid_y, ' ', style);
        fb.put_str(x + 1, mid_y, text, style);
        fb.put_char(x + text_w - 1, mid_y, ' ', style);
    }
}

/// Cover colour for tiles on the path and the guess label.
pub fn class_color(class: GuessClass) -> Rgb {
    match class {
        GuessClass::Invalid => COVER_WHITE,
        GuessClass::Valid => COVER_GREEN,
        GuessClass::AlreadyGuessed => COVER_YELLOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_without_room_for_panel() {
        let view = GameView::default();
        // grid 4*7 + 3 = 31 wide, 4*3 + 3 = 15 tall; frame 35x17.
        let layout = view.layout(Viewport::new(35, 17));
        assert_eq!(layout.frame_w, 35);
        assert_eq!(layout.frame_h, 17);
        assert_eq!((layout.frame_x, layout.frame_y), (0, 0));
        assert_eq!((layout.grid_x, layout.grid_y), (2, 1));
        assert_eq!(layout.panel_x, None);
    }

    #[test]
    fn layout_with_panel() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(57, 17));
        assert_eq!(layout.frame_x, 0);
        assert_eq!(layout.panel_x, Some(37));
    }

    #[test]
    fn hit_axis_skips_rims_and_gaps() {
        // Tile size 7, gap 1: tile 0 covers 0..7, interior 1..=5.
        assert_eq!(GameView::hit_axis(0, 0, 7, 1), None);
        assert_eq!(GameView::hit_axis(1, 0, 7, 1), Some(0));
        assert_eq!(GameView::hit_axis(5, 0, 7, 1), Some(0));
        assert_eq!(GameView::hit_axis(6, 0, 7, 1), None);
        assert_eq!(GameView::hit_axis(7, 0, 7, 1), None);
        assert_eq!(GameView::hit_axis(9, 0, 7, 1), Some(1));
        // Past the last tile.
        assert_eq!(GameView::hit_axis(33, 0, 7, 1), None);
        // Left of the grid.
        assert_eq!(GameView::hit_axis(1, 2, 7, 1), None);
    }

    #[test]
    fn class_colors_match_covers() {
        assert_eq!(class_color(GuessClass::Invalid), COVER_WHITE);
        assert_eq!(class_color(GuessClass::Valid), COVER_GREEN);
        assert_eq!(class_color(GuessClass::AlreadyGuessed), COVER_YELLOW);
    }
}
