//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Vertical placement of the playfield inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers keep one framebuffer across frames; it is only reallocated when
    /// the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_px_h = BOARD_HEIGHT as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::plain(Rgb::new(80, 80, 90), PLAYFIELD_BG),
        );
        draw_border(
            fb,
            origin_x,
            origin_y,
            frame_w,
            frame_h,
            CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG),
        );

        let board = Playfield {
            view: self,
            origin_x: origin_x + 1,
            origin_y: origin_y + 1,
        };

        for (y, row) in snap.board.iter().enumerate() {
            for (x, id) in row.iter().enumerate() {
                match ShapeKind::from_id(*id) {
                    Some(kind) => board.block(fb, x as i8, y as i8, kind),
                    None => board.fill(fb, x as i8, y as i8, '·', empty_style()),
                }
            }
        }

        if snap.playable() && snap.landing_y > snap.active.y {
            let preview = CellStyle {
                fg: Rgb::from(snap.active.kind.color()),
                bg: PLAYFIELD_BG,
                bold: false,
                dim: true,
            };
            for (dx, dy) in snap.active.shape.cells() {
                board.fill(fb, snap.active.x + dx, snap.landing_y + dy, '░', preview);
            }
        }

        // After game over the final piece is already merged into the board.
        if !snap.game_over() {
            for (dx, dy) in snap.active.shape.cells() {
                board.block(fb, snap.active.x + dx, snap.active.y + dy, snap.active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        if snap.paused() {
            draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, "PAUSED", None);
        } else if snap.game_over() {
            draw_overlay(
                fb,
                origin_x,
                origin_y,
                frame_w,
                frame_h,
                "GAME OVER",
                Some(snap.score),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level as u64),
            ("LINES", snap.lines as u64),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u64(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, &snap.next, panel_x, y);
    }

    /// Draw a piece's shape at a fixed screen position, outside the playfield.
    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &PieceSnapshot, x: u16, y: u16) {
        let style = block_style(piece.kind, PANEL_BG);
        for (dx, dy) in piece.shape.cells() {
            fb.fill_rect(
                x + dx as u16 * self.cell_w,
                y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }
}

/// Board-coordinate drawing helpers, clipped to the 10x20 grid.
struct Playfield<'a> {
    view: &'a GameView,
    origin_x: u16,
    origin_y: u16,
}

impl Playfield<'_> {
    fn fill(&self, fb: &mut FrameBuffer, x: i8, y: i8, ch: char, style: CellStyle) {
        if !(0..BOARD_WIDTH as i8).contains(&x) || !(0..BOARD_HEIGHT as i8).contains(&y) {
            return;
        }
        let w = self.view.cell_w;
        let h = self.view.cell_h;
        fb.fill_rect(
            self.origin_x + x as u16 * w,
            self.origin_y + y as u16 * h,
            w,
            h,
            ch,
            style,
        );
    }

    fn block(&self, fb: &mut FrameBuffer, x: i8, y: i8, kind: ShapeKind) {
        self.fill(fb, x, y, '█', block_style(kind, PLAYFIELD_BG));
    }
}

fn block_style(kind: ShapeKind, bg: Rgb) -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::plain(Rgb::from(kind.color()), bg)
    }
}

fn empty_style() -> CellStyle {
    CellStyle {
        dim: true,
        ..CellStyle::plain(Rgb::new(90, 90, 100), PLAYFIELD_BG)
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in x + 1..right {
        fb.put_char(dx, y, '─', style);
        fb.put_char(dx, bottom, '─', style);
    }
    for dy in y + 1..bottom {
        fb.put_char(x, dy, '│', style);
        fb.put_char(right, dy, '│', style);
    }
}

fn draw_overlay(
    fb: &mut FrameBuffer,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
    score: Option<u64>,
) {
    let style = CellStyle {
        bold: true,
        ..CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG)
    };
    let mid_y = frame_y.saturating_add(frame_h / 2);
    let centered = |len: u16| frame_x.saturating_add(frame_w.saturating_sub(len) / 2);

    fb.put_str(centered(text.chars().count() as u16), mid_y, text, style);

    if let Some(score) = score {
        let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
        let label = "SCORE ";
        let x = centered(label.len() as u16 + digits);
        fb.put_str(x, mid_y + 1, label, style);
        fb.put_u64(x + label.len() as u16, mid_y + 1, score, style);
        fb.put_str(centered(9), mid_y + 2, "R RESTART", style);
    }
}
