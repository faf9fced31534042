/// Rendering collaborator for character terminals.
///
/// Draw commands arrive in playfield pixels and are rasterised onto a
/// `CellGrid` sized to the terminal. `present` writes the whole grid out.
/// The grid is not cleared between frames, so a translucent overlay shades
/// the previous picture the way it would on a real framebuffer.

pub mod cells;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    QueueableCommand,
};

use crate::assets::{Assets, FontFace};
use crate::canvas::{Canvas, FontRole, Rect, SpriteId};
use crate::constants::{HEIGHT, WIDTH};
use crate::palette::{Rgba, NEON_GREEN, WHITE};

pub use cells::{Cell, CellGrid};

/// How strongly outlines and rings tint the cells they cross.
const GLOW_STRENGTH: f32 = 0.35;

const C_PLAYER_SPRITE: Rgba = WHITE;
const C_ENEMY_SPRITE: Rgba = NEON_GREEN;

/// Reports the current terminal size in cells.
pub type SizeProbe = fn() -> std::io::Result<(u16, u16)>;

pub struct TerminalCanvas<W: Write> {
    out: W,
    grid: CellGrid,
    assets: Assets,
    size_probe: Option<SizeProbe>,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, cols: u16, rows: u16, assets: Assets) -> Self {
        TerminalCanvas {
            out,
            grid: CellGrid::new(cols.max(1), rows.max(1)),
            assets,
            size_probe: None,
        }
    }

    /// Follow terminal resizes: the probe is consulted after every frame.
    pub fn with_size_probe(mut self, probe: SizeProbe) -> Self {
        self.size_probe = Some(probe);
        self
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Rebuild the grid for a new terminal size.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols != self.grid.cols() || rows != self.grid.rows() {
            self.grid = CellGrid::new(cols.max(1), rows.max(1));
        }
    }

    // ── Pixel → cell mapping ────────────────────────────────────────────────

    fn col_of(&self, x: i32) -> i32 {
        (x as i64 * self.grid.cols() as i64).div_euclid(WIDTH as i64) as i32
    }

    fn row_of(&self, y: i32) -> i32 {
        (y as i64 * self.grid.rows() as i64).div_euclid(HEIGHT as i64) as i32
    }

    /// Half-open cell span covered by a pixel rect; never empty.
    fn cell_span(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let c0 = self.col_of(rect.x);
        let r0 = self.row_of(rect.y);
        let c1 = ceil_div(
            (rect.x + rect.w) as i64 * self.grid.cols() as i64,
            WIDTH as i64,
        )
        .max(c0 + 1);
        let r1 = ceil_div(
            (rect.y + rect.h) as i64 * self.grid.rows() as i64,
            HEIGHT as i64,
        )
        .max(r0 + 1);
        (c0, r0, c1, r1)
    }

    fn px_per_col(&self) -> i32 {
        (WIDTH / self.grid.cols() as i32).max(1)
    }

    fn px_per_row(&self) -> i32 {
        (HEIGHT / self.grid.rows() as i32).max(1)
    }
}

fn ceil_div(n: i64, d: i64) -> i32 {
    (n + d - 1).div_euclid(d) as i32
}

/// Letter-space text set in the wide face.
fn shape_text(text: &str, face: FontFace) -> Vec<char> {
    match face {
        FontFace::Wide => {
            let mut out = Vec::with_capacity(text.len() * 2);
            for (i, ch) in text.chars().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push(ch);
            }
            out
        }
        _ => text.chars().collect(),
    }
}

fn to_color(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn face_attribute(face: Option<FontFace>) -> Option<Attribute> {
    match face {
        Some(FontFace::Wide) | Some(FontFace::Bold) => Some(Attribute::Bold),
        Some(FontFace::Dim) => Some(Attribute::Dim),
        Some(FontFace::Regular) | None => None,
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let (c0, r0, c1, r1) = self.cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.grid.fill(col, row, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, _width: i32) {
        let (c0, r0, c1, r1) = self.cell_span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                let border = row == r0 || row == r1 - 1 || col == c0 || col == c1 - 1;
                if border {
                    self.grid.tint(col, row, color, GLOW_STRENGTH);
                }
            }
        }
    }

    fn circle(&mut self, center: (i32, i32), radius: i32, color: Rgba, width: i32) {
        let (c0, r0, c1, r1) = self.cell_span(Rect::new(
            center.0 - radius,
            center.1 - radius,
            radius * 2,
            radius * 2,
        ));

        // Fits in one cell: a single glyph, or a tint for a ring.
        if (c1 - c0 <= 1 && r1 - r0 <= 1) || radius * 2 < self.px_per_col() {
            let col = self.col_of(center.0);
            let row = self.row_of(center.1);
            if width == 0 {
                let glyph = if radius <= 1 { '·' } else { '•' };
                self.grid.put(col, row, glyph, color, None);
            } else {
                self.grid.tint(col, row, color, GLOW_STRENGTH);
            }
            return;
        }

        let (pc, pr) = (self.px_per_col(), self.px_per_row());
        for row in r0..r1 {
            for col in c0..c1 {
                let cx = col * pc + pc / 2 - center.0;
                let cy = row * pr + pr / 2 - center.1;
                let d2 = cx * cx + cy * cy;
                if d2 > radius * radius {
                    continue;
                }
                if width == 0 {
                    self.grid.put(col, row, '█', color, None);
                } else {
                    self.grid.tint(col, row, color, GLOW_STRENGTH);
                }
            }
        }
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba, width: i32) {
        let (mut c, mut r) = (self.col_of(from.0), self.row_of(from.1));
        let (c_end, r_end) = (
            self.col_of(to.0).min(self.grid.cols() as i32 - 1),
            self.row_of(to.1).min(self.grid.rows() as i32 - 1),
        );
        let glyph = match (c_end - c, r_end - r) {
            (_, 0) if width >= 3 => '━',
            (_, 0) => '─',
            (0, _) => '│',
            (dc, dr) if (dc > 0) == (dr > 0) => '╲',
            _ => '╱',
        };

        // Bresenham over cells.
        let dc = (c_end - c).abs();
        let dr = -(r_end - r).abs();
        let sc = if c < c_end { 1 } else { -1 };
        let sr = if r < r_end { 1 } else { -1 };
        let mut err = dc + dr;
        loop {
            self.grid.put(c, r, glyph, color, None);
            if c == c_end && r == r_end {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dr {
                err += dr;
                c += sc;
            }
            if e2 <= dc {
                err += dc;
                r += sr;
            }
        }
    }

    fn text(&mut self, text: &str, font: FontRole, color: Rgba, pos: (i32, i32)) {
        let face = self.assets.fonts.face(font);
        let col = self.col_of(pos.0);
        let row = self.row_of(pos.1);
        for (i, ch) in shape_text(text, face).into_iter().enumerate() {
            if ch != ' ' {
                self.grid.put(col + i as i32, row, ch, color, Some(face));
            }
        }
    }

    fn text_size(&self, text: &str, font: FontRole) -> (i32, i32) {
        let face = self.assets.fonts.face(font);
        let chars = shape_text(text, face).len() as i32;
        (chars * self.px_per_col(), self.px_per_row())
    }

    fn sprite(&mut self, sprite: SpriteId, pos: (i32, i32)) {
        let color = match sprite {
            SpriteId::Player => C_PLAYER_SPRITE,
            SpriteId::Enemy => C_ENEMY_SPRITE,
        };
        let col = self.col_of(pos.0);
        let row = self.row_of(pos.1);
        let art = self.assets.sprite(sprite);
        for (dr, line) in art.rows.iter().enumerate() {
            for (dc, ch) in line.chars().enumerate() {
                if ch != ' ' {
                    self.grid.put(col + dc as i32, row + dr as i32, ch, color, None);
                }
            }
        }
    }

    fn present(&mut self) -> std::io::Result<()> {
        let mut current: Option<(Rgba, Rgba, Option<FontFace>)> = None;

        for row in 0..self.grid.rows() {
            self.out.queue(cursor::MoveTo(0, row))?;
            for cell in self.grid.row(row) {
                let style = (cell.fg, cell.bg, cell.face);
                if current != Some(style) {
                    self.out.queue(style::SetAttribute(Attribute::Reset))?;
                    self.out.queue(style::SetForegroundColor(to_color(cell.fg)))?;
                    self.out.queue(style::SetBackgroundColor(to_color(cell.bg)))?;
                    if let Some(attr) = face_attribute(cell.face) {
                        self.out.queue(style::SetAttribute(attr))?;
                    }
                    current = Some(style);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }

        self.out.queue(style::SetAttribute(Attribute::Reset))?;
        self.out.queue(style::ResetColor)?;
        self.out.flush()?;

        if let Some(probe) = self.size_probe {
            let (cols, rows) = probe()?;
            self.resize(cols, rows);
        }
        Ok(())
    }
}
