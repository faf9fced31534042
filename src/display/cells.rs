/// Character-cell framebuffer behind the terminal canvas.

use crate::assets::FontFace;
use crate::palette::{Rgba, BLACK, WHITE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgba,
    pub bg: Rgba,
    /// Face of the text occupying the cell, if any.
    pub face: Option<FontFace>,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            fg: WHITE,
            bg: BLACK,
            face: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CellGrid {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(cols: u16, rows: u16) -> Self {
        CellGrid {
            cols,
            rows,
            cells: vec![Cell::default(); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn get(&self, col: i32, row: i32) -> Option<&Cell> {
        self.index(col, row).map(|i| &self.cells[i])
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Text of one row, for inspection.
    pub fn row_text(&self, row: u16) -> String {
        self.row(row).iter().map(|c| c.ch).collect()
    }

    /// Opaque fill wipes the cell; translucent fill shades what is there.
    pub fn fill(&mut self, col: i32, row: i32, color: Rgba) {
        if let Some(i) = self.index(col, row) {
            let cell = &mut self.cells[i];
            if color.a == 255 {
                *cell = Cell {
                    bg: color,
                    ..Cell::default()
                };
            } else {
                let t = color.a as f32 / 255.0;
                let solid = color.with_alpha(255);
                cell.bg = cell.bg.lerp(solid, t);
                cell.fg = cell.fg.lerp(solid, t);
            }
        }
    }

    /// Blend `color` into the background at `strength` (`0.0..=1.0`),
    /// leaving any glyph in place.
    pub fn tint(&mut self, col: i32, row: i32, color: Rgba, strength: f32) {
        if let Some(i) = self.index(col, row) {
            let cell = &mut self.cells[i];
            let t = strength * color.a as f32 / 255.0;
            cell.bg = cell.bg.lerp(color.with_alpha(255), t);
        }
    }

    /// Place a glyph over the current background. Translucent colours are
    /// blended against that background.
    pub fn put(&mut self, col: i32, row: i32, ch: char, color: Rgba, face: Option<FontFace>) {
        if let Some(i) = self.index(col, row) {
            let cell = &mut self.cells[i];
            cell.ch = ch;
            cell.fg = if color.a == 255 {
                color
            } else {
                cell.bg.lerp(color.with_alpha(255), color.a as f32 / 255.0)
            };
            cell.face = face;
        }
    }
}
