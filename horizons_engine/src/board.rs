// board.rs - Board and cell types for the shadow-trail Game of Life

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Shadows are kept in hundredths so repeated runs compare bit-for-bit.
const SHADOW_STEPS: f64 = 100.0;

/// Clamps a shadow value to `[0, 1]` and snaps it to the nearest hundredth.
pub fn quantize_shadow(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    (value.clamp(0.0, 1.0) * SHADOW_STEPS).round() / SHADOW_STEPS
}

/// One grid position: alive/dead plus the decaying afterglow of past life.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    pub alive: bool,
    pub shadow: f64,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false, shadow: 0.0 };

    pub fn new(alive: bool, shadow: f64) -> Self {
        Self { alive, shadow: quantize_shadow(shadow) }
    }

    pub fn state(&self) -> u8 {
        self.alive as u8
    }
}

/// Cell as it may arrive from outside: a bare `0`/`1` or a `[state, shadow]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Bare(u8),
    Pair(u8, f64),
}

/// Maps either legacy form onto the uniform record.
pub fn normalize_cell(raw: RawCell) -> Cell {
    match raw {
        RawCell::Bare(state) => Cell::new(state != 0, 0.0),
        RawCell::Pair(state, shadow) => Cell::new(state != 0, shadow),
    }
}

/// Fixed-size toroidal grid, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Empty board: every cell dead with no shadow.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::DEAD; rows * cols],
        }
    }

    /// Empty board with the listed cells alive. Coordinates off the board are skipped.
    pub fn with_live_cells(
        rows: usize,
        cols: usize,
        live: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut board = Self::new(rows, cols);
        for (row, col) in live {
            board.set_alive(row, col, true);
        }
        board
    }

    /// Builds a board from legacy rows, normalizing every cell.
    pub fn from_raw(raw: Vec<Vec<RawCell>>) -> Result<Self, EngineError> {
        let rows = raw.len();
        let cols = raw.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyBoard);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, raw_row) in raw.into_iter().enumerate() {
            if raw_row.len() != cols {
                return Err(EngineError::RaggedBoard {
                    row,
                    found: raw_row.len(),
                    expected: cols,
                });
            }
            cells.extend(raw_row.into_iter().map(normalize_cell));
        }
        Ok(Self { rows, cols, cells })
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[row * self.cols + col])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell.alive)
    }

    /// Sets the state of one cell, keeping its shadow. Returns false off the board.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        self.cells[row * self.cols + col].alive = alive;
        true
    }

    /// Flips one cell, keeping its shadow. Returns false off the board.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            Some(cell) => self.set_alive(row, col, !cell.alive),
            None => false,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Every cell with its coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, *cell))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for cell in self.row(row) {
                f.write_str(if cell.alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_dead() {
        let board = Board::new(4, 6);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 6);
        assert!(board.cells().iter().all(|cell| *cell == Cell::DEAD));
        assert_eq!(Board::new(4, 6), board);
    }

    #[test]
    fn test_normalize_cell() {
        assert_eq!(normalize_cell(RawCell::Bare(0)), Cell::new(false, 0.0));
        assert_eq!(normalize_cell(RawCell::Bare(1)), Cell::new(true, 0.0));
        assert_eq!(normalize_cell(RawCell::Pair(1, 0.3)), Cell::new(true, 0.3));
        assert_eq!(normalize_cell(RawCell::Pair(0, 7.0)).shadow, 1.0);
    }

    #[test]
    fn test_raw_cells_from_json() {
        let raw: Vec<Vec<RawCell>> = serde_json::from_str("[[0, [1, 0.5]], [1, [0, 0.25]]]").unwrap();
        let board = Board::from_raw(raw).unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::new(false, 0.0)));
        assert_eq!(board.get(0, 1), Some(Cell::new(true, 0.5)));
        assert_eq!(board.get(1, 0), Some(Cell::new(true, 0.0)));
        assert_eq!(board.get(1, 1), Some(Cell::new(false, 0.25)));
    }

    #[test]
    fn test_json_shadows_are_quantized() {
        let raw: Vec<Vec<RawCell>> = serde_json::from_str("[[[0, 0.123], [1, -0.5], [0, 1.7]]]").unwrap();
        let board = Board::from_raw(raw).unwrap();
        assert_eq!(board.get(0, 0).map(|c| c.shadow), Some(0.12));
        assert_eq!(board.get(0, 1).map(|c| c.shadow), Some(0.0));
        assert_eq!(board.get(0, 2).map(|c| c.shadow), Some(1.0));
    }

    #[test]
    fn test_from_raw_rejects_ragged_rows() {
        let raw = vec![vec![RawCell::Bare(0); 3], vec![RawCell::Bare(1); 2]];
        assert!(matches!(
            Board::from_raw(raw),
            Err(EngineError::RaggedBoard { row: 1, found: 2, expected: 3 })
        ));
        assert!(matches!(Board::from_raw(vec![]), Err(EngineError::EmptyBoard)));
    }

    #[test]
    fn test_toggle_keeps_shadow() {
        let raw = vec![vec![RawCell::Pair(0, 0.4), RawCell::Bare(0)]];
        let mut board = Board::from_raw(raw).unwrap();
        assert!(board.toggle(0, 0));
        assert_eq!(board.get(0, 0), Some(Cell::new(true, 0.4)));
        assert!(!board.toggle(3, 0));
        assert!(!board.set_alive(0, 2, true));
    }

    #[test]
    fn test_display() {
        let board = Board::with_live_cells(2, 3, [(0, 1), (1, 2)]);
        assert_eq!(board.to_string(), ".#.\n..#\n");
        assert_eq!(board.live_count(), 2);
    }

    #[test]
    fn test_quantize_shadow() {
        assert_eq!(quantize_shadow(0.1 + 0.2), 0.3);
        assert_eq!(quantize_shadow(-0.5), 0.0);
        assert_eq!(quantize_shadow(f64::NAN), 0.0);
    }
}
