// pattern.rs - Named stamps of live cells

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::EngineError;

/// A name plus live-cell offsets relative to the pattern's own origin.
///
/// Serialized as `{"name": "Glider", "cells": [[0, 1], [1, 2], ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub cells: Vec<(i32, i32)>,
}

/// Inclusive extent of a pattern's offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: i32,
    pub min_col: i32,
    pub max_row: i32,
    pub max_col: i32,
}

impl BoundingBox {
    pub fn height(&self) -> i64 {
        i64::from(self.max_row) - i64::from(self.min_row) + 1
    }

    pub fn width(&self) -> i64 {
        i64::from(self.max_col) - i64::from(self.min_col) + 1
    }
}

impl Pattern {
    pub fn new(name: impl Into<String>, cells: Vec<(i32, i32)>) -> Self {
        Self { name: name.into(), cells }
    }

    /// `None` for a pattern without cells.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let (&(r0, c0), rest) = self.cells.split_first()?;
        let init = BoundingBox { min_row: r0, min_col: c0, max_row: r0, max_col: c0 };
        Some(rest.iter().fold(init, |bb, &(r, c)| BoundingBox {
            min_row: bb.min_row.min(r),
            min_col: bb.min_col.min(c),
            max_row: bb.max_row.max(r),
            max_col: bb.max_col.max(c),
        }))
    }

    /// Sets the pattern alive with its bounding box centered on `(row, col)`,
    /// wrapping around the board edges. Existing shadows are kept.
    pub fn stamp_wrapped(&self, board: &mut Board, row: usize, col: usize) -> usize {
        let Some(bb) = self.bounding_box() else {
            return 0;
        };
        let rows = board.rows() as i64;
        let cols = board.cols() as i64;
        if rows == 0 || cols == 0 {
            return 0;
        }
        let anchor_row = (row as i64 % rows) - i64::from(bb.min_row) - (bb.height() - 1) / 2;
        let anchor_col = (col as i64 % cols) - i64::from(bb.min_col) - (bb.width() - 1) / 2;

        for &(r, c) in &self.cells {
            let target_row = (anchor_row + i64::from(r)).rem_euclid(rows) as usize;
            let target_col = (anchor_col + i64::from(c)).rem_euclid(cols) as usize;
            board.set_alive(target_row, target_col, true);
        }
        self.cells.len()
    }

    /// Sets the pattern alive centered on the whole board. Cells that would land
    /// off the board are dropped; the number actually placed is returned.
    pub fn stamp_centered(&self, board: &mut Board) -> usize {
        let Some(bb) = self.bounding_box() else {
            return 0;
        };
        let rows = board.rows() as i64;
        let cols = board.cols() as i64;
        let offset_row = (rows - bb.height()).div_euclid(2) - i64::from(bb.min_row);
        let offset_col = (cols - bb.width()).div_euclid(2) - i64::from(bb.min_col);

        let mut placed = 0;
        for &(r, c) in &self.cells {
            let target_row = i64::from(r) + offset_row;
            let target_col = i64::from(c) + offset_col;
            if (0..rows).contains(&target_row)
                && (0..cols).contains(&target_col)
                && board.set_alive(target_row as usize, target_col as usize, true)
            {
                placed += 1;
            }
        }
        placed
    }
}

struct BuiltinPattern {
    name: &'static str,
    cells: &'static [(i32, i32)],
}

const PATTERNS: &[BuiltinPattern] = &[
    BuiltinPattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    BuiltinPattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    BuiltinPattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    BuiltinPattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    BuiltinPattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    BuiltinPattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    BuiltinPattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// The patterns shipped with the engine.
pub fn builtin() -> Vec<Pattern> {
    PATTERNS
        .iter()
        .map(|p| Pattern::new(p.name, p.cells.to_vec()))
        .collect()
}

/// Parses a JSON pattern list: `[{"name": ..., "cells": [[r, c], ...]}, ...]`.
pub fn parse_patterns(json: &str) -> Result<Vec<Pattern>, EngineError> {
    let patterns: Vec<Pattern> = serde_json::from_str(json)?;
    if let Some(empty) = patterns.iter().find(|p| p.cells.is_empty()) {
        return Err(EngineError::EmptyPattern(empty.name.clone()));
    }
    Ok(patterns)
}

/// Reads a JSON pattern list from disk.
pub fn load_patterns(path: impl AsRef<Path>) -> Result<Vec<Pattern>, EngineError> {
    let json = std::fs::read_to_string(path)?;
    parse_patterns(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_set(board: &Board) -> Vec<(usize, usize)> {
        board
            .iter()
            .filter(|(_, _, cell)| cell.alive)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test]
    fn test_bounding_box() {
        let glider = &builtin()[0];
        let bb = glider.bounding_box().unwrap();
        assert_eq!((bb.min_row, bb.min_col, bb.max_row, bb.max_col), (0, 0, 2, 2));
        assert_eq!((bb.height(), bb.width()), (3, 3));
        assert!(Pattern::new("nothing", vec![]).bounding_box().is_none());
    }

    #[test]
    fn test_builtin_names() {
        let names: Vec<_> = builtin().into_iter().map(|p| p.name).collect();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"Gosper Glider Gun".to_string()));
        assert!(builtin().iter().all(|p| !p.cells.is_empty()));
    }

    #[test]
    fn test_single_cell_centers() {
        let dot = Pattern::new("dot", vec![(0, 0)]);
        let mut odd = Board::new(5, 7);
        assert_eq!(dot.stamp_centered(&mut odd), 1);
        assert_eq!(live_set(&odd), vec![(2, 3)]);

        let mut even = Board::new(60, 60);
        dot.stamp_centered(&mut even);
        assert_eq!(live_set(&even), vec![(29, 29)]);
    }

    #[test]
    fn test_centering_ignores_origin_offset() {
        let far = Pattern::new("far", vec![(10, 10), (10, 11), (10, 12)]);
        let mut board = Board::new(5, 5);
        far.stamp_centered(&mut board);
        assert_eq!(live_set(&board), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_centered_drops_overflow() {
        let wide = Pattern::new("wide", vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        let mut board = Board::new(3, 3);
        // offset is floor((3 - 5) / 2) = -1, so columns -1 and 3 fall off
        assert_eq!(wide.stamp_centered(&mut board), 3);
        assert_eq!(live_set(&board), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_wrapped_stamp_crosses_edges() {
        let blinker = Pattern::new("Blinker", vec![(0, 0), (0, 1), (0, 2)]);
        let mut board = Board::new(4, 4);
        assert_eq!(blinker.stamp_wrapped(&mut board, 0, 0), 3);
        assert_eq!(live_set(&board), vec![(0, 0), (0, 1), (0, 3)]);
    }

    #[test]
    fn test_stamp_never_clears() {
        let dot = Pattern::new("dot", vec![(0, 0)]);
        let mut board = Board::with_live_cells(3, 3, [(1, 1)]);
        dot.stamp_wrapped(&mut board, 1, 1);
        assert!(board.is_alive(1, 1));
    }

    #[test]
    fn test_parse_patterns() {
        let json = r#"[
            { "name": "Blinker", "cells": [[0, 0], [0, 1], [0, 2]] },
            { "name": "Block", "cells": [[0, 0], [0, 1], [1, 0], [1, 1]] }
        ]"#;
        let patterns = parse_patterns(json).unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[1].cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

        let round_trip = serde_json::to_string(&patterns).unwrap();
        assert_eq!(parse_patterns(&round_trip).unwrap(), patterns);
    }

    #[test]
    fn test_parse_rejects_empty_pattern() {
        let json = r#"[{ "name": "Void", "cells": [] }]"#;
        assert!(matches!(parse_patterns(json), Err(EngineError::EmptyPattern(name)) if name == "Void"));
        assert!(matches!(parse_patterns("not json"), Err(EngineError::Json(_))));
    }
}
