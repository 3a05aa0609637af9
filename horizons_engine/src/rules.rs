// rules.rs - One generation step: B3/S23 plus shadow decay

use crate::board::{Board, Cell};

pub const SHADOW_ON_DEATH: f64 = 0.1;   // Afterglow added when a cell dies
pub const SHADOW_ON_BIRTH: f64 = 0.05;  // Removed when a cell is born
pub const SHADOW_FADE: f64 = 0.01;      // Removed every generation otherwise

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// Live cells among the 8 neighbors of `(row, col)`, wrapping at every edge.
pub fn count_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let (rows, cols) = (board.rows(), board.cols());
    if rows == 0 || cols == 0 {
        return 0;
    }
    NEIGHBORS
        .iter()
        .filter(|&&(dr, dc)| board.is_alive(wrap(row, dr, rows), wrap(col, dc, cols)))
        .count() as u8
}

/// Transition of a single cell given its live neighbor count.
pub fn next_cell(cell: Cell, neighbors: u8) -> Cell {
    let alive = match (cell.alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    };

    let shadow = match (cell.alive, alive) {
        (true, false) => (cell.shadow + SHADOW_ON_DEATH).min(1.0),
        (false, true) => (cell.shadow - SHADOW_ON_BIRTH).max(0.0),
        _             => (cell.shadow - SHADOW_FADE).max(0.0),
    };

    Cell::new(alive, shadow)
}

fn next_row(board: &Board, row: usize) -> impl Iterator<Item = Cell> + '_ {
    board
        .row(row)
        .iter()
        .enumerate()
        .map(move |(col, &cell)| next_cell(cell, count_neighbors(board, row, col)))
}

/// The successor of `board`. The input is never modified.
pub fn compute_next_board(board: &Board) -> Board {
    let cells = (0..board.rows())
        .flat_map(|row| next_row(board, row))
        .collect();
    Board::from_cells(board.rows(), board.cols(), cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::RawCell;

    fn live_set(board: &Board) -> Vec<(usize, usize)> {
        board
            .iter()
            .filter(|(_, _, cell)| cell.alive)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test]
    fn test_count_neighbors_wraps_corners() {
        let board = Board::with_live_cells(5, 5, [(4, 4), (0, 4), (4, 0)]);
        assert_eq!(count_neighbors(&board, 0, 0), 3);
        assert_eq!(count_neighbors(&board, 2, 2), 0);
    }

    #[test]
    fn test_count_neighbors_ignores_self() {
        let board = Board::with_live_cells(3, 3, [(1, 1)]);
        assert_eq!(count_neighbors(&board, 1, 1), 0);
        assert_eq!(count_neighbors(&board, 0, 0), 1);
    }

    #[test]
    fn test_empty_stays_empty() {
        let next = compute_next_board(&Board::new(6, 7));
        assert_eq!(next.live_count(), 0);
        assert_eq!(next, Board::new(6, 7));
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = Board::with_live_cells(5, 5, [(2, 1), (2, 2), (2, 3)]);

        let step1 = compute_next_board(&horizontal);
        assert_eq!(live_set(&step1), vec![(1, 2), (2, 2), (3, 2)]);

        let step2 = compute_next_board(&step1);
        assert_eq!(live_set(&step2), live_set(&horizontal));
    }

    #[test]
    fn test_block_is_still() {
        let block = Board::with_live_cells(4, 4, [(1, 1), (1, 2), (2, 1), (2, 2)]);
        let next = compute_next_board(&block);
        assert_eq!(live_set(&next), live_set(&block));
    }

    #[test]
    fn test_glider_translates_across_edge() {
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let mut board = Board::with_live_cells(6, 6, glider);
        for _ in 0..24 {
            board = compute_next_board(&board);
        }
        // 24 steps move the glider 6 cells diagonally, a full lap of the torus
        assert_eq!(live_set(&board), live_set(&Board::with_live_cells(6, 6, glider)));
    }

    #[test]
    fn test_shadow_transitions() {
        // death adds afterglow, capped at 1
        assert_eq!(next_cell(Cell::new(true, 0.0), 1), Cell::new(false, 0.1));
        assert_eq!(next_cell(Cell::new(true, 0.95), 0), Cell::new(false, 1.0));
        // birth dims it
        assert_eq!(next_cell(Cell::new(false, 0.5), 3), Cell::new(true, 0.45));
        assert_eq!(next_cell(Cell::new(false, 0.02), 3), Cell::new(true, 0.0));
        // otherwise it fades
        assert_eq!(next_cell(Cell::new(true, 0.5), 2), Cell::new(true, 0.49));
        assert_eq!(next_cell(Cell::new(false, 0.0), 0), Cell::DEAD);
    }

    #[test]
    fn test_shadow_does_not_affect_state() {
        let raw = vec![
            vec![RawCell::Pair(0, 1.0), RawCell::Pair(1, 0.0), RawCell::Pair(0, 1.0)],
            vec![RawCell::Pair(0, 1.0), RawCell::Pair(1, 0.7), RawCell::Pair(0, 1.0)],
            vec![RawCell::Pair(0, 1.0), RawCell::Pair(1, 0.3), RawCell::Pair(0, 1.0)],
        ];
        let shadowed = Board::from_raw(raw).unwrap();
        let plain = Board::with_live_cells(3, 3, [(0, 1), (1, 1), (2, 1)]);
        assert_eq!(
            live_set(&compute_next_board(&shadowed)),
            live_set(&compute_next_board(&plain))
        );
    }

    #[test]
    fn test_input_untouched() {
        let board = Board::with_live_cells(5, 5, [(2, 1), (2, 2), (2, 3)]);
        let copy = board.clone();
        let a = compute_next_board(&board);
        let b = compute_next_board(&board);
        assert_eq!(board, copy);
        assert_eq!(a, b);
    }
}
