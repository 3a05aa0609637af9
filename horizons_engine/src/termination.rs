// termination.rs - End-of-game and cycle detection

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Which parts of a board take part in cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopCheck {
    /// Only alive/dead states; shadows are ignored.
    #[default]
    StateOnly,
    /// States and shadow values must both match.
    Full,
}

/// True when every cell is dead.
pub fn is_game_over(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.alive)
}

/// True when at least one cell is alive.
pub fn has_cells(board: &Board) -> bool {
    board.cells().iter().any(|cell| cell.alive)
}

fn same_board(a: &Board, b: &Board, mode: LoopCheck) -> bool {
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return false;
    }
    match mode {
        LoopCheck::Full => a == b,
        LoopCheck::StateOnly => a
            .cells()
            .iter()
            .zip(b.cells())
            .all(|(x, y)| x.alive == y.alive),
    }
}

/// True when `candidate` already appears in `recent`.
///
/// The caller picks the window; nothing is remembered between calls.
pub fn is_infinite_loop<'a>(
    recent: impl IntoIterator<Item = &'a Board>,
    candidate: &Board,
    mode: LoopCheck,
) -> bool {
    recent
        .into_iter()
        .any(|board| same_board(board, candidate, mode))
}
