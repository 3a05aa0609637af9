// simulation.rs - The controller: sole owner of the live board and its history
// The timer tick is pulled in through `pump_ticks`

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::Config;
use crate::error::EngineError;
use crate::history::History;
use crate::pattern::Pattern;
use crate::rules::compute_next_board;
use crate::termination::{has_cells, is_game_over, is_infinite_loop};
use crate::ticker::Ticker;

/// One-shot message for the presentation layer when play stops on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    GameOver,
    InfiniteLoop,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Notice::GameOver => "The game has ended. All cells have died.",
            Notice::InfiniteLoop => "The game has stopped due to an infinite loop.",
        })
    }
}

/// What a forward step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A new generation was computed and recorded.
    Advanced,
    /// An already recorded generation was brought back from history.
    Replayed,
    /// Everything died; history was cleared.
    GameOver,
    /// The new generation repeats an earlier one and was discarded.
    LoopDetected,
}

pub struct Simulation {
    config: Config,
    board: Board,
    history: History,
    playing: bool,
    selected_pattern: Option<Pattern>,
    ticker: Ticker,
    notice: Option<Notice>,
    generation: u64,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, EngineError> {
        config.validate()?;
        let ticker = Ticker::new(config.tick_interval())?;

        Ok(Self {
            board: Board::new(config.rows, config.cols),
            history: History::new(config.max_history),
            playing: false,
            selected_pattern: None,
            ticker,
            notice: None,
            generation: 0,
            config,
        })
    }

    fn commit(&mut self, board: Board) {
        self.history.push(board.clone());
        self.board = board;
        debug!(
            index = ?self.history.current_index(),
            len = self.history.len(),
            "board recorded"
        );
    }

    fn stop(&mut self) {
        if self.playing {
            info!(generation = self.generation, "paused");
        }
        self.ticker.cancel();
        self.playing = false;
    }

    /// Edits the board at `(row, col)`.
    ///
    /// With a pattern selected, stamps it alive around the target (wrapping at
    /// the edges). Otherwise flips that one cell. Returns false, without
    /// touching the board, for an off-board cell or an empty pattern.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        let mut next = self.board.clone();

        match &self.selected_pattern {
            Some(pattern) => {
                if pattern.stamp_wrapped(&mut next, row, col) == 0 {
                    warn!(pattern = %pattern.name, "pattern has no cells to stamp");
                    return false;
                }
            }
            None => {
                if !next.toggle(row, col) {
                    let err = EngineError::CellOutOfBounds {
                        row,
                        col,
                        rows: next.rows(),
                        cols: next.cols(),
                    };
                    warn!(%err, "toggle ignored");
                    return false;
                }
            }
        }

        self.commit(next);
        true
    }

    /// Stamps `pattern` alive in the middle of the board and records the result.
    /// Returns how many of its cells landed on the board.
    pub fn apply_pattern(&mut self, pattern: &Pattern) -> usize {
        if pattern.cells.is_empty() {
            warn!(pattern = %pattern.name, "pattern has no cells to apply");
            return 0;
        }

        let mut next = self.board.clone();
        let placed = pattern.stamp_centered(&mut next);
        if placed < pattern.cells.len() {
            debug!(
                pattern = %pattern.name,
                placed,
                total = pattern.cells.len(),
                "pattern clipped at board edge"
            );
        }
        self.commit(next);
        placed
    }

    /// Advances the live board by one generation.
    pub fn next_generation(&mut self) -> GenerationOutcome {
        let next = compute_next_board(&self.board);

        if is_game_over(&next) {
            info!(generation = self.generation + 1, "all cells died");
            self.stop();
            self.notice = Some(Notice::GameOver);
            self.history.reset();
            self.board = next;
            self.generation += 1;
            return GenerationOutcome::GameOver;
        }

        if is_infinite_loop(self.history.branch(), &next, self.config.loop_check) {
            info!(generation = self.generation, "generation repeats, stopping");
            self.stop();
            self.notice = Some(Notice::InfiniteLoop);
            return GenerationOutcome::LoopDetected;
        }

        self.generation += 1;
        self.commit(next);
        GenerationOutcome::Advanced
    }

    /// Moves forward in history when possible, otherwise computes a new generation.
    pub fn step_forward(&mut self) -> GenerationOutcome {
        if self.move_forward() {
            GenerationOutcome::Replayed
        } else {
            self.next_generation()
        }
    }

    /// Runs one generation if a tick came due since the last call. Ticks
    /// missed while the caller was stalled collapse into that one generation.
    /// Returns how many ran (0 or 1).
    pub fn pump_ticks(&mut self) -> usize {
        if !self.playing || self.ticker.drain() == 0 {
            return 0;
        }
        self.next_generation();
        1
    }

    /// Replaces the board with an empty one and restarts history from it.
    pub fn reset_board(&mut self) {
        self.board = Board::new(self.config.rows, self.config.cols);
        self.history.reset();
        self.history.push(self.board.clone());
        self.generation = 0;
    }

    /// [`reset_board`](Self::reset_board), then pause and deselect the pattern.
    pub fn reset_all(&mut self) {
        self.reset_board();
        self.stop();
        self.selected_pattern = None;
    }

    /// Starts or pauses play. Starting needs at least one live cell.
    pub fn set_playing(&mut self, playing: bool) -> bool {
        if !playing {
            self.stop();
            return true;
        }
        if self.playing {
            return true;
        }
        if !self.has_live_cells() {
            warn!("nothing alive, not starting");
            return false;
        }

        self.ticker.start();
        self.playing = true;
        info!(generation = self.generation, "playing");
        true
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.ticker.set_period(interval);
    }

    pub fn tick_interval(&self) -> Duration {
        self.ticker.period()
    }

    pub fn move_backward(&mut self) -> bool {
        match self.history.move_backward() {
            Some(board) => {
                self.board = board.clone();
                true
            }
            None => false,
        }
    }

    pub fn move_forward(&mut self) -> bool {
        match self.history.move_forward() {
            Some(board) => {
                self.board = board.clone();
                true
            }
            None => false,
        }
    }

    pub fn move_to_index(&mut self, index: usize) -> bool {
        match self.history.move_to(index) {
            Some(board) => {
                self.board = board.clone();
                true
            }
            None => false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn selected_pattern(&self) -> Option<&Pattern> {
        self.selected_pattern.as_ref()
    }

    pub fn set_selected_pattern(&mut self, pattern: Option<Pattern>) {
        self.selected_pattern = pattern;
    }

    pub fn current_index(&self) -> Option<usize> {
        self.history.current_index()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_move_backward(&self) -> bool {
        self.history.can_move_backward()
    }

    pub fn can_move_forward(&self) -> bool {
        self.history.can_move_forward()
    }

    pub fn has_live_cells(&self) -> bool {
        has_cells(&self.board)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generations computed since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Takes the pending notice, if play stopped on its own.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
