//! Game of Life engine with shadow trails and a scrubbable history.
//!
//! # Example
//!
//! ```
//! use horizons_engine::{Config, GenerationOutcome, Simulation, pattern};
//!
//! let mut sim = Simulation::new(Config::default())?;
//! let glider = pattern::builtin().into_iter().find(|p| p.name == "Glider").unwrap();
//! sim.apply_pattern(&glider);
//! assert_eq!(sim.next_generation(), GenerationOutcome::Advanced);
//! assert!(sim.move_backward());
//! # Ok::<(), horizons_engine::EngineError>(())
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod history;
pub mod pattern;
pub mod rules;
pub mod simulation;
pub mod termination;
pub mod ticker;

pub use board::{Board, Cell, RawCell, normalize_cell};
pub use config::Config;
pub use error::EngineError;
pub use history::History;
pub use pattern::Pattern;
pub use rules::{compute_next_board, count_neighbors};
pub use simulation::{GenerationOutcome, Notice, Simulation};
pub use termination::{LoopCheck, has_cells, is_game_over, is_infinite_loop};
pub use ticker::Ticker;
