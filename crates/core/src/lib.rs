//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the move/merge engine of a 2048-style sliding-tile game.
//! It has **no dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Pure**: Every slide takes a board and returns a new one
//! - **Testable**: Randomness is injected through [`SpawnSource`]
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 board value and its invariants
//! - [`line`]: grouping into lines and priority ordering
//! - [`merge`]: single adjacent-equal merge per line
//! - [`stack`]: packing a line against the target edge
//! - [`spawn`]: placing a new tile on a free cell
//! - [`slide`]: the full per-move pipeline
//! - [`game_state`]: state container and intent dispatch
//! - [`rng`]: randomness boundary and a seedable LCG
//!
//! # Game Rules
//!
//! - **Lines**: Sliding vertically groups tiles by column, horizontally by row; lines never interact
//! - **Merging**: The first adjacent equal pair in each line combines; merges do not cascade
//! - **Spawning**: One 2 or 4 (50/50) lands on a random empty cell after every slide,
//!   including slides that changed nothing
//!
//! # Example
//!
//! ```
//! use slide2048_core::GameState;
//! use slide2048_types::{Direction, Intent};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.board().len(), 2);
//!
//! game.apply_intent(Intent::MoveDirection(Direction::Left)).unwrap();
//! assert_eq!(game.moves(), 1);
//!
//! // Anything but a move is rejected
//! assert!(game.apply_intent(Intent::Restart).is_err());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod line;
pub mod merge;
pub mod rng;
pub mod slide;
pub mod spawn;
pub mod stack;

pub use slide2048_types as types;

// Re-export commonly used types for convenience
pub use board::{all_positions, Board};
pub use error::{CoreError, InvariantViolation};
pub use game_state::{dispatch, GameState};
pub use rng::{SimpleRng, SpawnSource};
pub use slide::{is_stuck, shift, slide, Shift};
pub use spawn::spawn_tile;
