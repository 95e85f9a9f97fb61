//! Game state container and intent dispatcher.
//!
//! `GameState` owns the current board and the spawn RNG. The surrounding game
//! feeds it [`Intent`]s; only movement is understood here, every other intent
//! kind is reported back as [`CoreError::UnrecognizedIntent`].

use log::debug;

use crate::board::Board;
use crate::error::CoreError;
use crate::rng::{SimpleRng, SpawnSource};
use crate::slide::{is_stuck, slide};
use crate::spawn::spawn_tile;
use crate::types::{Intent, INITIAL_TILES};

/// Map one intent to the next board.
///
/// The input board is never touched; on error nothing is produced.
pub fn dispatch<S>(board: &Board, intent: Intent, source: &mut S) -> Result<Board, CoreError>
where
    S: SpawnSource + ?Sized,
{
    match intent {
        Intent::MoveDirection(direction) => Ok(slide(board, direction, source)),
        other => Err(CoreError::UnrecognizedIntent {
            intent: other.as_str(),
        }),
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    /// Seed the game was created with
    seed: u32,
    /// Slides applied so far
    moves: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and deal the opening tiles
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut board = Board::empty();
        for _ in 0..INITIAL_TILES {
            board = spawn_tile(&board, &mut rng);
        }
        debug!("new game, seed {seed}");

        Self {
            board,
            rng,
            seed,
            moves: 0,
        }
    }

    /// Start from an existing board, without dealing
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            rng: SimpleRng::new(seed),
            seed,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Board is full and no direction can merge anything
    pub fn game_over(&self) -> bool {
        is_stuck(&self.board)
    }

    /// Apply an intent, replacing the board on success.
    ///
    /// The state is left as it was when the intent is rejected.
    pub fn apply_intent(&mut self, intent: Intent) -> Result<(), CoreError> {
        self.board = dispatch(&self.board, intent, &mut self.rng)?;
        self.moves += 1;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
