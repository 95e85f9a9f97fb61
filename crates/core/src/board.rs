//! Board module - the set of tiles on the 4x4 grid
//!
//! The board is a pure value: every slide produces a new `Board` and the old
//! one is dropped. Storage is a flat row-major array of optional tile values,
//! so two tiles can never occupy one cell once a board exists.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3 (top to bottom)

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::{CoreError, InvariantViolation};
use crate::types::{Position, Tile, CELL_COUNT};

/// Every position on the board, in row-major order
pub fn all_positions() -> impl Iterator<Item = Position> {
    (0..CELL_COUNT).filter_map(Position::from_index)
}

/// The game board - flat array of cells, `None` for empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Row-major order (y * BOARD_SIZE + x)
    cells: [Option<u32>; CELL_COUNT],
}

impl Board {
    /// Create a board with no tiles
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a board from loose tiles, checking every invariant of the model:
    /// positions in bounds, values powers of two, no shared positions.
    pub fn from_tiles<I>(tiles: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut board = Self::empty();
        for tile in tiles {
            let Some(idx) = tile.position.index() else {
                return Err(InvariantViolation::OutOfBounds {
                    x: tile.position.x,
                    y: tile.position.y,
                }
                .into());
            };
            if !tile.has_valid_value() {
                return Err(InvariantViolation::InvalidValue { value: tile.value }.into());
            }
            if board.cells[idx].is_some() {
                return Err(InvariantViolation::DuplicatePosition {
                    x: tile.position.x,
                    y: tile.position.y,
                }
                .into());
            }
            board.cells[idx] = Some(tile.value);
        }
        Ok(board)
    }

    /// Build a board from tiles the engine itself produced.
    ///
    /// A failure here means a pipeline stage broke the model, so it aborts
    /// instead of handing a corrupt board back to the caller.
    pub(crate) fn assemble<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        match Self::from_tiles(tiles) {
            Ok(board) => board,
            Err(err) => panic!("board model violated inside the engine: {err}"),
        }
    }

    /// Tile at a position, if any
    pub fn get(&self, pos: Position) -> Option<Tile> {
        let idx = pos.index()?;
        self.cells[idx].map(|value| Tile::new(pos, value))
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        all_positions()
            .zip(self.cells.iter())
            .filter_map(|(pos, cell)| cell.map(|value| Tile::new(pos, value)))
    }

    /// Number of tiles on the board
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Positions not covered by any tile, in row-major order
    pub fn free_positions(&self) -> ArrayVec<Position, CELL_COUNT> {
        all_positions()
            .filter(|pos| self.get(*pos).is_none())
            .collect()
    }

    /// Sum of all tile values
    pub fn total_value(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile value, `None` on an empty board
    pub fn max_value(&self) -> Option<u32> {
        self.cells.iter().flatten().copied().max()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    /// Plain grid, row `y = 0` first, `.` for an empty cell
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            match cell {
                Some(value) => write!(f, "{value:>6}")?,
                None => write!(f, "{:>6}", ".")?,
            }
            if (i + 1) % (crate::types::BOARD_SIZE as usize) == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
