//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental values the slide engine passes around.
//! All types are plain `Copy` data with no external dependencies, making them
//! usable in any context (engine, input mapping, terminal runner).
//!
//! # Board Geometry
//!
//! - **Size**: 4x4 cells, `x` indexed left to right (0-3), `y` indexed top to bottom (0-3)
//! - **Up** slides toward `y = 0`, **Left** toward `x = 0`
//! - **Down** slides toward `y = 3`, **Right** toward `x = 3`
//!
//! # Tile Values
//!
//! Tile values are powers of two from 2 up to [`MAX_TILE_VALUE`]. New tiles
//! spawn as one of [`SPAWN_VALUES`] with equal probability. Two tiles at the
//! cap never merge, so a merged value always fits.
//!
//! # Examples
//!
//! ```
//! use slide2048_types::{Direction, Intent, Position, Tile, BOARD_SIZE};
//!
//! let pos = Position::new(1, 3);
//! assert!(pos.in_bounds());
//! assert!(!Position::new(BOARD_SIZE, 0).in_bounds());
//!
//! let tile = Tile::new(pos, 8);
//! assert!(tile.has_valid_value());
//! assert!(!Tile::new(pos, 12).has_valid_value());
//!
//! assert_eq!(Direction::Up.as_str(), "up");
//!
//! // Intents carry their payload
//! let intent = Intent::MoveDirection(Direction::Left);
//! assert_eq!(intent.as_str(), "moveDirection");
//! ```

use std::fmt;

/// Board edge length in cells (4x4 board)
pub const BOARD_SIZE: u8 = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Values a freshly spawned tile can take, chosen uniformly
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Largest value a tile may hold (2^30)
pub const MAX_TILE_VALUE: u32 = 1 << 30;

/// Number of tiles placed on an empty board when a game starts
pub const INITIAL_TILES: usize = 2;

/// A cell coordinate on the board
///
/// Nothing stops a caller from building an out-of-range position; the board
/// model rejects them when a [`Tile`] carrying one is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates fall inside `[0, BOARD_SIZE)`
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Flat row-major index (`y * BOARD_SIZE + x`), `None` when out of bounds
    pub fn index(&self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some(self.y as usize * BOARD_SIZE as usize + self.x as usize)
    }

    /// Inverse of [`Position::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Some(Self::new((index % size) as u8, (index / size) as u8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A numbered tile sitting on one cell
///
/// Tiles are never changed in place: a merge or a move produces a new tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub position: Position,
    pub value: u32,
}

impl Tile {
    pub const fn new(position: Position, value: u32) -> Self {
        Self { position, value }
    }

    /// Value is a power of two in `2..=MAX_TILE_VALUE`
    pub fn has_valid_value(&self) -> bool {
        (2..=MAX_TILE_VALUE).contains(&self.value) && self.value.is_power_of_two()
    }

    /// Value of the tile `self` and `other` merge into, if they can merge.
    ///
    /// Requires equal values below the cap.
    pub fn merged_value(&self, other: &Tile) -> Option<u32> {
        if self.value != other.value || self.value >= MAX_TILE_VALUE {
            return None;
        }
        self.value.checked_add(other.value)
    }

    /// Same value, different cell
    pub fn moved_to(&self, position: Position) -> Self {
        Self::new(position, self.value)
    }
}

/// Slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `true` for Up/Down, where lines are columns keyed by `x`
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// `true` when tiles pack toward coordinate 0 (Up/Left)
    pub fn packs_toward_origin(&self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Intents the surrounding game can send to the state container
///
/// Only [`Intent::MoveDirection`] is understood by the engine. `Restart` is
/// handled by whoever owns the state and is rejected by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveDirection(Direction),
    Restart,
}

impl Intent {
    /// Intent kind name, without payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveDirection(_) => "moveDirection",
            Intent::Restart => "restart",
        }
    }
}
