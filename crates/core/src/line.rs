//! Line grouping and priority ordering.
//!
//! A slide never moves a tile off its line: sliding vertically keeps `x`,
//! sliding horizontally keeps `y`. The board is therefore split into
//! independent lines keyed by that perpendicular coordinate, and every later
//! stage works on one line at a time.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Direction, Position, Tile, BOARD_SIZE};

/// Maximum number of tiles in one line
pub const LINE_LEN: usize = BOARD_SIZE as usize;

/// Tiles sharing one perpendicular coordinate. Transient, built per slide.
pub type Line = ArrayVec<Tile, LINE_LEN>;

/// Coordinate that identifies the line a position belongs to
#[inline]
pub fn line_key(direction: Direction, pos: Position) -> u8 {
    if direction.is_vertical() {
        pos.x
    } else {
        pos.y
    }
}

/// Coordinate along the slide axis
#[inline]
pub fn axis_coord(direction: Direction, pos: Position) -> u8 {
    if direction.is_vertical() {
        pos.y
    } else {
        pos.x
    }
}

/// Partition the board into lines, indexed by line key.
///
/// Tile order inside each line is whatever the board yields; callers sort
/// with [`priority_sort`] before merging.
pub fn group_lines(direction: Direction, board: &Board) -> [Line; LINE_LEN] {
    let mut lines: [Line; LINE_LEN] = Default::default();
    for tile in board.tiles() {
        let key = line_key(direction, tile.position) as usize;
        lines[key].push(tile);
    }
    lines
}

/// Order a line for merging and stacking.
///
/// Up and Left sort by descending axis coordinate, Down and Right by
/// ascending. Each tile is therefore followed by its neighbour on the side
/// of the target edge.
pub fn priority_sort(direction: Direction, mut line: Line) -> Line {
    if direction.packs_toward_origin() {
        line.sort_unstable_by(|a, b| {
            axis_coord(direction, b.position).cmp(&axis_coord(direction, a.position))
        });
    } else {
        line.sort_unstable_by_key(|t| axis_coord(direction, t.position));
    }
    line
}
