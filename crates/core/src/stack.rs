//! Stacking - pack a merged line against the target edge.

use crate::line::Line;
use crate::types::{Direction, Position, Tile, BOARD_SIZE};

/// Reassign slide-axis coordinates so the line sits contiguously against the
/// edge it slides toward.
///
/// The line arrives in priority order (far tile first). It is reversed so the
/// tile nearest the edge comes first, and the `i`-th tile lands on `i` for
/// Up/Left or `BOARD_SIZE - 1 - i` for Down/Right. The perpendicular
/// coordinate is left alone.
pub fn stack_line(direction: Direction, line: Line) -> Line {
    line.into_iter()
        .rev()
        .enumerate()
        .map(|(i, tile)| {
            let coord = if direction.packs_toward_origin() {
                i as u8
            } else {
                BOARD_SIZE - 1 - i as u8
            };
            let pos = if direction.is_vertical() {
                Position::new(tile.position.x, coord)
            } else {
                Position::new(coord, tile.position.y)
            };
            tile.moved_to(pos)
        })
        .collect()
}
