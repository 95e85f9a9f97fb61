//! Random spawner - drop one new tile on an empty cell after a slide.

use log::trace;

use crate::board::Board;
use crate::rng::SpawnSource;
use crate::types::Tile;

/// Place one new tile on a uniformly chosen free cell.
///
/// A full board comes back unchanged; that is not an error.
pub fn spawn_tile<S>(board: &Board, source: &mut S) -> Board
where
    S: SpawnSource + ?Sized,
{
    let free = board.free_positions();
    let Some(pos) = source.choose_position(&free) else {
        trace!("spawn skipped: board is full");
        return *board;
    };
    let value = source.choose_value();
    trace!("spawn {value} at {pos} ({} free cells)", free.len());

    Board::assemble(board.tiles().chain(std::iter::once(Tile::new(pos, value))))
}
