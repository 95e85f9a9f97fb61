//! Move orchestrator - one complete slide over the whole board
//!
//! Pipeline per slide:
//!
//! 1. [`group_lines`]: split the board into lines along the slide axis
//! 2. per line: [`priority_sort`] → [`merge_line`] → [`stack_line`]
//! 3. flatten the lines back into one board
//! 4. [`spawn_tile`]: add one new tile on a free cell
//!
//! The spawn happens even when nothing moved or merged.

use log::debug;

use crate::board::Board;
use crate::line::{group_lines, priority_sort};
use crate::merge::merge_line;
use crate::rng::SpawnSource;
use crate::spawn::spawn_tile;
use crate::stack::stack_line;
use crate::types::Direction;

/// Board after sliding, before the spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub board: Board,
    /// Number of lines that performed a merge
    pub merged_lines: usize,
}

/// Slide and merge every line without spawning.
pub fn shift(board: &Board, direction: Direction) -> Shift {
    let mut merged_lines = 0;
    let lines = group_lines(direction, board).map(|line| {
        let (line, merged) = merge_line(priority_sort(direction, line));
        if merged {
            merged_lines += 1;
        }
        stack_line(direction, line)
    });

    Shift {
        board: Board::assemble(lines.into_iter().flatten()),
        merged_lines,
    }
}

/// Slide the board in `direction`, then spawn one tile from `source`.
pub fn slide<S>(board: &Board, direction: Direction, source: &mut S) -> Board
where
    S: SpawnSource + ?Sized,
{
    let shifted = shift(board, direction);
    let next = spawn_tile(&shifted.board, source);
    debug!(
        "slide {}: {} -> {} tiles, {} line(s) merged",
        direction.as_str(),
        board.len(),
        next.len(),
        shifted.merged_lines
    );
    next
}

/// No slide in any direction could merge and there is no room to spawn.
pub fn is_stuck(board: &Board) -> bool {
    board.is_full()
        && Direction::ALL
            .iter()
            .all(|&direction| shift(board, direction).merged_lines == 0)
}
