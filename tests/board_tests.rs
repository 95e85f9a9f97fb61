//! Board tests - invariants of the board model and the slide pipeline stages

use slide2048::core::line::{group_lines, priority_sort};
use slide2048::core::merge::merge_line;
use slide2048::core::stack::stack_line;
use slide2048::core::{all_positions, shift, Board, CoreError, InvariantViolation};
use slide2048::types::{Direction, Position, Tile, BOARD_SIZE, CELL_COUNT, MAX_TILE_VALUE};

fn tile(x: u8, y: u8, value: u32) -> Tile {
    Tile::new(Position::new(x, y), value)
}

fn board(tiles: &[(u8, u8, u32)]) -> Board {
    Board::from_tiles(tiles.iter().map(|&(x, y, v)| tile(x, y, v))).unwrap()
}

#[test]
fn test_board_empty() {
    let board = Board::empty();
    assert_eq!(board, Board::default());

    // All cells should be free
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            assert_eq!(board.get(Position::new(x, y)), None, "Cell ({}, {}) should be empty", x, y);
        }
    }
    assert_eq!(board.free_positions().len(), CELL_COUNT);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = board(&[(3, 3, 2)]);
    assert_eq!(board.get(Position::new(BOARD_SIZE, 0)), None);
    assert_eq!(board.get(Position::new(0, BOARD_SIZE)), None);
}

#[test]
fn test_all_positions_cover_grid() {
    let positions: Vec<Position> = all_positions().collect();
    assert_eq!(positions.len(), CELL_COUNT);
    assert_eq!(positions.first(), Some(&Position::new(0, 0)));
    assert_eq!(positions.last(), Some(&Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1)));
}

#[test]
fn test_invalid_boards_rejected() {
    assert!(matches!(
        Board::from_tiles([tile(0, 9, 2)]),
        Err(CoreError::InvariantViolation(InvariantViolation::OutOfBounds { x: 0, y: 9 }))
    ));
    assert!(matches!(
        Board::from_tiles([tile(2, 2, 2), tile(2, 2, 2)]),
        Err(CoreError::InvariantViolation(InvariantViolation::DuplicatePosition { x: 2, y: 2 }))
    ));
    assert!(matches!(
        Board::from_tiles([tile(1, 1, 10)]),
        Err(CoreError::InvariantViolation(InvariantViolation::InvalidValue { value: 10 }))
    ));
}

#[test]
fn test_seventeen_tiles_rejected() {
    let mut tiles: Vec<Tile> = all_positions().map(|p| Tile::new(p, 2)).collect();
    tiles.push(tile(0, 0, 4));
    assert!(Board::from_tiles(tiles).is_err());
}

#[test]
fn test_pipeline_single_column_up() {
    // Column x = 2: 2 at the top, two 4s lower down, gaps in between.
    let start = board(&[(2, 0, 2), (2, 2, 4), (2, 3, 4)]);
    let lines = group_lines(Direction::Up, &start);
    let sorted = priority_sort(Direction::Up, lines[2].clone());
    let values: Vec<u32> = sorted.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![4, 4, 2]);

    let (merged, did_merge) = merge_line(sorted);
    assert!(did_merge);
    let stacked = stack_line(Direction::Up, merged);
    assert_eq!(stacked.as_slice(), &[tile(2, 0, 2), tile(2, 1, 8)]);
}

#[test]
fn test_shift_compacts_against_edge() {
    let start = board(&[(1, 0, 2), (3, 0, 4), (0, 3, 8), (2, 3, 16)]);
    let out = shift(&start, Direction::Right);
    assert_eq!(out.merged_lines, 0);
    assert_eq!(out.board, board(&[(2, 0, 2), (3, 0, 4), (2, 3, 8), (3, 3, 16)]));
}

#[test]
fn test_shift_merges_per_line() {
    // Two rows each holding one mergeable pair.
    let start = board(&[(0, 0, 2), (3, 0, 2), (1, 2, 8), (2, 2, 8)]);
    let out = shift(&start, Direction::Left);
    assert_eq!(out.merged_lines, 2);
    assert_eq!(out.board, board(&[(0, 0, 4), (0, 2, 16)]));
}

#[test]
fn test_shift_full_line_of_equal_values() {
    // [2, 2, 2, 2] merges its first pair only.
    let start = board(&[(0, 1, 2), (1, 1, 2), (2, 1, 2), (3, 1, 2)]);
    let out = shift(&start, Direction::Right);
    assert_eq!(out.merged_lines, 1);
    assert_eq!(out.board, board(&[(3, 1, 2), (2, 1, 2), (1, 1, 4)]));
}

#[test]
fn test_shift_at_top_of_value_range() {
    // Largest values the model accepts: the half-cap pair merges, the capped pair stays.
    let half = MAX_TILE_VALUE / 2;
    let start = board(&[(0, 0, half), (1, 0, half), (0, 1, MAX_TILE_VALUE), (1, 1, MAX_TILE_VALUE)]);
    let out = shift(&start, Direction::Left);
    assert_eq!(out.merged_lines, 1);
    assert_eq!(
        out.board,
        board(&[(0, 0, MAX_TILE_VALUE), (0, 1, MAX_TILE_VALUE), (1, 1, MAX_TILE_VALUE)])
    );
}

#[test]
fn test_value_past_cap_rejected_before_any_slide() {
    let too_big = MAX_TILE_VALUE << 1;
    assert!(matches!(
        Board::from_tiles([tile(0, 0, too_big), tile(1, 0, too_big)]),
        Err(CoreError::InvariantViolation(InvariantViolation::InvalidValue { value })) if value == too_big
    ));
}
