//! Integration tests for the game state container and intent dispatch

use slide2048::core::{dispatch, Board, CoreError, GameState, SimpleRng, SpawnSource};
use slide2048::types::{Direction, Intent, Position, Tile, CELL_COUNT, INITIAL_TILES};

/// Scripted randomness: always the first free cell, always the given value.
struct FirstFree(u32);

impl SpawnSource for FirstFree {
    fn choose_position(&mut self, free: &[Position]) -> Option<Position> {
        free.first().copied()
    }

    fn choose_value(&mut self) -> u32 {
        self.0
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.board().len(), INITIAL_TILES);
    assert!(!state.game_over());

    for dir in Direction::ALL.iter().cycle().take(20) {
        state.apply_intent(Intent::MoveDirection(*dir)).unwrap();
    }
    assert_eq!(state.moves(), 20);
    assert!(state.board().len() <= CELL_COUNT);
}

#[test]
fn test_concrete_up_scenario() {
    // {(0,0):2, (0,1):2} slid Up: one 4 at the top, one spawned tile elsewhere.
    let start = Board::from_tiles([
        Tile::new(Position::new(0, 0), 2),
        Tile::new(Position::new(0, 1), 2),
    ])
    .unwrap();
    let next = dispatch(&start, Intent::MoveDirection(Direction::Up), &mut FirstFree(4)).unwrap();

    assert_eq!(next.len(), 2);
    assert_eq!(next.get(Position::new(0, 0)), Some(Tile::new(Position::new(0, 0), 4)));
    // First free cell in row-major order after the merge.
    assert_eq!(next.get(Position::new(1, 0)), Some(Tile::new(Position::new(1, 0), 4)));
}

#[test]
fn test_scripted_source_is_deterministic() {
    let start = Board::from_tiles([Tile::new(Position::new(3, 3), 8)]).unwrap();
    let a = dispatch(&start, Intent::MoveDirection(Direction::Left), &mut FirstFree(2)).unwrap();
    let b = dispatch(&start, Intent::MoveDirection(Direction::Left), &mut FirstFree(2)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.get(Position::new(0, 3)).map(|t| t.value), Some(8));
}

#[test]
fn test_dispatch_rejects_restart() {
    let start = Board::empty();
    let err = dispatch(&start, Intent::Restart, &mut SimpleRng::new(1)).unwrap_err();
    assert_eq!(err, CoreError::UnrecognizedIntent { intent: "restart" });
    assert_eq!(err.to_string(), "unrecognized intent: restart");
}

#[test]
fn test_state_survives_rejected_intent() {
    let mut state = GameState::new(8);
    state
        .apply_intent(Intent::MoveDirection(Direction::Right))
        .unwrap();
    let board = *state.board();

    assert!(state.apply_intent(Intent::Restart).is_err());
    assert_eq!(*state.board(), board);
    assert_eq!(state.moves(), 1);
}

#[test]
fn test_play_until_stuck() {
    let mut state = GameState::new(2048);
    let mut steps = 0;
    while !state.game_over() && steps < 100_000 {
        let dir = Direction::ALL[steps % 4];
        state.apply_intent(Intent::MoveDirection(dir)).unwrap();
        steps += 1;
    }
    assert!(state.game_over(), "still playable after {steps} slides");
    assert!(state.board().is_full());
    assert_eq!(state.moves() as usize, steps);
}
