//! Engine error types.

use thiserror::Error;

/// A board or tile that breaks the data model.
///
/// These are programmer errors: nothing inside the engine tries to repair them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("tile position ({x}, {y}) is outside the board")]
    OutOfBounds { x: u8, y: u8 },

    #[error("two tiles share position ({x}, {y})")]
    DuplicatePosition { x: u8, y: u8 },

    #[error("tile value {value} is not a power of two between 2 and 2^30")]
    InvalidValue { value: u32 },
}

/// Errors surfaced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolation),

    #[error("unrecognized intent: {intent}")]
    UnrecognizedIntent { intent: &'static str },
}
