//! 2048-style slide engine (workspace facade crate).
//!
//! Re-exports the workspace crates as `slide2048::{core,input,types}` so the
//! binary, benches and integration tests share one import path.

pub use slide2048_core as core;
pub use slide2048_input as input;
pub use slide2048_types as types;
