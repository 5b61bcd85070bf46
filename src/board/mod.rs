//! Board state: the entity store plus the current selection.
//!
//! # Architecture
//!
//! Uses the MVI pattern:
//! - `state.rs` - [`BoardState`] and the [`Selection`] enum (Unselected → Selected)
//! - `intent.rs` - resolved fetches and vote gestures
//! - `reducer.rs` - transitions, including the store write-back after every
//!   vote mutation

mod intent;
mod reducer;
mod state;

pub use intent::BoardIntent;
pub use reducer::BoardReducer;
pub use state::{BoardSnapshot, BoardState, Selection};
