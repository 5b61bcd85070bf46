//! Model-View-Intent primitives for the voting board.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Presentation
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: everything the presentation layer needs to render
//! - **Intent**: a user gesture or a resolved network call
//! - **Reducer**: the only place state changes, `(State, Intent) -> State`
//!
//! Network I/O never happens inside a reducer. The controller awaits the
//! remote client first and then dispatches the result as an intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
