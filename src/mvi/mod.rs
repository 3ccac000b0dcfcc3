//! Model-View-Intent primitives shared by every state slice.
//!
//! # Architecture
//!
//! ```text
//! Dispatcher ──→ Intent ──→ Reducer ──→ State ──→ View
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: cloneable snapshot of one slice of client data
//! - **Intent**: one lifecycle event of one asynchronous operation
//! - **Reducer**: pure function that folds an intent into a state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
