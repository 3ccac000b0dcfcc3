//! Store aggregator: composes the resource stores and the session into
//! one state tree with no cross-slice logic.

mod handle;
mod intent;
mod reducer;
mod state;

pub use handle::Store;
pub use intent::AppIntent;
pub use reducer::AppReducer;
pub use state::AppState;
