//! Authenticated session slice and its persistence.

mod intent;
mod manager;
mod reducer;
mod state;
mod token;

pub use intent::SessionIntent;
pub use manager::{Credentials, SessionError, SessionManager};
pub use reducer::SessionReducer;
pub use state::SessionState;
pub use token::AuthToken;
