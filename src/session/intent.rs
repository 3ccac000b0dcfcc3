use crate::mvi::Intent;
use crate::resource::OperationError;

use super::token::AuthToken;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    LoginStarted,
    LoginSucceeded { user: String, token: AuthToken },
    LoginFailed { reason: OperationError },
    /// Session read back from persisted storage at startup.
    Restored { user: String, token: AuthToken },
    /// Session ended by the user; storage is cleared separately.
    LoggedOut,
}

impl Intent for SessionIntent {}
