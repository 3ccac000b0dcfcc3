use serde::Serialize;

use crate::mvi::UiState;
use crate::resource::{OperationError, OperationStatus};

use super::token::AuthToken;

/// Who is logged in, and how the last login attempt went.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SessionState {
    pub status: OperationStatus,
    pub user: Option<String>,
    pub token: Option<AuthToken>,
    pub error: Option<OperationError>,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
