//! Per-operation status tracking.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Progress of the latest request of one operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl OperationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reason reported by the backend or transport.
///
/// Either a plain message or whatever structured body the backend
/// returned (validation errors usually come back as objects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationError {
    Message(String),
    Payload(Value),
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Payload(payload) => match payload.get("message").and_then(Value::as_str) {
                Some(message) => f.write_str(message),
                None => write!(f, "{}", payload),
            },
        }
    }
}

impl std::error::Error for OperationError {}

impl From<&str> for OperationError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for OperationError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<Value> for OperationError {
    fn from(payload: Value) -> Self {
        match payload {
            Value::String(message) => Self::Message(message),
            other => Self::Payload(other),
        }
    }
}

/// Status and last error of one operation kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OperationState {
    status: OperationStatus,
    error: Option<OperationError>,
}

impl OperationState {
    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }

    /// Enter `Loading` and drop the previous error, which is returned.
    pub(crate) fn start(&mut self) -> Option<OperationError> {
        self.status = OperationStatus::Loading;
        self.error.take()
    }

    pub(crate) fn succeed(&mut self) {
        self.status = OperationStatus::Succeeded;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, error: Option<OperationError>) {
        self.status = OperationStatus::Failed;
        self.error = error;
    }
}
