//! Recorded lifecycle events.
//!
//! A recording is a JSON array of objects such as
//!
//! ```json
//! [
//!   {"resource": "products", "operation": "load", "phase": "started"},
//!   {"resource": "products", "operation": "load", "phase": "succeeded",
//!    "payload": [{"id": 1, "name": "Flour"}]},
//!   {"resource": "product-movements", "operation": "create", "phase": "failed",
//!    "reason": "invalid quantity"},
//!   {"resource": "products", "operation": "delete", "phase": "succeeded", "id": 1}
//! ]
//! ```

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::resource::{
    EntityId, Lifecycle, OperationError, OperationKind, Phase, ResourceAction, ResourceIntent,
    ResourceKind,
};
use crate::store::Store;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to parse recording: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Event {index}: {operation} succeeded without a payload")]
    MissingPayload {
        index: usize,
        operation: OperationKind,
    },

    #[error("Event {index}: load payload must be an array")]
    InvalidPayload { index: usize },

    #[error("Event {index}: delete succeeded without an id")]
    MissingId { index: usize },

    #[error("Event {index}: failure without a reason")]
    MissingReason { index: usize },
}

/// One recorded event, as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordedEvent {
    pub resource: ResourceKind,
    pub operation: OperationKind,
    pub phase: Phase,
    #[serde(default)]
    pub payload: Option<Value>,
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub reason: Option<OperationError>,
}

impl RecordedEvent {
    /// Convert into a typed intent. `index` is only used for error messages.
    pub fn into_intent(self, index: usize) -> Result<ResourceIntent, ReplayError> {
        let RecordedEvent {
            resource,
            operation,
            phase,
            payload,
            id,
            reason,
        } = self;

        let action = match operation {
            OperationKind::Load => ResourceAction::Load(lifecycle(index, phase, reason, || {
                match payload {
                    Some(Value::Array(values)) => Ok(values),
                    Some(_) => Err(ReplayError::InvalidPayload { index }),
                    None => Err(ReplayError::MissingPayload { index, operation }),
                }
            })?),
            // A create without payload is a bare acknowledgement.
            OperationKind::Create => ResourceAction::Create(lifecycle(index, phase, reason, || {
                Ok(payload.unwrap_or(Value::Null))
            })?),
            OperationKind::Update => ResourceAction::Update(lifecycle(index, phase, reason, || {
                payload.ok_or(ReplayError::MissingPayload { index, operation })
            })?),
            OperationKind::Delete => ResourceAction::Delete(lifecycle(index, phase, reason, || {
                id.or_else(|| payload.as_ref().and_then(EntityId::from_value))
                    .ok_or(ReplayError::MissingId { index })
            })?),
            OperationKind::FindById => {
                ResourceAction::FindById(lifecycle(index, phase, reason, || {
                    payload.ok_or(ReplayError::MissingPayload { index, operation })
                })?)
            }
        };

        Ok(ResourceIntent::new(resource, action))
    }
}

fn lifecycle<T>(
    index: usize,
    phase: Phase,
    reason: Option<OperationError>,
    payload: impl FnOnce() -> Result<T, ReplayError>,
) -> Result<Lifecycle<T>, ReplayError> {
    match phase {
        Phase::Started => Ok(Lifecycle::Started),
        Phase::Succeeded => payload().map(Lifecycle::Succeeded),
        Phase::Failed => reason
            .map(Lifecycle::Failed)
            .ok_or(ReplayError::MissingReason { index }),
    }
}

/// Parse a recording into intents, failing on the first malformed event.
pub fn parse_events(json: &str) -> Result<Vec<ResourceIntent>, ReplayError> {
    let events: Vec<RecordedEvent> = serde_json::from_str(json)?;
    events
        .into_iter()
        .enumerate()
        .map(|(index, event)| event.into_intent(index))
        .collect()
}

/// Apply intents to the store in order.
pub fn replay(store: &Store, intents: Vec<ResourceIntent>) {
    let count = intents.len();
    for intent in intents {
        store.dispatch(intent);
    }
    tracing::info!(events = count, revision = store.revision(), "Replay finished");
}
