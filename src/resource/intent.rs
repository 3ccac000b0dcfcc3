use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mvi::Intent;

use super::entity::EntityId;
use super::kind::{OperationKind, ResourceKind};
use super::status::OperationError;

/// Phase of one asynchronous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Started,
    Succeeded,
    Failed,
}

/// Lifecycle event carrying the payload of its phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    Started,
    Succeeded(T),
    Failed(OperationError),
}

impl<T> Lifecycle<T> {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Started => Phase::Started,
            Self::Succeeded(_) => Phase::Succeeded,
            Self::Failed(_) => Phase::Failed,
        }
    }
}

/// Lifecycle event of one operation kind.
///
/// Payloads are raw backend responses. `Create` may succeed with a bare
/// acknowledgement (`null` or a body without `id`).
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAction {
    Load(Lifecycle<Vec<Value>>),
    Create(Lifecycle<Value>),
    Update(Lifecycle<Value>),
    Delete(Lifecycle<EntityId>),
    FindById(Lifecycle<Value>),
}

impl ResourceAction {
    pub fn operation(&self) -> OperationKind {
        match self {
            Self::Load(_) => OperationKind::Load,
            Self::Create(_) => OperationKind::Create,
            Self::Update(_) => OperationKind::Update,
            Self::Delete(_) => OperationKind::Delete,
            Self::FindById(_) => OperationKind::FindById,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Self::Load(lifecycle) => lifecycle.phase(),
            Self::Create(lifecycle) | Self::Update(lifecycle) | Self::FindById(lifecycle) => {
                lifecycle.phase()
            }
            Self::Delete(lifecycle) => lifecycle.phase(),
        }
    }
}

/// An action scoped to exactly one resource store.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceIntent {
    pub kind: ResourceKind,
    pub action: ResourceAction,
}

impl ResourceIntent {
    pub fn new(kind: ResourceKind, action: ResourceAction) -> Self {
        Self { kind, action }
    }
}

impl Intent for ResourceIntent {}
