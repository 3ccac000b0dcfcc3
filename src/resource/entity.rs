//! Opaque backend records and their identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Identity of an entity inside a collection.
///
/// Backends send either integers or strings. The two are never equal to
/// each other: `1` and `"1"` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl EntityId {
    /// Read an id out of a JSON value. Floats, booleans and containers are
    /// not ids.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Int),
            Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Why a JSON value cannot be stored as an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    #[error("expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("record has no usable `id` field")]
    MissingId,
}

/// One record of a resource collection.
///
/// The body is kept exactly as the backend sent it; only `id` is
/// interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Entity {
    id: EntityId,
    body: Value,
}

impl Entity {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Look up a top-level field of the record.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }

    pub fn into_value(self) -> Value {
        self.body
    }
}

impl TryFrom<Value> for Entity {
    type Error = EntityError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let id = match &body {
            Value::Object(map) => map
                .get("id")
                .and_then(EntityId::from_value)
                .ok_or(EntityError::MissingId)?,
            other => {
                return Err(EntityError::NotAnObject {
                    kind: json_kind(other),
                })
            }
        };
        Ok(Self { id, body })
    }
}

impl From<Entity> for Value {
    fn from(entity: Entity) -> Self {
        entity.body
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
