//! Resource stores: one client-side snapshot per remote collection.
//!
//! A store never performs I/O. It only folds lifecycle events of load,
//! create, update, delete and find-by-id operations into its state.

mod entity;
mod intent;
mod kind;
mod reducer;
mod state;
mod status;

pub use entity::{Entity, EntityError, EntityId};
pub use intent::{Lifecycle, Phase, ResourceAction, ResourceIntent};
pub use kind::{ErrorPolicy, OperationKind, ResourceKind};
pub use reducer::ResourceReducer;
pub use state::ResourceState;
pub use status::{OperationError, OperationState, OperationStatus};
