//! Shared, observable handle on the application state.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::mvi::Reducer;
use crate::resource::{ResourceKind, ResourceState};
use crate::session::SessionState;

use super::intent::AppIntent;
use super::reducer::AppReducer;
use super::state::AppState;

/// Explicitly constructed application store.
///
/// Cloning the handle shares the same state. Events are applied one at a
/// time under the write lock, in the order `dispatch` is called. Readers
/// get cloned snapshots and never observe a half-applied event.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<AppState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Store {
    /// Create a store with empty collections and idle statuses.
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(AppState::default())),
            revision: Arc::new(revision),
        }
    }

    /// Apply one event and notify subscribers.
    pub fn dispatch(&self, intent: impl Into<AppIntent>) {
        let intent = intent.into();
        match &intent {
            AppIntent::Resource(resource) => tracing::debug!(
                resource = %resource.kind,
                operation = %resource.action.operation(),
                phase = ?resource.action.phase(),
                "Applying resource event"
            ),
            AppIntent::Session(session) => {
                tracing::debug!(event = ?session, "Applying session event")
            }
            AppIntent::Reset => tracing::info!("Resetting all stores"),
        }

        {
            let mut state = self.inner.write();
            *state = AppReducer::reduce(std::mem::take(&mut *state), intent);
        }
        self.revision.send_modify(|revision| *revision += 1);
    }

    /// Drop every collection and the session (logout).
    pub fn reset(&self) {
        self.dispatch(AppIntent::Reset);
    }

    /// Clone of the whole tree.
    pub fn snapshot(&self) -> AppState {
        self.inner.read().clone()
    }

    /// Clone of one resource slice.
    pub fn resource(&self, kind: ResourceKind) -> ResourceState {
        self.inner.read().resource(kind).clone()
    }

    pub fn session(&self) -> SessionState {
        self.inner.read().session.clone()
    }

    /// Number of events applied so far.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver that wakes after every applied event.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
