//! Async operation dispatcher.
//!
//! Wraps a caller-supplied request future in the started / succeeded /
//! failed lifecycle and feeds each phase into the store. The outcome is
//! also returned, so a view can render a failure locally even when the
//! resource keeps write errors out of the shared state.
//!
//! Requests are never cancelled: starting a second request of the same
//! kind only overwrites the tracked status.

use std::future::Future;

use serde_json::Value;

use crate::resource::{
    EntityId, Lifecycle, OperationError, ResourceAction, ResourceIntent, ResourceKind,
};
use crate::store::Store;

/// What a successful create left in the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The backend returned the entity; it is in the collection.
    Stored(EntityId),
    /// The backend only acknowledged. Reload to see the new entity.
    Acknowledged,
}

impl CreateOutcome {
    pub fn needs_reload(&self) -> bool {
        matches!(self, Self::Acknowledged)
    }
}

/// Feeds the lifecycle of caller-supplied requests into a [`Store`].
pub struct Dispatcher {
    store: Store,
}

impl Dispatcher {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Fetch the whole collection.
    pub async fn load<F>(&self, kind: ResourceKind, request: F) -> Result<(), OperationError>
    where
        F: Future<Output = Result<Vec<Value>, OperationError>>,
    {
        self.run(kind, ResourceAction::Load, request).await.map(drop)
    }

    pub async fn create<F>(
        &self,
        kind: ResourceKind,
        request: F,
    ) -> Result<CreateOutcome, OperationError>
    where
        F: Future<Output = Result<Value, OperationError>>,
    {
        let response = self.run(kind, ResourceAction::Create, request).await?;
        Ok(
            match response.get("id").and_then(EntityId::from_value) {
                Some(id) => CreateOutcome::Stored(id),
                None => CreateOutcome::Acknowledged,
            },
        )
    }

    pub async fn update<F>(&self, kind: ResourceKind, request: F) -> Result<(), OperationError>
    where
        F: Future<Output = Result<Value, OperationError>>,
    {
        self.run(kind, ResourceAction::Update, request).await.map(drop)
    }

    /// Delete `id`. The request resolves to `()`; the id comes from the
    /// caller because delete endpoints rarely echo it back.
    pub async fn delete<F>(
        &self,
        kind: ResourceKind,
        id: EntityId,
        request: F,
    ) -> Result<(), OperationError>
    where
        F: Future<Output = Result<(), OperationError>>,
    {
        let request = async move { request.await.map(|()| id) };
        self.run(kind, ResourceAction::Delete, request).await.map(drop)
    }

    pub async fn find_by_id<F>(&self, kind: ResourceKind, request: F) -> Result<(), OperationError>
    where
        F: Future<Output = Result<Value, OperationError>>,
    {
        self.run(kind, ResourceAction::FindById, request).await.map(drop)
    }

    async fn run<T, F>(
        &self,
        kind: ResourceKind,
        action: fn(Lifecycle<T>) -> ResourceAction,
        request: F,
    ) -> Result<T, OperationError>
    where
        T: Clone,
        F: Future<Output = Result<T, OperationError>>,
    {
        self.emit(kind, action(Lifecycle::Started));
        match request.await {
            Ok(value) => {
                self.emit(kind, action(Lifecycle::Succeeded(value.clone())));
                Ok(value)
            }
            Err(reason) => {
                self.emit(kind, action(Lifecycle::Failed(reason.clone())));
                Err(reason)
            }
        }
    }

    fn emit(&self, kind: ResourceKind, action: ResourceAction) {
        self.store.dispatch(ResourceIntent::new(kind, action));
    }
}
