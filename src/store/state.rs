use serde::Serialize;

use crate::mvi::UiState;
use crate::resource::{ResourceKind, ResourceState};
use crate::session::SessionState;

/// Process-wide state tree. Each slice is owned by exactly one reducer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub products: ResourceState,
    pub supplies: ResourceState,
    pub product_movements: ResourceState,
    pub supply_movements: ResourceState,
    pub session: SessionState,
}

impl UiState for AppState {}

impl AppState {
    pub fn resource(&self, kind: ResourceKind) -> &ResourceState {
        match kind {
            ResourceKind::Products => &self.products,
            ResourceKind::Supplies => &self.supplies,
            ResourceKind::ProductMovements => &self.product_movements,
            ResourceKind::SupplyMovements => &self.supply_movements,
        }
    }

    pub(super) fn resource_mut(&mut self, kind: ResourceKind) -> &mut ResourceState {
        match kind {
            ResourceKind::Products => &mut self.products,
            ResourceKind::Supplies => &mut self.supplies,
            ResourceKind::ProductMovements => &mut self.product_movements,
            ResourceKind::SupplyMovements => &mut self.supply_movements,
        }
    }

    /// True while any collection load is in flight (global spinner).
    pub fn is_loading(&self) -> bool {
        ResourceKind::ALL
            .iter()
            .any(|kind| self.resource(*kind).load_status().is_loading())
    }

    /// Shared errors of every slice, for the global banner.
    pub fn errors(&self) -> Vec<(ResourceKind, String)> {
        ResourceKind::ALL
            .iter()
            .filter_map(|kind| {
                self.resource(*kind)
                    .error()
                    .map(|error| (*kind, error.to_string()))
            })
            .collect()
    }
}
