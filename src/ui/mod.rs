//! Terminal presentation: palette, component variant tables and the store
//! summary widget.

pub mod summary;
pub mod theme;
mod variant;

pub use variant::{ButtonVariant, CardVariant, ModalVariant, TableVariant, TabsVariant, Variant};
