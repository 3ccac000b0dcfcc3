//! Base trait for state slices.

/// Marker trait for state snapshots.
///
/// Snapshots are cloned out to readers, compared to detect changes, and
/// start from `Default` (empty collections, idle statuses).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
