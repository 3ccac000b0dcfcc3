//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are lifecycle events (started, succeeded, failed) reported for a
/// single operation, or session events such as logout.
pub trait Intent: Send + 'static {}
