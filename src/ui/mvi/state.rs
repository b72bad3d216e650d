//! Base trait for feature state in the MVI features.

/// Marker trait for screen state objects.
///
/// States are immutable snapshots: cloned to produce successors, compared
/// with `PartialEq` to detect changes, and self-contained enough to render
/// from directly.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
