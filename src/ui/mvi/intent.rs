//! Base trait for intents in the MVI features.

/// Marker trait for intent objects.
///
/// Intents cover user actions (a selection, the back key, a retry) and
/// system events (a gateway result arriving). Reducers consume them to
/// produce the next state.
pub trait Intent: Send + 'static {}
