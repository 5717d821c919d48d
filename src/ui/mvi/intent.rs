//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents cover user actions (keystrokes), system events (fetch outcomes),
/// and nothing else; they are consumed by reducers to produce new states.
pub trait Intent: Send + 'static {}
