//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are self-contained (everything the view needs to draw) and
/// comparable, so a render pass can be skipped when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
