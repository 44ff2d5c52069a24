/// Marker trait for screen state.
///
/// `Default` is the freshly entered screen, which is what a screen resets to
/// after the user navigates away and back.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
