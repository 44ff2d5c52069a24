/// Marker trait for things a user can ask a screen to do.
pub trait Intent: Send + 'static {}
