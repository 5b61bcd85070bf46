/// Marker trait for intents: user gestures and resolved remote calls.
pub trait Intent: Send + 'static {}
