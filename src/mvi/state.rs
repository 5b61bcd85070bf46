/// Marker trait for renderable state.
///
/// `PartialEq` lets callers skip a re-render when a dispatch changed nothing.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
