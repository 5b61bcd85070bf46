use thiserror::Error;

use crate::client::ClientError;
use crate::entity::DraftField;

/// Errors returned by controller operations.
///
/// None of these is fatal: the store and selection keep their last good
/// values whenever an operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Validation failed: {field} must not be empty")]
    Validation { field: DraftField },
}

impl BoardError {
    pub fn error_type(&self) -> &'static str {
        match self {
            BoardError::Client(err) => err.error_type(),
            BoardError::Validation { .. } => "validation_failed",
        }
    }
}
