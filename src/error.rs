/// Errors raised by the grid core.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A geometry value failed validation at construction time.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },
    /// An indexed read or removal addressed a position past the end.
    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
