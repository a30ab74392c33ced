//! Error type for JSON encoding.

use thiserror::Error;

/// Errors that can occur while encoding a value to JSON.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The value is neither representable in the JSON grammar nor carries
    /// the [`ToJson`](crate::ToJson) conversion capability.
    #[error("{0} value is not json serializable")]
    NotSerializable(&'static str),

    /// Writing to the output sink failed. The in-memory entry points never
    /// produce this.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
