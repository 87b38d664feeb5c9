use thiserror::Error;

/// Errors raised while encoding a snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("Snapshot for {dimension} is not representable: {reason}")]
    Unrepresentable { dimension: String, reason: String },
}

pub type SerializeResult<T> = std::result::Result<T, SerializeError>;
