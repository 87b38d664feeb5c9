//! Error types for the gateway crate

use beacon_ports::SerializeError;
use thiserror::Error;

/// Transport-level errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Channel closed")]
    ChannelClosed,

    #[error("Response correlation mismatch: expected {expected}, got {actual}")]
    Correlation { expected: String, actual: String },
}

/// Gateway-level errors (setup and wiring)
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Action already registered: {0}")]
    DuplicateAction(String),
}

/// Unexpected failures inside a handler
///
/// These never reach the caller verbatim: the registry logs them and answers
/// with a sanitized `error` response.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] SerializeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Request payload validation failures, reported as `invalid-payload`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload must be an object")]
    NotAnObject,

    #[error("{0} must be a string")]
    NotAString(&'static str),

    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be an integer")]
    NotAnInteger(&'static str),
}
