//! Transport abstraction layer
//!
//! Carries `Message`s to the gateway server and `Response`s back. Tokio
//! channels are used in-process; the trait lets a socket transport take their
//! place without touching the dispatch code.

pub mod channel;

use crate::error::TransportError;
use crate::messages::{Message, Response};
use async_trait::async_trait;

/// Request/Reply pattern for action calls
#[async_trait]
pub trait Requester: Send + Sync {
    /// Send a message and wait for its response
    async fn request(&self, message: Message) -> Result<Response, TransportError>;
}
