//! Tokio channel-based transport for single-process mode
//!
//! Messages are passed directly through an mpsc queue; each carries a
//! oneshot sender for its reply.

use crate::error::TransportError;
use crate::messages::{Message, Response};
use crate::transport::Requester;
use async_trait::async_trait;
use log::debug;
use tokio::sync::{mpsc, oneshot};

/// A received message together with the way back to its caller
pub struct PendingRequest {
    pub message: Message,
    reply_tx: oneshot::Sender<Response>,
}

impl PendingRequest {
    /// Deliver the response. Returns false if the caller stopped waiting.
    pub fn respond(self, response: Response) -> bool {
        let request_id = response.request_id.clone();
        if self.reply_tx.send(response).is_err() {
            debug!("Caller gone, dropping response for {}", request_id);
            return false;
        }
        true
    }
}

/// Client side of the channel transport
#[derive(Clone)]
pub struct ChannelRequester {
    tx: mpsc::Sender<PendingRequest>,
}

impl ChannelRequester {
    /// Create a requester/responder pair
    pub fn pair(capacity: usize) -> (Self, ChannelResponder) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, ChannelResponder { rx })
    }
}

#[async_trait]
impl Requester for ChannelRequester {
    async fn request(&self, message: Message) -> Result<Response, TransportError> {
        let expected = message.request_id.clone();
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send(PendingRequest { message, reply_tx })
            .await
            .map_err(|_| TransportError::ChannelClosed)?;

        let response = reply_rx.await.map_err(|_| TransportError::ChannelClosed)?;
        if response.request_id != expected {
            return Err(TransportError::Correlation {
                expected,
                actual: response.request_id,
            });
        }
        Ok(response)
    }
}

/// Server side of the channel transport
pub struct ChannelResponder {
    rx: mpsc::Receiver<PendingRequest>,
}

impl ChannelResponder {
    /// Receive the next request; `None` once every requester is dropped
    pub async fn next(&mut self) -> Option<PendingRequest> {
        self.rx.recv().await
    }
}
