//! Handle to a running provider

use beacon_gateway::{ChannelRequester, Message, Requester, Response, TransportError};
use railway_sim::RailwayWorld;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::BootstrapError;

/// Running provider: the request side of its transport and the world it serves
pub struct ProviderHandle {
    requester: ChannelRequester,
    world: Arc<RailwayWorld>,
    task: JoinHandle<()>,
}

impl ProviderHandle {
    pub(crate) fn new(
        requester: ChannelRequester,
        world: Arc<RailwayWorld>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            requester,
            world,
            task,
        }
    }

    /// Send an action with a fresh request id
    pub async fn request(
        &self,
        action: &str,
        payload: Option<Value>,
    ) -> Result<Response, TransportError> {
        let request_id = Uuid::new_v4().to_string();
        let message = match payload {
            Some(payload) => Message::new(request_id, action, payload),
            None => Message::without_payload(request_id, action),
        };
        self.requester.request(message).await
    }

    /// Another requester on the same server, for concurrent callers
    pub fn requester(&self) -> ChannelRequester {
        self.requester.clone()
    }

    /// The world the handlers read from; updates are visible to the next request
    pub fn world(&self) -> &Arc<RailwayWorld> {
        &self.world
    }

    /// Stop accepting requests and wait for the server to drain
    ///
    /// The server runs until every requester is dropped, so clones handed out
    /// by [`requester`](Self::requester) must be dropped first.
    pub async fn shutdown(self) -> Result<(), BootstrapError> {
        drop(self.requester);
        self.task
            .await
            .map_err(|e| BootstrapError::Server(e.to_string()))?;
        log::info!("Provider stopped");
        Ok(())
    }
}
