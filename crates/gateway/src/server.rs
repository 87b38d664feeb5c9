//! Gateway server - drives the registry from a transport
//!
//! Each received message is dispatched on the blocking pool, so snapshot
//! encoding never stalls the runtime. A semaphore bounds how many dispatches
//! run at once.

use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::config::GatewayConfig;
use crate::handlers::HandlerContext;
use crate::messages::{Message, Response};
use crate::registry::ActionRegistry;
use crate::transport::channel::ChannelResponder;

/// Serves requests from a transport against a registry
pub struct GatewayServer {
    registry: Arc<ActionRegistry>,
    context: HandlerContext,
    permits: Arc<Semaphore>,
}

impl GatewayServer {
    pub fn new(registry: ActionRegistry, context: HandlerContext, config: &GatewayConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            context,
            permits: Arc::new(Semaphore::new(config.max_concurrent_requests.max(1))),
        }
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Dispatch a single message on the current thread
    pub fn dispatch(&self, message: &Message) -> Response {
        self.registry.dispatch(message, &self.context)
    }

    /// Serve until every requester is dropped
    ///
    /// Requests already being handled when the channel closes still get their
    /// responses.
    pub async fn serve(&self, mut responder: ChannelResponder) {
        info!("Gateway server started ({} actions)", self.registry.len());

        while let Some(pending) = responder.next().await {
            let permit = match self.permits.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Dispatch semaphore closed, stopping server");
                    break;
                }
            };

            let registry = Arc::clone(&self.registry);
            let context = self.context.clone();
            debug!("Accepted request {}", pending.message.request_id);

            tokio::task::spawn_blocking(move || {
                let _permit = permit;
                let response = registry.dispatch(&pending.message, &context);
                pending.respond(response);
            });
        }

        info!("Gateway server stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Actions;
    use crate::handlers::test_support::{FakeGateway, SizedSerializer, context};
    use crate::messages::ResponseStatus;
    use crate::transport::Requester;
    use crate::transport::channel::ChannelRequester;

    fn server() -> Arc<GatewayServer> {
        let config = GatewayConfig::default();
        let registry = ActionRegistry::with_default_handlers(&config).unwrap();
        let ctx = context(
            FakeGateway::ready(&["overworld"]),
            SizedSerializer::new(&[("overworld", 8)]),
        );
        Arc::new(GatewayServer::new(registry, ctx, &config))
    }

    #[test]
    fn test_direct_dispatch() {
        let response = server().dispatch(&Message::without_payload("d-1", Actions::PING));
        assert!(response.is_ok());
        assert_eq!(response.request_id, "d-1");
    }

    #[tokio::test]
    async fn test_serve_answers_over_channel() {
        let server = server();
        let (requester, responder) = ChannelRequester::pair(16);
        let serving = {
            let server = Arc::clone(&server);
            tokio::spawn(async move { server.serve(responder).await })
        };

        let response = requester
            .request(Message::without_payload("s-1", Actions::GET_RAILWAY_SNAPSHOT))
            .await
            .unwrap();
        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.payload["snapshots"][0]["length"], 8);

        let response = requester
            .request(Message::without_payload("s-2", "mtr:bogus"))
            .await
            .unwrap();
        assert_eq!(response.status, ResponseStatus::InvalidPayload);

        drop(requester);
        serving.await.unwrap();
    }
}
