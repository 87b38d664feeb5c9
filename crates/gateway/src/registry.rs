//! Action registry and dispatcher
//!
//! The registry is built once at startup, then shared read-only by every
//! dispatch. Dispatch always returns exactly one response carrying the
//! message's `requestId`, whatever the handler does.

use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::handlers::{
    ActionHandler, GetRailwaySnapshotHandler, GetRouteDetailHandler, HandlerContext,
    ListDepotsHandler, ListNetworkOverviewHandler, ListStationsHandler, PingHandler,
};
use crate::messages::{Message, Response};

/// Maps action names to handlers
#[derive(Default)]
pub struct ActionRegistry {
    handlers: HashMap<String, Box<dyn ActionHandler>>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in action
    pub fn with_default_handlers(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let mut registry = Self::new();
        registry.register(GetRailwaySnapshotHandler)?;
        registry.register(ListNetworkOverviewHandler)?;
        registry.register(ListStationsHandler)?;
        registry.register(ListDepotsHandler)?;
        registry.register(GetRouteDetailHandler)?;
        if config.enable_ping {
            registry.register(PingHandler)?;
        }
        Ok(registry)
    }

    /// Register a handler under its action name
    ///
    /// Registering the same action twice is a wiring mistake and is rejected.
    pub fn register(&mut self, handler: impl ActionHandler + 'static) -> Result<(), GatewayError> {
        self.register_boxed(Box::new(handler))
    }

    /// Register an already boxed handler
    pub fn register_boxed(&mut self, handler: Box<dyn ActionHandler>) -> Result<(), GatewayError> {
        let action = handler.action().to_string();
        if self.handlers.contains_key(&action) {
            return Err(GatewayError::DuplicateAction(action));
        }
        info!("Registered action {}", action);
        self.handlers.insert(action, handler);
        Ok(())
    }

    /// Whether an action has a handler
    pub fn contains(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    /// Registered action names, sorted
    pub fn actions(&self) -> Vec<&str> {
        let mut actions: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        actions.sort_unstable();
        actions
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route a message to its handler and return the response
    ///
    /// Unknown actions are answered with `invalid-payload`. Handler errors and
    /// panics are logged and answered with a sanitized `error` response.
    pub fn dispatch(&self, message: &Message, ctx: &HandlerContext) -> Response {
        let Some(handler) = self.handlers.get(&message.action) else {
            warn!(
                "Unknown action {} (request {})",
                message.action, message.request_id
            );
            return Response::invalid_payload(
                &message.request_id,
                format!("unknown action: {}", message.action),
            );
        };

        debug!("Dispatching {} (request {})", message.action, message.request_id);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(message, ctx)));
        match outcome {
            Ok(Ok(response)) if response.request_id == message.request_id => response,
            Ok(Ok(response)) => {
                error!(
                    "Handler for {} answered request {} with request id {}",
                    message.action, message.request_id, response.request_id
                );
                Response::internal_error(&message.request_id, &failure_detail(&message.action))
            }
            Ok(Err(e)) => {
                error!(
                    "Handler for {} failed on request {}: {}",
                    message.action, message.request_id, e
                );
                Response::internal_error(&message.request_id, &failure_detail(&message.action))
            }
            Err(panic) => {
                error!(
                    "Handler for {} panicked on request {}: {}",
                    message.action,
                    message.request_id,
                    panic_message(panic.as_ref())
                );
                Response::internal_error(&message.request_id, &failure_detail(&message.action))
            }
        }
    }
}

fn failure_detail(action: &str) -> String {
    format!("failed to handle {}", action)
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
