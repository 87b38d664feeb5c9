//! Beacon Gateway
//!
//! Action dispatch layer of the Beacon provider. Provides:
//! - Wire message types (`Message` in, `Response` out)
//! - An action registry that routes messages to handlers
//! - Railway query handlers backed by a [`QueryGateway`](beacon_ports::QueryGateway)
//! - MessagePack snapshot encoding
//! - An in-process channel transport and the server loop that drives it
//!
//! ## Architecture
//!
//! ```text
//! Transport (channels, sockets, ...)
//!         │ Message
//!    ┌────▼─────┐
//!    │ Registry │── unknown action ──► invalid-payload
//!    └────┬─────┘
//!         │ action name
//!    ┌────▼─────┐      ┌──────────────┐
//!    │ Handler  │─────►│ QueryGateway │  (host simulation)
//!    └────┬─────┘      └──────────────┘
//!         │ snapshots
//!    ┌────▼───────┐
//!    │ Serializer │  MessagePack → base64
//!    └────┬───────┘
//!         │ Response
//!         ▼
//! ```
//!
//! Every message produces exactly one response carrying the caller's
//! `requestId`, including when the handler fails.

pub mod actions;
pub mod config;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod registry;
pub mod serializer;
pub mod server;
pub mod transport;

// Re-export commonly used types
pub use actions::Actions;
pub use config::{ConfigError, GatewayConfig};
pub use error::{GatewayError, HandlerError, PayloadError, TransportError};
pub use handlers::{ActionHandler, HandlerContext, HandlerResult};
pub use messages::{Message, Response, ResponseStatus, SerializedSnapshotEntry};
pub use registry::ActionRegistry;
pub use serializer::{MESSAGEPACK_FORMAT, MessagePackSerializer};
pub use server::GatewayServer;
pub use transport::{
    Requester,
    channel::{ChannelRequester, ChannelResponder, PendingRequest},
};
