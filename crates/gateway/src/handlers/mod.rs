//! Action handlers
//!
//! A handler implements one named action. Handlers are plain values with no
//! per-request state; everything they need comes from the [`HandlerContext`].

mod get_railway_snapshot;
mod get_route_detail;
mod list_depots;
mod list_network_overview;
mod list_stations;
mod ping;

#[cfg(test)]
pub(crate) mod test_support;

pub use get_railway_snapshot::GetRailwaySnapshotHandler;
pub use get_route_detail::GetRouteDetailHandler;
pub use list_depots::ListDepotsHandler;
pub use list_network_overview::ListNetworkOverviewHandler;
pub use list_stations::ListStationsHandler;
pub use ping::PingHandler;

use beacon_core::DimensionSnapshot;
use beacon_ports::{Clock, QueryGateway, SnapshotSerializer};
use log::{debug, warn};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::HandlerError;
use crate::messages::{Message, Response};

/// Result of a handler invocation
///
/// `Err` is reserved for unexpected failures; expected outcomes such as
/// `not-ready` or `invalid-payload` are `Ok` responses.
pub type HandlerResult = Result<Response, HandlerError>;

/// A single named action
pub trait ActionHandler: Send + Sync {
    /// Action name this handler answers to
    fn action(&self) -> &str;

    /// Handle a message and build its response
    fn handle(&self, message: &Message, ctx: &HandlerContext) -> HandlerResult;
}

/// Shared collaborators handed to every handler
#[derive(Clone)]
pub struct HandlerContext {
    gateway: Arc<dyn QueryGateway>,
    serializer: Arc<dyn SnapshotSerializer>,
    clock: Arc<dyn Clock>,
}

impl HandlerContext {
    pub fn new(
        gateway: Arc<dyn QueryGateway>,
        serializer: Arc<dyn SnapshotSerializer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            gateway,
            serializer,
            clock,
        }
    }

    pub fn gateway(&self) -> &dyn QueryGateway {
        self.gateway.as_ref()
    }

    pub fn serializer(&self) -> &dyn SnapshotSerializer {
        self.serializer.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

/// Whether a snapshot passes an optional exact, case-sensitive dimension filter
fn matches_dimension(snapshot: &DimensionSnapshot, filter: Option<&str>) -> bool {
    filter.is_none_or(|dimension| snapshot.dimension_id == dimension)
}

/// Read the optional `dimension` argument, or the rejection to send back
fn dimension_filter<'a>(message: &'a Message) -> Result<Option<&'a str>, Response> {
    message
        .optional_str("dimension")
        .map_err(|e| Response::invalid_payload(&message.request_id, e.to_string()))
}

/// Encode one snapshot, isolating failures to that snapshot
///
/// Errors and panics from the serializer are logged and reported as `None`,
/// as are empty encodings.
fn serialize_isolated(
    serializer: &dyn SnapshotSerializer,
    snapshot: &DimensionSnapshot,
) -> Option<Vec<u8>> {
    match panic::catch_unwind(AssertUnwindSafe(|| serializer.serialize(snapshot))) {
        Ok(Ok(bytes)) if bytes.is_empty() => {
            debug!("Snapshot for {} encoded to nothing", snapshot.dimension_id);
            None
        }
        Ok(Ok(bytes)) => Some(bytes),
        Ok(Err(e)) => {
            warn!("Skipping snapshot for {}: {}", snapshot.dimension_id, e);
            None
        }
        Err(_) => {
            warn!(
                "Serializer panicked on snapshot for {}, skipping it",
                snapshot.dimension_id
            );
            None
        }
    }
}
