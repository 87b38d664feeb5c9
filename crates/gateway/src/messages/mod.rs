//! Wire message types for gateway communication
//!
//! Requests and responses are structured JSON documents; railway snapshots
//! travel inside them as base64 text over MessagePack bytes.

pub mod payloads;
pub mod request;
pub mod response;

pub use payloads::{
    DepotEntry, DepotListPayload, DepotSummary, DimensionOverview, NetworkOverviewPayload,
    PingPayload, RouteDetailPayload, RouteStop, RouteSummary, SerializedSnapshotEntry,
    SnapshotPayload, StationEntry, StationListPayload,
};
pub use request::Message;
pub use response::{NOT_READY_REASON, Response, ResponseStatus, UNKNOWN_DIMENSION, UNKNOWN_ROUTE};
