//! Action names understood by the gateway

/// Action names for request routing
///
/// The `beacon:` namespace covers provider-level actions, the `mtr:` namespace
/// covers railway queries against the host simulation.
pub struct Actions;

impl Actions {
    // Provider

    /// Liveness check, answered without touching railway data
    pub const PING: &'static str = "beacon:ping";

    // Railway queries

    /// MessagePack-encoded snapshots per dimension
    pub const GET_RAILWAY_SNAPSHOT: &'static str = "mtr:get_railway_snapshot";

    /// Route and depot summary per dimension
    pub const LIST_NETWORK_OVERVIEW: &'static str = "mtr:list_network_overview";

    /// Stations with the platforms inside them
    pub const LIST_STATIONS: &'static str = "mtr:list_stations";

    /// Depots with the routes they serve
    pub const LIST_DEPOTS: &'static str = "mtr:list_depots";

    /// One route with its platforms in service order
    pub const GET_ROUTE_DETAIL: &'static str = "mtr:get_route_detail";
}
