//! Success payload documents for each action

use beacon_core::{BlockPos, Color, DimensionId, RailwayId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One encoded dimension inside a snapshot response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedSnapshotEntry {
    pub dimension: DimensionId,
    /// Binary format of the decoded payload
    pub format: String,
    /// Capture time in milliseconds, shared by every entry of one response
    pub timestamp: i64,
    /// Number of encoded bytes (before base64)
    pub length: usize,
    /// Base64 of the encoded bytes
    pub payload: String,
}

/// `mtr:get_railway_snapshot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPayload {
    pub format: String,
    pub snapshots: Vec<SerializedSnapshotEntry>,
}

/// `beacon:ping`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingPayload {
    pub echo: Value,
    pub received_at: i64,
}

/// Route line in the network overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub route_id: RailwayId,
    pub name: String,
    pub color: Color,
    pub route_type: String,
    pub platform_count: usize,
}

/// Depot line in the network overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepotSummary {
    pub depot_id: RailwayId,
    pub name: String,
    pub route_ids: Vec<RailwayId>,
}

/// Summary of one dimension's network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionOverview {
    pub dimension: DimensionId,
    pub station_count: usize,
    pub platform_count: usize,
    pub routes: Vec<RouteSummary>,
    pub depots: Vec<DepotSummary>,
}

/// `mtr:list_network_overview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkOverviewPayload {
    pub dimensions: Vec<DimensionOverview>,
}

/// Station line in `mtr:list_stations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationEntry {
    pub dimension: DimensionId,
    pub station_id: RailwayId,
    pub name: String,
    pub color: Color,
    pub zone: i32,
    pub platform_ids: Vec<RailwayId>,
}

/// `mtr:list_stations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationListPayload {
    pub stations: Vec<StationEntry>,
}

/// Depot line in `mtr:list_depots`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepotEntry {
    pub dimension: DimensionId,
    pub depot_id: RailwayId,
    pub name: String,
    pub route_ids: Vec<RailwayId>,
}

/// `mtr:list_depots`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepotListPayload {
    pub depots: Vec<DepotEntry>,
}

/// Platform stop on a route, with the station it belongs to if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub platform_id: RailwayId,
    pub name: String,
    pub position: BlockPos,
    pub dwell_time: u32,
    pub station_id: Option<RailwayId>,
    pub station_name: Option<String>,
}

/// `mtr:get_route_detail`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDetailPayload {
    pub dimension: DimensionId,
    pub route_id: RailwayId,
    pub name: String,
    pub color: Color,
    pub route_type: String,
    pub stops: Vec<RouteStop>,
    /// Route platform ids with no matching platform in the dimension
    pub missing_platform_ids: Vec<RailwayId>,
}
