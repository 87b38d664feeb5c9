use beacon_core::DimensionSnapshot;

use super::{ActionHandler, HandlerContext, HandlerResult, dimension_filter, matches_dimension};
use crate::actions::Actions;
use crate::messages::{
    DepotSummary, DimensionOverview, Message, NetworkOverviewPayload, Response, RouteSummary,
    UNKNOWN_DIMENSION,
};

/// `mtr:list_network_overview`
///
/// Route and depot summary for every dimension (or the one named by
/// `dimension`). Unlike snapshots, dimensions without railway content are
/// still listed, with empty collections.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListNetworkOverviewHandler;

impl ActionHandler for ListNetworkOverviewHandler {
    fn action(&self) -> &str {
        Actions::LIST_NETWORK_OVERVIEW
    }

    fn handle(&self, message: &Message, ctx: &HandlerContext) -> HandlerResult {
        let gateway = ctx.gateway();
        if !gateway.is_ready() {
            return Ok(Response::not_ready(&message.request_id));
        }

        let requested = match dimension_filter(message) {
            Ok(dimension) => dimension,
            Err(rejection) => return Ok(rejection),
        };

        let snapshots = gateway.fetch_snapshots();
        let dimensions: Vec<DimensionOverview> = snapshots
            .iter()
            .filter(|snapshot| matches_dimension(snapshot, requested))
            .map(summarize)
            .collect();

        if requested.is_some() && dimensions.is_empty() {
            return Ok(Response::invalid_payload(
                &message.request_id,
                UNKNOWN_DIMENSION,
            ));
        }

        let payload = NetworkOverviewPayload { dimensions };
        Ok(Response::ok(&message.request_id, serde_json::to_value(payload)?))
    }
}

fn summarize(snapshot: &DimensionSnapshot) -> DimensionOverview {
    let data = &snapshot.data;
    DimensionOverview {
        dimension: snapshot.dimension_id.clone(),
        station_count: data.stations.len(),
        platform_count: data.platforms.len(),
        routes: data
            .routes
            .iter()
            .map(|route| RouteSummary {
                route_id: route.id,
                name: route.name.clone(),
                color: route.color,
                route_type: route.route_type.as_str().to_string(),
                platform_count: route.platform_ids.len(),
            })
            .collect(),
        depots: data
            .depots
            .iter()
            .map(|depot| DepotSummary {
                depot_id: depot.id,
                name: depot.name.clone(),
                route_ids: depot.route_ids.clone(),
            })
            .collect(),
    }
}
