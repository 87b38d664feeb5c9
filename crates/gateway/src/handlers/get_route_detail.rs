use beacon_core::{DimensionSnapshot, Route};
use log::debug;

use super::{ActionHandler, HandlerContext, HandlerResult, dimension_filter, matches_dimension};
use crate::actions::Actions;
use crate::messages::{
    Message, Response, RouteDetailPayload, RouteStop, UNKNOWN_DIMENSION, UNKNOWN_ROUTE,
};

/// `mtr:get_route_detail`
///
/// Looks up `routeId` in the dimension named by `dimension`, or in every
/// dimension in gateway order when no filter is given. Stops follow the
/// route's platform order; ids without a platform are reported separately.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetRouteDetailHandler;

impl ActionHandler for GetRouteDetailHandler {
    fn action(&self) -> &str {
        Actions::GET_ROUTE_DETAIL
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
        let route_id = match message.required_id("routeId") {
            Ok(id) => id,
            Err(e) => return Ok(Response::invalid_payload(&message.request_id, e.to_string())),
        };

        let snapshots = gateway.fetch_snapshots();
        let mut selected = snapshots
            .iter()
            .filter(|snapshot| matches_dimension(snapshot, requested))
            .peekable();

        if requested.is_some() && selected.peek().is_none() {
            return Ok(Response::invalid_payload(
                &message.request_id,
                UNKNOWN_DIMENSION,
            ));
        }

        let found = selected.find_map(|snapshot| {
            snapshot
                .data
                .route(route_id)
                .map(|route| (snapshot, route))
        });
        let Some((snapshot, route)) = found else {
            debug!("Route {} not found for {}", route_id, message.request_id);
            return Ok(Response::invalid_payload(&message.request_id, UNKNOWN_ROUTE));
        };

        let payload = describe(snapshot, route);
        Ok(Response::ok(&message.request_id, serde_json::to_value(payload)?))
    }
}

fn describe(snapshot: &DimensionSnapshot, route: &Route) -> RouteDetailPayload {
    let data = &snapshot.data;
    let mut stops = Vec::with_capacity(route.platform_ids.len());
    let mut missing_platform_ids = Vec::new();

    for &platform_id in &route.platform_ids {
        let Some(platform) = data.platform(platform_id) else {
            missing_platform_ids.push(platform_id);
            continue;
        };
        let station = data.station_at(platform.position);
        stops.push(RouteStop {
            platform_id,
            name: platform.name.clone(),
            position: platform.position,
            dwell_time: platform.dwell_time,
            station_id: station.map(|s| s.id),
            station_name: station.map(|s| s.name.clone()),
        });
    }

    RouteDetailPayload {
        dimension: snapshot.dimension_id.clone(),
        route_id: route.id,
        name: route.name.clone(),
        color: route.color,
        route_type: route.route_type.as_str().to_string(),
        stops,
        missing_platform_ids,
    }
}
