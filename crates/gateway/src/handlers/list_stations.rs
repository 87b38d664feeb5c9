use beacon_core::DimensionSnapshot;

use super::{ActionHandler, HandlerContext, HandlerResult, dimension_filter, matches_dimension};
use crate::actions::Actions;
use crate::messages::{Message, Response, StationEntry, StationListPayload, UNKNOWN_DIMENSION};

/// `mtr:list_stations`
///
/// Stations of every dimension (or the one named by `dimension`) together
/// with the ids of platforms inside each station's area.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListStationsHandler;

impl ActionHandler for ListStationsHandler {
    fn action(&self) -> &str {
        Actions::LIST_STATIONS
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
        let mut matched = 0usize;
        let mut stations = Vec::new();
        for snapshot in snapshots
            .iter()
            .filter(|snapshot| matches_dimension(snapshot, requested))
        {
            matched += 1;
            stations.extend(station_entries(snapshot));
        }

        if requested.is_some() && matched == 0 {
            return Ok(Response::invalid_payload(
                &message.request_id,
                UNKNOWN_DIMENSION,
            ));
        }

        let payload = StationListPayload { stations };
        Ok(Response::ok(&message.request_id, serde_json::to_value(payload)?))
    }
}

fn station_entries(snapshot: &DimensionSnapshot) -> impl Iterator<Item = StationEntry> + '_ {
    let data = &snapshot.data;
    data.stations.iter().map(move |station| StationEntry {
        dimension: snapshot.dimension_id.clone(),
        station_id: station.id,
        name: station.name.clone(),
        color: station.color,
        zone: station.zone,
        platform_ids: data.platforms_in_station(station).map(|p| p.id).collect(),
    })
}
