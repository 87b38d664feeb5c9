use beacon_core::DimensionSnapshot;

use super::{ActionHandler, HandlerContext, HandlerResult, dimension_filter, matches_dimension};
use crate::actions::Actions;
use crate::messages::{DepotEntry, DepotListPayload, Message, Response, UNKNOWN_DIMENSION};

/// `mtr:list_depots`
#[derive(Debug, Default, Clone, Copy)]
pub struct ListDepotsHandler;

impl ActionHandler for ListDepotsHandler {
    fn action(&self) -> &str {
        Actions::LIST_DEPOTS
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
        let selected: Vec<&DimensionSnapshot> = snapshots
            .iter()
            .filter(|snapshot| matches_dimension(snapshot, requested))
            .collect();

        if requested.is_some() && selected.is_empty() {
            return Ok(Response::invalid_payload(
                &message.request_id,
                UNKNOWN_DIMENSION,
            ));
        }

        let depots = selected
            .into_iter()
            .flat_map(|snapshot| {
                snapshot.data.depots.iter().map(move |depot| DepotEntry {
                    dimension: snapshot.dimension_id.clone(),
                    depot_id: depot.id,
                    name: depot.name.clone(),
                    route_ids: depot.route_ids.clone(),
                })
            })
            .collect();

        let payload = DepotListPayload { depots };
        Ok(Response::ok(&message.request_id, serde_json::to_value(payload)?))
    }
}
