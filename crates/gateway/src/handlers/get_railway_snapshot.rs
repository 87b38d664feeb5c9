use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::debug;

use super::{
    ActionHandler, HandlerContext, HandlerResult, dimension_filter, matches_dimension,
    serialize_isolated,
};
use crate::actions::Actions;
use crate::messages::{Message, Response, SerializedSnapshotEntry, SnapshotPayload, UNKNOWN_DIMENSION};

/// `mtr:get_railway_snapshot`
///
/// Returns the encoded railway graph of every dimension, or of the single
/// dimension named by the optional `dimension` argument. Dimensions that
/// encode to nothing are left out. A filter that leaves no entries is answered
/// with `unknown dimension`, whether the dimension is missing or merely empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetRailwaySnapshotHandler;

impl ActionHandler for GetRailwaySnapshotHandler {
    fn action(&self) -> &str {
        Actions::GET_RAILWAY_SNAPSHOT
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
        let serializer = ctx.serializer();
        let format = serializer.format();
        let timestamp = ctx.clock().now_millis();

        let entries: Vec<SerializedSnapshotEntry> = snapshots
            .iter()
            .filter(|snapshot| matches_dimension(snapshot, requested))
            .filter_map(|snapshot| {
                let bytes = serialize_isolated(serializer, snapshot)?;
                Some(SerializedSnapshotEntry {
                    dimension: snapshot.dimension_id.clone(),
                    format: format.to_string(),
                    timestamp,
                    length: bytes.len(),
                    payload: BASE64.encode(&bytes),
                })
            })
            .collect();

        if requested.is_some() && entries.is_empty() {
            return Ok(Response::invalid_payload(
                &message.request_id,
                UNKNOWN_DIMENSION,
            ));
        }

        debug!(
            "Serialized {} of {} snapshots for {}",
            entries.len(),
            snapshots.len(),
            message.request_id
        );

        let payload = SnapshotPayload {
            format: format.to_string(),
            snapshots: entries,
        };
        Ok(Response::ok(&message.request_id, serde_json::to_value(payload)?))
    }
}
