//! MessagePack snapshot encoding
//!
//! Snapshots are written as MessagePack maps with named fields, so consumers
//! can decode them without a schema shipped alongside.

use beacon_core::{DimensionSnapshot, RailwayData};
use beacon_ports::{SerializeError, SerializeResult, SnapshotSerializer};

/// Format identifier attached to every encoded snapshot
pub const MESSAGEPACK_FORMAT: &str = "messagepack";

/// Encodes a dimension's railway graph as MessagePack
#[derive(Debug, Default, Clone, Copy)]
pub struct MessagePackSerializer;

impl MessagePackSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Decode bytes produced by [`SnapshotSerializer::serialize`]
    pub fn decode(bytes: &[u8]) -> SerializeResult<RailwayData> {
        rmp_serde::from_slice(bytes).map_err(|e| SerializeError::Encode(e.to_string()))
    }
}

impl SnapshotSerializer for MessagePackSerializer {
    fn format(&self) -> &'static str {
        MESSAGEPACK_FORMAT
    }

    fn serialize(&self, snapshot: &DimensionSnapshot) -> SerializeResult<Vec<u8>> {
        if snapshot.is_empty() {
            return Ok(Vec::new());
        }
        rmp_serde::to_vec_named(&snapshot.data).map_err(|e| SerializeError::Encode(e.to_string()))
    }
}
