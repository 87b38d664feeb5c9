use beacon_core::DimensionSnapshot;

use crate::error::SerializeResult;

/// Port for snapshot encoders
///
/// Encoding is deterministic and side-effect free. An empty byte vector means
/// the snapshot had nothing to report and is not an error.
pub trait SnapshotSerializer: Send + Sync {
    /// Fixed identifier of the binary format, e.g. `messagepack`
    fn format(&self) -> &'static str;

    /// Encode a single dimension's snapshot
    fn serialize(&self, snapshot: &DimensionSnapshot) -> SerializeResult<Vec<u8>>;
}
