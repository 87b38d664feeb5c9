use beacon_core::DimensionSnapshot;
use std::sync::Arc;

/// Immutable list of snapshots captured by one fetch, in gateway order
pub type SnapshotSet = Arc<Vec<DimensionSnapshot>>;

/// Port into the live railway data owned by the host simulation
///
/// Implementations must return an internally consistent view from
/// `fetch_snapshots`, even while the host keeps mutating its own state.
pub trait QueryGateway: Send + Sync {
    /// Whether the data source is initialized. Cheap and non-blocking.
    fn is_ready(&self) -> bool;

    /// Fetch every dimension's current snapshot.
    ///
    /// Callers must check `is_ready` first; the result is unspecified otherwise.
    fn fetch_snapshots(&self) -> SnapshotSet;
}
