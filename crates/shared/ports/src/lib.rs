//! Beacon Ports
//!
//! Port definitions (traits) for the Beacon provider.
//! These define the boundaries between the dispatch layer and the host
//! simulation that owns the railway data.

mod clock;
mod error;
mod query;
mod serializer;

pub use clock::Clock;
pub use error::{SerializeError, SerializeResult};
pub use query::{QueryGateway, SnapshotSet};
pub use serializer::SnapshotSerializer;
