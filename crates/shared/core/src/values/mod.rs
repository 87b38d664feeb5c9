use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Dimension identifier, e.g. `minecraft:overworld`
pub type DimensionId = String;

/// Identifier of a railway entity (station, platform, route, depot)
/// Unique within one dimension only
pub type RailwayId = i64;

/// Packed RGB color as used by the host simulation
pub type Color = u32;
