//! Beacon Core Domain
//!
//! Pure railway domain types exposed by the Beacon provider.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    BlockPos, Bounds, DimensionSnapshot, Depot, Platform, RailwayData, Route, RouteType, Station,
};
pub use values::{Color, DimensionId, RailwayId, Timestamp};
