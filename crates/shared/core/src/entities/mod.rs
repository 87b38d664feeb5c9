mod depot;
mod geometry;
mod platform;
mod railway;
mod route;
mod snapshot;
mod station;

pub use depot::Depot;
pub use geometry::{BlockPos, Bounds};
pub use platform::Platform;
pub use railway::RailwayData;
pub use route::{Route, RouteType};
pub use snapshot::DimensionSnapshot;
pub use station::Station;
