//! Railway Sim
//!
//! In-memory stand-in for the host simulation that owns the railway data.
//! The world is mutated by its owner and read by the gateway through the
//! [`QueryGateway`](beacon_ports::QueryGateway) port.

pub mod error;
pub mod world;

pub use error::{Result, SimulationError};
pub use world::RailwayWorld;
