//! Beacon Runner - provider bootstrap
//!
//! Wires the pieces of a running provider together:
//!
//! - **Config**: JSON settings for the gateway plus the railway data to seed
//! - **Bootstrap**: builds the railway world, the action registry and the server
//! - **Handle**: issues requests against the running provider and shuts it down
//!
//! ## Architecture
//!
//! ```text
//!   ProviderConfig (JSON)
//!          │
//!          ▼
//!   ┌──────────────┐  seeds   ┌───────────────┐
//!   │BeaconProvider│─────────►│ RailwayWorld  │
//!   └──────┬───────┘          └───────▲───────┘
//!          │ spawns                   │ QueryGateway
//!   ┌──────▼───────┐          ┌───────┴───────┐
//!   │GatewayServer │─────────►│   Handlers    │
//!   └──────▲───────┘          └───────────────┘
//!          │ Message / Response
//!   ┌──────┴───────┐
//!   │ProviderHandle│
//!   └──────────────┘
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handle;

pub use bootstrap::BeaconProvider;
pub use config::{DimensionSeed, ProviderConfig};
pub use error::BootstrapError;
pub use handle::ProviderHandle;
