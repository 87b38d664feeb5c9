use beacon_gateway::{ConfigError, GatewayError};
use railway_sim::SimulationError;
use thiserror::Error;

/// Provider startup and shutdown errors
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Server task failed: {0}")]
    Server(String),
}
