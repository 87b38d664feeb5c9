use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Duplicate dimension: {0}")]
    DuplicateDimension(String),

    #[error("Dimension not found: {0}")]
    DimensionNotFound(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
