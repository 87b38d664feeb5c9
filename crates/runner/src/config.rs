//! Provider configuration
//!
//! ```json
//! {
//!   "gateway": { "max_concurrent_requests": 16 },
//!   "dimensions": [
//!     { "dimension": "minecraft:overworld", "data": { "stations": [] } }
//!   ],
//!   "mark_ready": true
//! }
//! ```

use beacon_core::{DimensionId, DimensionSnapshot, RailwayData};
use beacon_gateway::{ConfigError, GatewayConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration for a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Gateway settings
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Railway data loaded into the world at startup, in order
    #[serde(default)]
    pub dimensions: Vec<DimensionSeed>,

    /// Mark the world ready once seeded
    #[serde(default = "default_mark_ready")]
    pub mark_ready: bool,
}

fn default_mark_ready() -> bool {
    true
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            dimensions: Vec::new(),
            mark_ready: default_mark_ready(),
        }
    }
}

/// Railway data of one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSeed {
    pub dimension: DimensionId,
    #[serde(default)]
    pub data: RailwayData,
}

impl DimensionSeed {
    pub fn new(dimension: impl Into<DimensionId>, data: RailwayData) -> Self {
        Self {
            dimension: dimension.into(),
            data,
        }
    }
}

impl From<DimensionSeed> for DimensionSnapshot {
    fn from(seed: DimensionSeed) -> Self {
        DimensionSnapshot::new(seed.dimension, seed.data)
    }
}

impl ProviderConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.gateway.validate()?;
        Ok(config)
    }

    /// Seeds as snapshots, in configuration order
    pub fn snapshots(&self) -> Vec<DimensionSnapshot> {
        self.dimensions.iter().cloned().map(Into::into).collect()
    }
}
