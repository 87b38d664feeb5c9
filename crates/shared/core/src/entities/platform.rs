use serde::{Deserialize, Serialize};

use super::geometry::BlockPos;
use crate::values::RailwayId;

/// A stopping point on a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: RailwayId,
    pub name: String,
    /// Midpoint of the platform rail segment
    pub position: BlockPos,
    /// Dwell time in ticks
    #[serde(default)]
    pub dwell_time: u32,
}

impl Platform {
    pub fn new(id: RailwayId, name: impl Into<String>, position: BlockPos) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            dwell_time: 0,
        }
    }
}
