use serde::{Deserialize, Serialize};

use super::geometry::{BlockPos, Bounds};
use crate::values::{Color, RailwayId};

/// A named station area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: RailwayId,
    pub name: String,
    pub color: Color,
    /// Fare zone
    #[serde(default)]
    pub zone: i32,
    pub bounds: Bounds,
}

impl Station {
    pub fn new(id: RailwayId, name: impl Into<String>, color: Color, bounds: Bounds) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            zone: 0,
            bounds,
        }
    }

    /// Set the fare zone
    pub fn with_zone(mut self, zone: i32) -> Self {
        self.zone = zone;
        self
    }

    /// Whether a position falls within this station's area
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.bounds.contains(pos)
    }
}
