use serde::{Deserialize, Serialize};

/// Block position in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Horizontal area covered by a station (inclusive on both corners)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

impl Bounds {
    /// Create bounds from two arbitrary corners
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Self {
        Self {
            min_x: a.0.min(b.0),
            min_z: a.1.min(b.1),
            max_x: a.0.max(b.0),
            max_z: a.1.max(b.1),
        }
    }

    /// Whether the position lies inside the area, ignoring height
    pub fn contains(&self, pos: BlockPos) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x) && (self.min_z..=self.max_z).contains(&pos.z)
    }
}
