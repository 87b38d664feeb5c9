use serde::{Deserialize, Serialize};

use super::RailwayData;
use crate::values::DimensionId;

/// Point-in-time view of one dimension's railway network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSnapshot {
    pub dimension_id: DimensionId,
    pub data: RailwayData,
}

impl DimensionSnapshot {
    pub fn new(dimension_id: impl Into<DimensionId>, data: RailwayData) -> Self {
        Self {
            dimension_id: dimension_id.into(),
            data,
        }
    }

    /// Snapshot of a dimension with no railway content
    pub fn empty(dimension_id: impl Into<DimensionId>) -> Self {
        Self::new(dimension_id, RailwayData::default())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Bounds, Station};

    #[test]
    fn test_snapshot_json_uses_camel_case() {
        let mut data = RailwayData::default();
        data.stations.push(Station::new(
            7,
            "Harbor",
            0x00ff00,
            Bounds::from_corners((0, 0), (1, 1)),
        ));
        let snapshot = DimensionSnapshot::new("minecraft:overworld", data);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["dimensionId"], "minecraft:overworld");
        assert_eq!(json["data"]["stations"][0]["bounds"]["minX"], 0);

        let back: DimensionSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let snapshot: DimensionSnapshot =
            serde_json::from_str(r#"{"dimensionId":"minecraft:the_end","data":{}}"#).unwrap();
        assert!(snapshot.is_empty());
    }
}
