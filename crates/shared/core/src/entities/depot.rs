use serde::{Deserialize, Serialize};

use crate::values::RailwayId;

/// Where trains for a set of routes are stored and dispatched from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Depot {
    pub id: RailwayId,
    pub name: String,
    #[serde(default)]
    pub route_ids: Vec<RailwayId>,
}

impl Depot {
    pub fn new(id: RailwayId, name: impl Into<String>, route_ids: Vec<RailwayId>) -> Self {
        Self {
            id,
            name: name.into(),
            route_ids,
        }
    }
}
