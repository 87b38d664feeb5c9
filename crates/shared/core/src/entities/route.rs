use serde::{Deserialize, Serialize};

use crate::values::{Color, RailwayId};

/// Service category of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    #[default]
    Normal,
    LightRail,
    HighSpeed,
}

impl RouteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::LightRail => "light_rail",
            Self::HighSpeed => "high_speed",
        }
    }
}

/// An ordered sequence of platforms served by trains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: RailwayId,
    pub name: String,
    pub color: Color,
    #[serde(default)]
    pub route_type: RouteType,
    /// Platforms in service order
    #[serde(default)]
    pub platform_ids: Vec<RailwayId>,
}

impl Route {
    pub fn new(id: RailwayId, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            route_type: RouteType::Normal,
            platform_ids: Vec::new(),
        }
    }

    pub fn with_type(mut self, route_type: RouteType) -> Self {
        self.route_type = route_type;
        self
    }

    pub fn with_platforms(mut self, platform_ids: Vec<RailwayId>) -> Self {
        self.platform_ids = platform_ids;
        self
    }
}
