use serde::{Deserialize, Serialize};

use super::{BlockPos, Depot, Platform, Route, Station};
use crate::values::RailwayId;

/// Railway graph of a single dimension
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RailwayData {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub depots: Vec<Depot>,
}

impl RailwayData {
    /// True when there is nothing to report for this dimension
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
            && self.platforms.is_empty()
            && self.routes.is_empty()
            && self.depots.is_empty()
    }

    /// Look up a platform by id
    pub fn platform(&self, id: RailwayId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Look up a route by id
    pub fn route(&self, id: RailwayId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// First station whose area contains the position
    pub fn station_at(&self, pos: BlockPos) -> Option<&Station> {
        self.stations.iter().find(|s| s.contains(pos))
    }

    /// Platforms located inside the station's area, in platform order
    pub fn platforms_in_station<'a>(
        &'a self,
        station: &'a Station,
    ) -> impl Iterator<Item = &'a Platform> + 'a {
        self.platforms
            .iter()
            .filter(move |p| station.contains(p.position))
    }
}
