use arc_swap::ArcSwap;
use beacon_core::{DimensionSnapshot, RailwayData};
use beacon_ports::{QueryGateway, SnapshotSet};
use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::{Result, SimulationError};

/// Live railway state of every dimension
///
/// Writers publish a fresh immutable snapshot list on every change; readers
/// get whichever list was current when they fetched and never observe a
/// half-applied update.
pub struct RailwayWorld {
    /// Whether the railway data finished loading
    ready: AtomicBool,
    /// Current snapshot list, in dimension registration order
    snapshots: ArcSwap<Vec<DimensionSnapshot>>,
    /// Bumped on every published change
    generation: AtomicU64,
}

impl RailwayWorld {
    /// Create an empty world that is not ready yet
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
            snapshots: ArcSwap::from_pointee(Vec::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Create a world from an initial set of snapshots (not ready yet)
    pub fn with_snapshots(snapshots: Vec<DimensionSnapshot>) -> Result<Self> {
        let world = Self::new();
        world.replace_all(snapshots)?;
        Ok(world)
    }

    /// Signal that the railway data is loaded
    pub fn mark_ready(&self) {
        if !self.ready.swap(true, Ordering::AcqRel) {
            info!(
                "Railway world ready with {} dimensions",
                self.snapshots.load().len()
            );
        }
    }

    /// Signal that the railway data is unavailable (e.g. while reloading)
    pub fn mark_not_ready(&self) {
        self.ready.store(false, Ordering::Release);
    }

    /// Number of changes published so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Ids of the known dimensions, in order
    pub fn dimension_ids(&self) -> Vec<String> {
        self.snapshots
            .load()
            .iter()
            .map(|s| s.dimension_id.clone())
            .collect()
    }

    /// Insert or replace one dimension
    ///
    /// A replaced dimension keeps its position; a new one is appended.
    pub fn publish_dimension(&self, snapshot: DimensionSnapshot) {
        let dimension = snapshot.dimension_id.clone();
        self.snapshots.rcu(|current| {
            let mut next = Vec::clone(current);
            match next
                .iter_mut()
                .find(|s| s.dimension_id == snapshot.dimension_id)
            {
                Some(existing) => *existing = snapshot.clone(),
                None => next.push(snapshot.clone()),
            }
            next
        });
        self.bump(&dimension);
    }

    /// Replace the railway data of an existing dimension
    pub fn update_dimension(&self, dimension: &str, data: RailwayData) -> Result<()> {
        if !self
            .snapshots
            .load()
            .iter()
            .any(|s| s.dimension_id == dimension)
        {
            return Err(SimulationError::DimensionNotFound(dimension.to_string()));
        }
        self.publish_dimension(DimensionSnapshot::new(dimension, data));
        Ok(())
    }

    /// Remove a dimension. Returns whether it existed.
    pub fn remove_dimension(&self, dimension: &str) -> bool {
        let previous = self.snapshots.rcu(|current| {
            current
                .iter()
                .filter(|s| s.dimension_id != dimension)
                .cloned()
                .collect::<Vec<_>>()
        });
        let removed = previous.iter().any(|s| s.dimension_id == dimension);
        if removed {
            self.bump(dimension);
        }
        removed
    }

    /// Swap in a complete new set of dimensions at once
    pub fn replace_all(&self, snapshots: Vec<DimensionSnapshot>) -> Result<()> {
        let mut seen = HashSet::new();
        for snapshot in &snapshots {
            if !seen.insert(snapshot.dimension_id.as_str()) {
                return Err(SimulationError::DuplicateDimension(
                    snapshot.dimension_id.clone(),
                ));
            }
        }

        let count = snapshots.len();
        self.snapshots.store(Arc::new(snapshots));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!("Published {} dimensions (generation {})", count, generation);
        Ok(())
    }

    fn bump(&self, dimension: &str) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!("Published {} (generation {})", dimension, generation);
    }
}

impl Default for RailwayWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryGateway for RailwayWorld {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn fetch_snapshots(&self) -> SnapshotSet {
        self.snapshots.load_full()
    }
}
