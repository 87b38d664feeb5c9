//! Fakes shared by handler and registry tests

use beacon_clock::ManualClock;
use beacon_core::DimensionSnapshot;
use beacon_ports::{QueryGateway, SerializeError, SerializeResult, SnapshotSerializer, SnapshotSet};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::HandlerContext;
use crate::serializer::MESSAGEPACK_FORMAT;

pub const NOW_MILLIS: i64 = 1_700_000_000_000;

/// Gateway over a fixed snapshot list that counts fetches
pub struct FakeGateway {
    ready: AtomicBool,
    snapshots: SnapshotSet,
    fetches: AtomicUsize,
}

impl FakeGateway {
    pub fn with_snapshots(ready: bool, snapshots: Vec<DimensionSnapshot>) -> Arc<Self> {
        Arc::new(Self {
            ready: AtomicBool::new(ready),
            snapshots: Arc::new(snapshots),
            fetches: AtomicUsize::new(0),
        })
    }

    pub fn ready(dimensions: &[&str]) -> Arc<Self> {
        Self::with_snapshots(true, empty_snapshots(dimensions))
    }

    pub fn not_ready(dimensions: &[&str]) -> Arc<Self> {
        Self::with_snapshots(false, empty_snapshots(dimensions))
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

fn empty_snapshots(dimensions: &[&str]) -> Vec<DimensionSnapshot> {
    dimensions
        .iter()
        .map(|d| DimensionSnapshot::empty(*d))
        .collect()
}

impl QueryGateway for FakeGateway {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn fetch_snapshots(&self) -> SnapshotSet {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.snapshots.clone()
    }
}

/// Serializer producing a fixed number of bytes per dimension (0 when unlisted)
pub struct SizedSerializer {
    sizes: HashMap<String, usize>,
    failing: Option<String>,
}

impl SizedSerializer {
    pub fn new(sizes: &[(&str, usize)]) -> Self {
        Self {
            sizes: sizes.iter().map(|(d, n)| (d.to_string(), *n)).collect(),
            failing: None,
        }
    }

    pub fn failing_on(mut self, dimension: &str) -> Self {
        self.failing = Some(dimension.to_string());
        self
    }
}

impl SnapshotSerializer for SizedSerializer {
    fn format(&self) -> &'static str {
        MESSAGEPACK_FORMAT
    }

    fn serialize(&self, snapshot: &DimensionSnapshot) -> SerializeResult<Vec<u8>> {
        if self.failing.as_deref() == Some(snapshot.dimension_id.as_str()) {
            return Err(SerializeError::Unrepresentable {
                dimension: snapshot.dimension_id.clone(),
                reason: "corrupt graph".into(),
            });
        }
        let size = self.sizes.get(&snapshot.dimension_id).copied().unwrap_or(0);
        Ok(vec![0xab; size])
    }
}

/// Serializer that panics on one dimension
pub struct PanickingSerializer {
    dimension: String,
    size: usize,
}

impl PanickingSerializer {
    pub fn on(dimension: &str, size: usize) -> Self {
        Self {
            dimension: dimension.to_string(),
            size,
        }
    }
}

impl SnapshotSerializer for PanickingSerializer {
    fn format(&self) -> &'static str {
        MESSAGEPACK_FORMAT
    }

    fn serialize(&self, snapshot: &DimensionSnapshot) -> SerializeResult<Vec<u8>> {
        if snapshot.dimension_id == self.dimension {
            panic!("graph for {} is corrupt", self.dimension);
        }
        Ok(vec![0xcd; self.size])
    }
}

pub fn context(gateway: Arc<FakeGateway>, serializer: SizedSerializer) -> HandlerContext {
    context_with_serializer(gateway, serializer)
}

pub fn context_with_serializer(
    gateway: Arc<FakeGateway>,
    serializer: impl SnapshotSerializer + 'static,
) -> HandlerContext {
    HandlerContext::new(
        gateway,
        Arc::new(serializer),
        Arc::new(ManualClock::at_millis(NOW_MILLIS)),
    )
}
