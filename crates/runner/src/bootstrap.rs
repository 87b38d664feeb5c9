//! Bootstrap - railway world seeding and gateway wiring
//!
//! Startup order:
//! 1. Seed the railway world from the configured dimensions
//! 2. Register the action handlers
//! 3. Spawn the gateway server on a fresh channel pair
//! 4. Mark the world ready (when configured to)

use beacon_clock::SystemClock;
use beacon_gateway::{
    ActionRegistry, ChannelRequester, GatewayServer, HandlerContext, MessagePackSerializer,
};
use beacon_ports::{Clock, SnapshotSerializer};
use railway_sim::RailwayWorld;
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::BootstrapError;
use crate::handle::ProviderHandle;

/// Builds and starts a provider
pub struct BeaconProvider {
    config: ProviderConfig,
    clock: Arc<dyn Clock>,
    serializer: Arc<dyn SnapshotSerializer>,
}

impl BeaconProvider {
    /// Provider on wall-clock time with MessagePack snapshots
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock::new()),
            serializer: Arc::new(MessagePackSerializer::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_serializer(mut self, serializer: Arc<dyn SnapshotSerializer>) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Start serving requests
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start(self) -> Result<ProviderHandle, BootstrapError> {
        let world = Arc::new(RailwayWorld::with_snapshots(self.config.snapshots())?);
        log::info!(
            "Seeded railway world with {} dimensions",
            self.config.dimensions.len()
        );

        let registry = ActionRegistry::with_default_handlers(&self.config.gateway)?;
        log::info!("Registered actions: {}", registry.actions().join(", "));

        let context = HandlerContext::new(world.clone(), self.serializer, self.clock.clone());
        let server = GatewayServer::new(registry, context, &self.config.gateway);

        let (requester, responder) = ChannelRequester::pair(self.config.gateway.channel_capacity);
        let task = tokio::spawn(async move { server.serve(responder).await });

        if self.config.mark_ready {
            world.mark_ready();
        }

        log::info!("Provider started (clock: {})", self.clock.name());

        Ok(ProviderHandle::new(requester, world, task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DimensionSeed;
    use beacon_core::RailwayData;
    use beacon_gateway::{Actions, ResponseStatus};
    use beacon_ports::QueryGateway;
    use railway_sim::SimulationError;

    #[tokio::test]
    async fn test_start_marks_world_ready() {
        let config = ProviderConfig {
            dimensions: vec![DimensionSeed::new("minecraft:overworld", RailwayData::default())],
            ..Default::default()
        };

        let handle = BeaconProvider::new(config).start().await.unwrap();
        assert!(handle.world().is_ready());
        assert_eq!(handle.world().dimension_ids(), vec!["minecraft:overworld"]);

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_start_without_ready_flag() {
        let config = ProviderConfig {
            mark_ready: false,
            ..Default::default()
        };

        let handle = BeaconProvider::new(config).start().await.unwrap();
        assert!(!handle.world().is_ready());

        let response = handle
            .request(Actions::GET_RAILWAY_SNAPSHOT, None)
            .await
            .unwrap();
        assert_eq!(response.status, ResponseStatus::NotReady);

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_seed_fails_startup() {
        let config = ProviderConfig {
            dimensions: vec![
                DimensionSeed::new("minecraft:overworld", RailwayData::default()),
                DimensionSeed::new("minecraft:overworld", RailwayData::default()),
            ],
            ..Default::default()
        };

        let err = match BeaconProvider::new(config).start().await {
            Err(e) => e,
            Ok(_) => panic!("startup should reject duplicate dimensions"),
        };
        assert!(matches!(
            err,
            BootstrapError::Simulation(SimulationError::DuplicateDimension(ref id))
                if id == "minecraft:overworld"
        ));
    }
}
