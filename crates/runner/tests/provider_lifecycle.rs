//! Integration test: Config -> Bootstrap -> Provider handle
//!
//! Starts a provider from JSON, queries every action through the handle,
//! applies live world updates and shuts down cleanly.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use beacon_clock::ManualClock;
use beacon_core::{Depot, DimensionSnapshot, RailwayData, Route};
use beacon_gateway::{Actions, MessagePackSerializer, Requester, ResponseStatus, messages::SnapshotPayload};
use beacon_runner::{BeaconProvider, ProviderConfig};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

const CONFIG: &str = r#"{
    "gateway": { "max_concurrent_requests": 8 },
    "dimensions": [
        {
            "dimension": "minecraft:overworld",
            "data": {
                "stations": [
                    {
                        "id": 1,
                        "name": "Central",
                        "color": 16711680,
                        "zone": 1,
                        "bounds": { "minX": 0, "minZ": 0, "maxX": 20, "maxZ": 20 }
                    }
                ],
                "platforms": [
                    { "id": 11, "name": "1", "position": { "x": 5, "y": 64, "z": 5 }, "dwellTime": 200 },
                    { "id": 12, "name": "2", "position": { "x": 50, "y": 64, "z": 50 }, "dwellTime": 200 }
                ],
                "routes": [
                    { "id": 100, "name": "Red Line", "color": 16711680, "routeType": "normal", "platformIds": [11, 12] }
                ]
            }
        },
        { "dimension": "minecraft:the_nether" }
    ]
}"#;

const NOW: i64 = 1_720_000_000_000;

async fn start() -> beacon_runner::ProviderHandle {
    let _ = env_logger::try_init();
    let config = ProviderConfig::from_json(CONFIG).unwrap();
    BeaconProvider::new(config)
        .with_clock(Arc::new(ManualClock::at_millis(NOW)))
        .start()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_snapshot_from_seeded_config() {
    let handle = start().await;

    let response = handle
        .request(Actions::GET_RAILWAY_SNAPSHOT, None)
        .await
        .unwrap();
    assert_eq!(response.status, ResponseStatus::Ok);

    let payload: SnapshotPayload = serde_json::from_value(response.payload).unwrap();
    assert_eq!(payload.format, "messagepack");
    assert_eq!(payload.snapshots.len(), 1);

    let entry = &payload.snapshots[0];
    assert_eq!(entry.dimension, "minecraft:overworld");
    assert_eq!(entry.timestamp, NOW);

    let decoded = MessagePackSerializer::decode(&BASE64.decode(&entry.payload).unwrap()).unwrap();
    assert_eq!(decoded.stations[0].name, "Central");
    assert_eq!(decoded.routes[0].platform_ids, vec![11, 12]);

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let handle = start().await;

    let mut ids = HashSet::new();
    for _ in 0..20 {
        let response = handle.request(Actions::PING, None).await.unwrap();
        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.payload["receivedAt"], NOW);
        assert!(ids.insert(response.request_id));
    }

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_queries_follow_world_updates() {
    let handle = start().await;

    let response = handle
        .request(
            Actions::LIST_STATIONS,
            Some(json!({"dimension": "minecraft:overworld"})),
        )
        .await
        .unwrap();
    assert_eq!(response.status, ResponseStatus::Ok);
    // Platform 12 sits outside the station bounds
    assert_eq!(response.payload["stations"][0]["platformIds"], json!([11]));

    handle.world().publish_dimension(DimensionSnapshot::new(
        "minecraft:the_nether",
        RailwayData {
            routes: vec![Route::new(200, "Nether Express", 0xaa0000)],
            depots: vec![Depot::new(300, "Nether Yard", vec![200])],
            ..Default::default()
        },
    ));

    let response = handle
        .request(
            Actions::LIST_NETWORK_OVERVIEW,
            Some(json!({"dimension": "minecraft:the_nether"})),
        )
        .await
        .unwrap();
    assert_eq!(response.status, ResponseStatus::Ok);
    let nether = &response.payload["dimensions"][0];
    assert_eq!(nether["routes"][0]["name"], "Nether Express");
    assert_eq!(nether["depots"][0]["routeIds"], json!([200]));

    assert!(handle.world().remove_dimension("minecraft:the_nether"));
    let response = handle
        .request(
            Actions::GET_RAILWAY_SNAPSHOT,
            Some(json!({"dimension": "minecraft:the_nether"})),
        )
        .await
        .unwrap();
    assert_eq!(response.status, ResponseStatus::InvalidPayload);
    assert_eq!(response.reason(), Some("unknown dimension"));

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_after_cloned_requesters_drop() {
    let handle = start().await;

    let requester = handle.requester();
    let caller = tokio::spawn(async move {
        requester
            .request(beacon_gateway::Message::without_payload("clone-1", Actions::PING))
            .await
    });

    let response = caller.await.unwrap().unwrap();
    assert_eq!(response.request_id, "clone-1");

    handle.shutdown().await.unwrap();
}
