use rpc_status::*;
use std::time::{Duration, SystemTime};

#[test]
fn test_classifier_tiers() {
    assert_eq!(speed_for_response_time(None).tier, RpcSpeedTier::Unavailable);
    assert_eq!(speed_for_response_time(Some(0)).tier, RpcSpeedTier::Fast);
    assert_eq!(speed_for_response_time(Some(800)).tier, RpcSpeedTier::Fast);
    assert_eq!(speed_for_response_time(Some(801)).tier, RpcSpeedTier::Slow);
    assert_eq!(speed_for_response_time(Some(5_000)).tier, RpcSpeedTier::Slow);
}

#[test]
fn test_classifier_presentation_tokens() {
    let fast = speed_for_response_time(Some(100));
    assert_eq!(fast.icon_color, "icon-success");
    assert_eq!(fast.text_color, "text-success");
    assert_eq!(fast.text, "content__fast");

    let slow = speed_for_response_time(Some(2_000));
    assert_eq!(slow.icon_color, "icon-warning");
    assert_eq!(slow.text, "content__slow");

    let unavailable = speed_for_response_time(None);
    assert_eq!(unavailable.text_color, "text-critical");
    assert_eq!(unavailable.text, "content__check_node");
}

#[test]
fn test_gate_missing_record_is_loading() {
    let gated = rpc_measure_status(None);
    assert!(gated.loading);
    assert_eq!(gated.status.speed.tier, RpcSpeedTier::Unavailable);
    assert_eq!(gated.status.response_time, None);
}

#[test]
fn test_gate_fresh_record() {
    let stored = StoredRpcStatus {
        response_time: Some(500),
        latest_block: Some(123),
        updated_at: SystemTime::now(),
    };
    let gated = rpc_measure_status(Some(&stored));
    assert!(!gated.loading);
    assert_eq!(gated.status.speed.tier, RpcSpeedTier::Fast);
    assert_eq!(gated.status.response_time, Some(500));
    assert_eq!(gated.status.latest_block, Some(123));
}

#[test]
fn test_gate_stale_record_reads_unavailable() {
    let stored = StoredRpcStatus {
        response_time: Some(500),
        latest_block: Some(123),
        updated_at: SystemTime::now() - Duration::from_millis(121_000),
    };
    let gated = rpc_measure_status(Some(&stored));
    assert!(gated.loading);
    assert_eq!(gated.status.speed.tier, RpcSpeedTier::Unavailable);
    assert_eq!(gated.status.response_time, None);
}

#[test]
fn test_gate_reclassifies_from_raw_latency() {
    // a slow sample stays slow no matter what the frontend last rendered
    let stored = StoredRpcStatus {
        response_time: Some(2_000),
        latest_block: None,
        updated_at: SystemTime::now(),
    };
    let gated = rpc_measure_status(Some(&stored));
    assert!(!gated.loading);
    assert_eq!(gated.status.speed.tier, RpcSpeedTier::Slow);
}

#[test]
fn test_gate_unavailable_sample_stays_unavailable_while_fresh() {
    let stored = StoredRpcStatus {
        response_time: None,
        latest_block: None,
        updated_at: SystemTime::now(),
    };
    let gated = rpc_measure_status(Some(&stored));
    assert!(!gated.loading);
    assert_eq!(gated.status.speed.tier, RpcSpeedTier::Unavailable);
}

#[test]
fn test_store_record_then_measure_status() {
    let store = RpcStatusStore::new();
    assert!(store.measure_status("evm--1").loading);

    let measured = MeasureResult::from_probe(RpcProbeResult {
        response_time: Some(120),
        latest_block: Some(42),
    });
    store.record("evm--1", &measured);

    let gated = store.measure_status("evm--1");
    assert!(!gated.loading);
    assert_eq!(gated.status.speed.tier, RpcSpeedTier::Fast);
    assert_eq!(gated.status.latest_block, Some(42));

    // other networks are unaffected
    assert!(store.measure_status("evm--56").loading);
}

#[test]
fn test_store_replaces_record_wholesale() {
    let store = RpcStatusStore::new();
    store.record(
        "evm--1",
        &MeasureResult::from_probe(RpcProbeResult {
            response_time: Some(100),
            latest_block: Some(10),
        }),
    );
    store.record("evm--1", &MeasureResult::unavailable());

    let snapshot = store.get("evm--1").expect("record kept");
    assert_eq!(snapshot.response_time, None);
    assert_eq!(snapshot.latest_block, None);
}

#[test]
fn test_stored_status_serialization_roundtrip() {
    let status = StoredRpcStatus {
        response_time: Some(42),
        latest_block: Some(7),
        updated_at: SystemTime::now(),
    };
    let json = serde_json::to_string(&status).unwrap();
    let deser: StoredRpcStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(deser.response_time, Some(42));
    assert_eq!(deser.latest_block, Some(7));
}
