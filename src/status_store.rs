use std::time::SystemTime;

use dashmap::DashMap;

use crate::health::{measure_rpc, rpc_measure_status, MeasureResult, RpcMeasureStatus};
use crate::{NetworkId, RpcProbe, StoredRpcStatus};

/// Shared status records keyed by network id.
///
/// `record` is the only writer path and replaces the whole record, so
/// overlapping refreshes degrade to last-write-wins over idempotent
/// snapshots. Readers get clones, never references into the map.
#[derive(Debug, Default)]
pub struct RpcStatusStore {
    statuses: DashMap<NetworkId, StoredRpcStatus>,
}

impl RpcStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, network_id: &str, result: &MeasureResult) {
        self.statuses.insert(
            network_id.to_string(),
            StoredRpcStatus {
                response_time: result.response_time,
                latest_block: result.latest_block,
                updated_at: SystemTime::now(),
            },
        );
    }

    pub fn get(&self, network_id: &str) -> Option<StoredRpcStatus> {
        self.statuses
            .get(network_id)
            .map(|entry| entry.value().clone())
    }

    /// Snapshot for `network_id`, gated behind the staleness window.
    pub fn measure_status(&self, network_id: &str) -> RpcMeasureStatus {
        rpc_measure_status(self.get(network_id).as_ref())
    }
}

/// Probe `url` uncached, classify, and publish the fresh record.
pub async fn refresh_rpc_status(
    probe: &dyn RpcProbe,
    store: &RpcStatusStore,
    network_id: &str,
    url: &str,
) -> MeasureResult {
    let measured = measure_rpc(probe, network_id, url, false).await;
    store.record(network_id, &measured);
    measured
}
