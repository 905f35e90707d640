use serde::Serialize;

use crate::health::classify::{self, speed_for_response_time, RpcSpeed};
use crate::{RpcProbe, RpcProbeResult};

/// A classified probe outcome, ready for the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureResult {
    pub response_time: Option<u64>,
    pub latest_block: Option<u64>,
    pub speed: &'static RpcSpeed,
}

impl MeasureResult {
    pub fn unavailable() -> Self {
        Self {
            response_time: None,
            latest_block: None,
            speed: &classify::UNAVAILABLE,
        }
    }

    pub fn from_probe(probe: RpcProbeResult) -> Self {
        Self {
            response_time: probe.response_time,
            latest_block: probe.latest_block,
            speed: speed_for_response_time(probe.response_time),
        }
    }
}

impl From<RpcProbeResult> for MeasureResult {
    fn from(probe: RpcProbeResult) -> Self {
        Self::from_probe(probe)
    }
}

/// Measure one endpoint and classify the outcome.
///
/// Probe failures are not errors from the caller's point of view: whatever
/// goes wrong underneath, the answer is an unavailable endpoint.
pub async fn measure_rpc(
    probe: &dyn RpcProbe,
    network_id: &str,
    url: &str,
    use_cache: bool,
) -> MeasureResult {
    match probe.probe(url, network_id, use_cache).await {
        Ok(result) => MeasureResult::from_probe(result),
        Err(error) => {
            tracing::debug!(
                network = %network_id,
                url = %url,
                error = %error,
                "RPC probe failed"
            );
            MeasureResult::unavailable()
        }
    }
}
