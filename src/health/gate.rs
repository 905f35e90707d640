use std::time::{Duration, SystemTime};

use crate::health::classify::speed_for_response_time;
use crate::health::measure::MeasureResult;
use crate::StoredRpcStatus;

/// A stored status older than this reads as unavailable until re-probed.
pub const STATUS_STALE_AFTER: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct RpcMeasureStatus {
    pub status: MeasureResult,
    pub loading: bool,
}

/// Gate a stored status record behind the staleness window.
///
/// A missing or stale record yields an unavailable placeholder with
/// `loading = true`, telling the frontend a refresh is due. A fresh record is
/// re-classified from its raw latency; the stored tier is never trusted, so a
/// threshold change cannot leak stale classifications out of the store.
pub fn rpc_measure_status(stored: Option<&StoredRpcStatus>) -> RpcMeasureStatus {
    let fresh = stored.is_some_and(|status| {
        // updated_at in the future reads as age zero
        SystemTime::now()
            .duration_since(status.updated_at)
            .map(|age| age <= STATUS_STALE_AFTER)
            .unwrap_or(true)
    });

    match stored {
        Some(status) if fresh => RpcMeasureStatus {
            status: MeasureResult {
                response_time: status.response_time,
                latest_block: status.latest_block,
                speed: speed_for_response_time(status.response_time),
            },
            loading: false,
        },
        _ => RpcMeasureStatus {
            status: MeasureResult::unavailable(),
            loading: true,
        },
    }
}
