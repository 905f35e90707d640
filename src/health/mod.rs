pub mod classify;
pub mod gate;
pub mod measure;

pub use classify::{speed_for_response_time, RpcSpeed, RpcSpeedTier, FAST_RESPONSE_TIME_MS};
pub use gate::{rpc_measure_status, RpcMeasureStatus, STATUS_STALE_AFTER};
pub use measure::{measure_rpc, MeasureResult};
