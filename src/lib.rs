pub mod error;
pub mod health;
pub mod jsonrpc;
pub mod prober;
pub mod refresher;
pub mod selection;
pub mod service;
pub mod status_store;
pub mod types;
pub mod urls;

pub use error::{Result, RpcStatusError};
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use service::{AccountSelection, AccountSelectionRequest, NetworkRegistry, RpcProbe};
pub use types::{
    Account, Network, NetworkAccountResolution, NetworkId, NetworkRpcUrlSet, PresetRpcEndpoints,
    RpcProbeResult, StoredRpcStatus,
};

// Re-export commonly used items
pub use health::{
    measure_rpc, rpc_measure_status, speed_for_response_time, MeasureResult, RpcMeasureStatus,
    RpcSpeed, RpcSpeedTier, FAST_RESPONSE_TIME_MS, STATUS_STALE_AFTER,
};
pub use prober::HttpRpcProber;
pub use refresher::StatusRefresher;
pub use selection::select_network_account;
pub use status_store::{refresh_rpc_status, RpcStatusStore};
pub use urls::RpcUrlResolver;
