use serde::{Deserialize, Serialize};
use std::time::SystemTime;

pub type NetworkId = String;

/// A network as exposed by the wallet's registry of enabled networks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Network {
    pub id: NetworkId,
    pub name: String,
}

/// A candidate account on some network, eligible for a send/receive/swap action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Raw outcome of a single latency probe against one endpoint.
///
/// Both fields are absent when the probe failed; `latest_block` alone may be
/// absent when the endpoint answered but returned an unparseable height.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RpcProbeResult {
    pub response_time: Option<u64>,
    pub latest_block: Option<u64>,
}

/// Probe outcome persisted per network id.
///
/// Written only by the refresh path, replaced wholesale on every write.
/// Readers never trust anything derived from it without re-running the
/// classifier against `response_time`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoredRpcStatus {
    pub response_time: Option<u64>,
    pub latest_block: Option<u64>,
    #[serde(with = "system_time_serde")]
    pub updated_at: SystemTime,
}

/// Preset endpoint data for a network, as served by the registry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PresetRpcEndpoints {
    pub urls: Vec<String>,
    pub default_rpc_url: Option<String>,
}

/// Merged view of every RPC URL known for one network.
///
/// For preset networks `preset` is the vendor list and `custom` holds only
/// user-added URLs (disjoint by construction upstream). For user-added
/// networks `preset` stays empty and `custom` is the deduplicated union.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkRpcUrlSet {
    pub default_rpc: Option<String>,
    pub preset: Vec<String>,
    pub custom: Vec<String>,
}

/// The single (network, account) pair an action resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkAccountResolution {
    pub network: Network,
    pub account: Account,
}

/**
 * SystemTime is not natively serializable, so status records carry it as
 * milliseconds since the unix epoch, which is also the shape the wallet
 * frontend persists.
 */
mod system_time_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
        let duration = time
            .duration_since(UNIX_EPOCH)
            .map_err(serde::ser::Error::custom)?;
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SystemTime, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + Duration::from_millis(millis))
    }
}
