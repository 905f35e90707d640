use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::{Account, Network, PresetRpcEndpoints, Result, RpcProbeResult};

/// Latency probe against a single endpoint.
///
/// `HttpRpcProber` is the in-crate implementation; wallets with their own
/// transport (proxied, rate-limited, per-chain clients) plug in here instead.
#[async_trait]
pub trait RpcProbe: Send + Sync {
    async fn probe(&self, url: &str, network_id: &str, use_cache: bool) -> Result<RpcProbeResult>;
}

/// Read side of the wallet's network registry.
#[async_trait]
pub trait NetworkRegistry: Send + Sync {
    async fn preset_rpc_endpoints(&self, network_id: &str) -> Result<PresetRpcEndpoints>;

    async fn custom_rpc_urls(&self, network_id: &str) -> Result<Vec<String>>;

    async fn is_preset_network(&self, network_id: &str) -> Result<bool>;

    async fn enabled_networks(&self) -> Result<Vec<Network>>;
}

/// One account-selection prompt.
///
/// `respond` is a one-shot sender, so the surface can confirm at most once;
/// dropping it without sending is how a dismissed dialog reads to the
/// resolver.
#[derive(Debug)]
pub struct AccountSelectionRequest {
    pub network: Network,
    pub accounts: Vec<Account>,
    pub respond: oneshot::Sender<Account>,
}

/// Surface that can put an [`AccountSelectionRequest`] in front of the user.
pub trait AccountSelection: Send + Sync {
    fn show_account_selection(&self, request: AccountSelectionRequest);
}
