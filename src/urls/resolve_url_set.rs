use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{NetworkId, NetworkRegistry, NetworkRpcUrlSet, Result};

/// Resolves the merged RPC URL set for one network at a time.
///
/// Tracks which network is current so a network switch triggers a re-fetch
/// while repeated reads of the same network are served from the last result.
pub struct RpcUrlResolver {
    registry: Arc<dyn NetworkRegistry>,
    loading: AtomicBool,
    current: RwLock<Option<(NetworkId, NetworkRpcUrlSet)>>,
}

impl RpcUrlResolver {
    pub fn new(registry: Arc<dyn NetworkRegistry>) -> Self {
        Self {
            registry,
            loading: AtomicBool::new(false),
            current: RwLock::new(None),
        }
    }

    /// True while a resolve is outstanding.
    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Last successfully resolved set, if any.
    pub fn current(&self) -> Option<NetworkRpcUrlSet> {
        self.current.read().as_ref().map(|(_, set)| set.clone())
    }

    /// Resolve the URL set for `network_id` and make it current.
    ///
    /// The loading flag covers the whole operation and is reset on the error
    /// path too; the error itself propagates to the caller.
    pub async fn resolve(&self, network_id: &str) -> Result<NetworkRpcUrlSet> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.fetch(network_id).await;
        self.loading.store(false, Ordering::SeqCst);

        let set = result?;
        *self.current.write() = Some((network_id.to_string(), set.clone()));
        Ok(set)
    }

    /// Re-resolve when the target network changed, cached set otherwise.
    pub async fn switch_network(&self, network_id: &str) -> Result<NetworkRpcUrlSet> {
        {
            let current = self.current.read();
            if let Some((current_id, set)) = current.as_ref() {
                if current_id == network_id {
                    return Ok(set.clone());
                }
            }
        }

        self.resolve(network_id).await
    }

    /// Force a re-resolve of the current network.
    pub async fn refresh(&self) -> Result<Option<NetworkRpcUrlSet>> {
        let network_id = self.current.read().as_ref().map(|(id, _)| id.clone());

        match network_id {
            Some(id) => self.resolve(&id).await.map(Some),
            None => Ok(None),
        }
    }

    async fn fetch(&self, network_id: &str) -> Result<NetworkRpcUrlSet> {
        // the two fetches are independent, only the merge needs both
        let (preset, custom) = tokio::join!(
            self.registry.preset_rpc_endpoints(network_id),
            self.registry.custom_rpc_urls(network_id),
        );
        let preset = preset?;
        let custom = custom?;

        let set = if self.registry.is_preset_network(network_id).await? {
            // custom and preset are disjoint by construction upstream
            NetworkRpcUrlSet {
                default_rpc: preset.default_rpc_url,
                preset: preset.urls,
                custom,
            }
        } else {
            NetworkRpcUrlSet {
                default_rpc: preset.default_rpc_url,
                preset: vec![],
                custom: dedupe(preset.urls.into_iter().chain(custom)),
            }
        };

        Ok(set)
    }
}

// First occurrence wins.
fn dedupe(urls: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
