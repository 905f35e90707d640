use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use futures::future::join_all;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::status_store::{refresh_rpc_status, RpcStatusStore};
use crate::{NetworkId, RpcProbe};

/// Periodic background refresh of every watched endpoint.
///
/// The frontend registers the active endpoint per network; each tick probes
/// all of them concurrently and publishes fresh records into the store.
pub struct StatusRefresher {
    probe: Arc<dyn RpcProbe>,
    store: Arc<RpcStatusStore>,
    interval: Duration,
    watched: DashMap<NetworkId, String>,
    cancel: CancellationToken,
}

impl StatusRefresher {
    pub fn new(probe: Arc<dyn RpcProbe>, store: Arc<RpcStatusStore>, interval: Duration) -> Self {
        Self {
            probe,
            store,
            interval,
            watched: DashMap::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Track `url` as the active endpoint for `network_id`.
    pub fn watch(&self, network_id: &str, url: &str) {
        self.watched.insert(network_id.to_string(), url.to_string());
    }

    pub fn unwatch(&self, network_id: &str) {
        self.watched.remove(network_id);
    }

    /// Token that stops the spawned loop when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Refresh every watched endpoint once, concurrently.
    pub async fn refresh_all(&self) {
        let targets: Vec<(NetworkId, String)> = self
            .watched
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let tasks = targets.iter().map(|(network_id, url)| {
            refresh_rpc_status(self.probe.as_ref(), &self.store, network_id, url)
        });

        join_all(tasks).await;
    }

    /// Run the refresh loop until the cancellation token fires.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = self.cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        tracing::debug!(watched = self.watched.len(), "refreshing RPC statuses");
                        self.refresh_all().await;
                    }
                }
            }
        })
    }
}
