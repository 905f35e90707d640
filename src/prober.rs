use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{json, Value};
use tokio::time::timeout;
use url::Url;

use crate::{JsonRpcRequest, JsonRpcResponse, Result, RpcProbe, RpcProbeResult, RpcStatusError};

/// How long a stored probe result keeps serving `use_cache` reads.
const PROBE_CACHE_TTL: Duration = Duration::from_secs(60);

/// JSON-RPC latency prober.
///
/// Posts a block-height request, times the round trip and extracts the
/// reported height. Successful results are cached per `(network, url)` so
/// that repeated status reads do not hammer the endpoint.
pub struct HttpRpcProber {
    timeout_duration: Duration,
    method: String,
    client: reqwest::Client,
    cache: DashMap<String, CachedProbe>,
}

#[derive(Clone)]
struct CachedProbe {
    result: RpcProbeResult,
    fetched_at: Instant,
}

impl HttpRpcProber {
    pub fn new(timeout_ms: u64) -> Self {
        Self::with_method(timeout_ms, "eth_blockNumber")
    }

    /// Probe with a chain-specific height method instead of `eth_blockNumber`.
    pub fn with_method(timeout_ms: u64, method: &str) -> Self {
        Self {
            timeout_duration: Duration::from_millis(timeout_ms),
            method: method.to_string(),
            client: reqwest::Client::new(),
            cache: DashMap::new(),
        }
    }

    async fn probe_uncached(&self, url: &str) -> Result<RpcProbeResult> {
        let target: Url = url.parse()?;
        let request = JsonRpcRequest::new(&self.method, json!([]));
        let start = Instant::now();

        let response = timeout(
            self.timeout_duration,
            self.client.post(target).json(&request).send(),
        )
        .await
        .map_err(|_| RpcStatusError::Timeout {
            duration_ms: self.timeout_duration.as_millis() as u64,
        })??;

        if !response.status().is_success() {
            return Err(RpcStatusError::JsonRpc(url.to_owned()));
        }

        let body: JsonRpcResponse<Value> = response.json().await?;
        let elapsed = start.elapsed().as_millis() as u64;

        match body.result {
            Some(result) => Ok(RpcProbeResult {
                response_time: Some(elapsed),
                latest_block: parse_block_number(&result),
            }),
            None => Err(RpcStatusError::JsonRpc(url.to_owned())),
        }
    }
}

// Heights usually arrive as "0x..." strings; some chains answer with a bare
// number.
fn parse_block_number(result: &Value) -> Option<u64> {
    if let Some(height) = result.as_u64() {
        return Some(height);
    }
    let hex = result.as_str()?;
    u64::from_str_radix(hex.trim_start_matches("0x"), 16).ok()
}

#[async_trait]
impl RpcProbe for HttpRpcProber {
    async fn probe(&self, url: &str, network_id: &str, use_cache: bool) -> Result<RpcProbeResult> {
        let key = format!("{network_id}:{url}");

        if use_cache {
            if let Some(cached) = self.cache.get(&key) {
                if cached.fetched_at.elapsed() <= PROBE_CACHE_TTL {
                    return Ok(cached.result.clone());
                }
            }
        }

        let result = self.probe_uncached(url).await?;
        self.cache.insert(
            key,
            CachedProbe {
                result: result.clone(),
                fetched_at: Instant::now(),
            },
        );

        Ok(result)
    }
}
