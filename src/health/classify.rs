use serde::Serialize;

/// Round trips at or under this many milliseconds count as fast.
pub const FAST_RESPONSE_TIME_MS: u64 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RpcSpeedTier {
    Fast,
    Slow,
    Unavailable,
}

/// A speed tier with the presentation tokens the frontend renders it with.
///
/// The tokens are opaque theme/i18n keys carried through untouched; nothing
/// in this crate interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RpcSpeed {
    pub tier: RpcSpeedTier,
    pub icon_color: &'static str,
    pub text_color: &'static str,
    pub text: &'static str,
}

pub const FAST: RpcSpeed = RpcSpeed {
    tier: RpcSpeedTier::Fast,
    icon_color: "icon-success",
    text_color: "text-success",
    text: "content__fast",
};

pub const SLOW: RpcSpeed = RpcSpeed {
    tier: RpcSpeedTier::Slow,
    icon_color: "icon-warning",
    text_color: "text-warning",
    text: "content__slow",
};

pub const UNAVAILABLE: RpcSpeed = RpcSpeed {
    tier: RpcSpeedTier::Unavailable,
    icon_color: "icon-critical",
    text_color: "text-critical",
    text: "content__check_node",
};

/// Classify a latency sample. Total over all inputs, including a missing one.
pub fn speed_for_response_time(response_time: Option<u64>) -> &'static RpcSpeed {
    match response_time {
        None => &UNAVAILABLE,
        Some(ms) if ms <= FAST_RESPONSE_TIME_MS => &FAST,
        Some(_) => &SLOW,
    }
}
