use chrono::{DateTime, TimeZone, Utc};
use hashbrown::HashMap;

/// Rate-limit status reported in response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateLimit {
    pub limit: Option<u32>,
    pub remaining: Option<u32>,
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    /// Reads `x-rate-limit-*`, which every REST endpoint sends.
    pub fn from_headers(headers: &HashMap<String, String>) -> Self {
        Self::with_prefix(headers, "x-rate-limit-")
    }

    /// Reads `x-mediaratelimit-*`, sent by the media upload endpoints.
    pub fn media_from_headers(headers: &HashMap<String, String>) -> Self {
        Self::with_prefix(headers, "x-mediaratelimit-")
    }

    fn with_prefix(headers: &HashMap<String, String>, prefix: &str) -> Self {
        let get = |name: &str| {
            headers
                .get(&[prefix, name].concat())
                .map(|value| value.trim())
        };
        Self {
            limit: get("limit").and_then(|n| n.parse().ok()),
            remaining: get("remaining").and_then(|n| n.parse().ok()),
            reset: get("reset")
                .and_then(|secs| secs.parse::<i64>().ok())
                .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        }
    }

    pub fn is_present(&self) -> bool {
        self.limit.is_some() || self.remaining.is_some()
    }
}
