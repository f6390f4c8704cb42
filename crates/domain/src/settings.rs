//! Pipeline-wide fetch settings.
//!
//! Built once at startup and passed by reference into the fetch layer.
//! Nothing here reads the process environment; the caller decides where
//! the values come from.

use serde::{Deserialize, Serialize};

use crate::request::FetchOptions;

/// Default worker cap for batch fetches.
pub const DEFAULT_MAX_CONCURRENCY: usize = 100;

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Default friend-id count per mutual-friends query.
pub const DEFAULT_MUTUAL_CHUNK_SIZE: usize = 190;

/// Endpoint probed before every batch to confirm connectivity.
pub const DEFAULT_PROBE_URL: &str = "https://google.com";

/// Knobs for the fetch pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Maximum in-flight requests per batch; excess requests queue.
    pub max_concurrency: usize,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Fixed delay after each successful response, in seconds.
    pub delay_secs: f64,
    /// Reachability probe endpoint.
    pub probe_url: String,
    /// Friend ids per mutual-friends request.
    pub mutual_chunk_size: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            delay_secs: 0.0,
            probe_url: DEFAULT_PROBE_URL.to_string(),
            mutual_chunk_size: DEFAULT_MUTUAL_CHUNK_SIZE,
        }
    }
}

impl FetchSettings {
    /// Per-call transport knobs derived from these settings.
    #[must_use]
    pub const fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout_ms: self.timeout_ms,
            delay_secs: self.delay_secs,
        }
    }
}
