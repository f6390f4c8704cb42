//! Request-side value types consumed by the fetch pipeline.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// A fully resolved request URL.
///
/// Targets are constructed by the caller's routing layer; the fetch
/// pipeline never assembles URLs, injects credentials, or reads the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(Url);

impl Target {
    /// Parses a fully formed URL string into a target.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(Self)
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Url> for Target {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

impl FromStr for Target {
    type Err = url::ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects what a transport call yields from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMode {
    /// Only the HTTP status code.
    Status,
    /// The raw body text.
    Text,
    /// The body decoded as JSON.
    #[default]
    Json,
}

/// Per-call knobs handed to the transport layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchOptions {
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Fixed delay inserted after a successful response, in seconds.
    /// Applied only on success, never on failure.
    pub delay_secs: f64,
}

impl FetchOptions {
    /// The request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The post-success delay, if one is configured.
    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        (self.delay_secs > 0.0).then(|| Duration::from_secs_f64(self.delay_secs))
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            delay_secs: 0.0,
        }
    }
}
