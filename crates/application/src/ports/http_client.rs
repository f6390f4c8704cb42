//! HTTP Client port

use async_trait::async_trait;
use kindred_domain::{ApiResult, FetchMode, FetchOptions, RawResponse, Target};

/// Port for issuing single HTTP requests.
///
/// Implementations perform exactly one network call per invocation and
/// classify every failure into the domain error taxonomy. Retries and
/// batching live above this trait; implementations must be safe to call
/// from many workers at once.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues one GET request against the target.
    ///
    /// The requested [`FetchMode`] selects what comes back: the bare
    /// status code, the body text, or the body parsed as JSON. A
    /// configured delay is applied only after a successful response.
    ///
    /// # Errors
    ///
    /// `Request` kind when the HTTP status is outside the success range,
    /// `InvalidResponseType` when a JSON body cannot be decoded, and
    /// `Connection` kind for transport-level failures.
    async fn fetch(
        &self,
        target: &Target,
        mode: FetchMode,
        options: &FetchOptions,
    ) -> ApiResult<RawResponse>;

    /// Lightweight reachability probe of a known-stable endpoint.
    ///
    /// # Errors
    ///
    /// `Connection` kind when the endpoint cannot be reached.
    async fn probe(&self, target: &Target) -> ApiResult<()>;
}
