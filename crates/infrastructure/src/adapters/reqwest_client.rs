//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest
//! library. It performs exactly one network call per invocation and maps
//! every reqwest failure onto the domain error taxonomy.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use kindred_application::ports::HttpClient;
use kindred_domain::{ApiError, ApiResult, FetchMode, FetchOptions, RawResponse, Target};

/// HTTP client implementation using reqwest.
///
/// Wraps a `reqwest::Client` and implements the `HttpClient` port from
/// the application layer.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "Kindred/<crate version>"
    ///
    /// # Errors
    ///
    /// Returns a `Connection`-kind error if the underlying client cannot
    /// be created.
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("Kindred/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|error| {
                ApiError::connection(
                    "failed to build the HTTP client",
                    format!("ReqwestClient::new, {error}"),
                )
            })?;
        Ok(Self { client })
    }

    /// Creates an adapter over a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Builds the `Request`-kind error for a non-success status.
    fn status_error(status: u16) -> ApiError {
        ApiError::request(
            "Error! Status code is not 200 [OK], request failed!",
            format!("ReqwestClient::fetch\nStatus code: {status}."),
        )
    }

    /// Maps reqwest transport failures onto the domain taxonomy.
    fn map_send_error(target: &Target, error: &reqwest::Error) -> ApiError {
        let detail = if error.is_timeout() {
            "request timed out"
        } else if error.is_connect() {
            "connection failed"
        } else {
            "transport failed"
        };
        ApiError::connection(
            format!("Error! No connection to the Internet ({detail})!"),
            format!("ReqwestClient::fetch, target = {target}, {error}"),
        )
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn fetch(
        &self,
        target: &Target,
        mode: FetchMode,
        options: &FetchOptions,
    ) -> ApiResult<RawResponse> {
        tracing::debug!(%target, ?mode, "GET");
        let response = self
            .client
            .get(target.as_str())
            .timeout(options.timeout())
            .send()
            .await
            .map_err(|error| Self::map_send_error(target, &error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status.as_u16()));
        }

        // Fixed pacing knob; applied only on the success path.
        if let Some(delay) = options.delay() {
            tokio::time::sleep(delay).await;
        }

        match mode {
            FetchMode::Status => Ok(RawResponse::Status(status.as_u16())),
            FetchMode::Text => {
                let text = response.text().await.map_err(|error| {
                    ApiError::connection(
                        "failed to read the response body",
                        format!("ReqwestClient::fetch, target = {target}, {error}"),
                    )
                })?;
                Ok(RawResponse::Text(text))
            }
            FetchMode::Json => response
                .json::<Value>()
                .await
                .map(RawResponse::Json)
                .map_err(|error| {
                    ApiError::invalid_response_type(
                        "cannot decode the body as JSON",
                        format!("ReqwestClient::fetch, target = {target}, description = {error}"),
                    )
                }),
        }
    }

    async fn probe(&self, target: &Target) -> ApiResult<()> {
        self.client
            .head(target.as_str())
            .send()
            .await
            .map(|_| ())
            .map_err(|error| {
                ApiError::connection(
                    "Error! No connection to the Internet!",
                    format!("ReqwestClient::probe, {error}"),
                )
            })
    }
}
