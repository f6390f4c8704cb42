//! Raw transport output and the remote API's wire envelope.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Output of a single transport call, shaped by the requested
/// [`FetchMode`](crate::request::FetchMode).
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// Status-only mode.
    Status(u16),
    /// Raw body text mode.
    Text(String),
    /// Parsed JSON mode.
    Json(Value),
}

impl RawResponse {
    /// True when this response carries a parsed JSON payload.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Unwraps the JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidResponseType` error when the response was
    /// fetched in a non-JSON mode.
    pub fn into_json(self) -> ApiResult<Value> {
        match self {
            Self::Json(value) => Ok(value),
            other => Err(ApiError::invalid_response_type(
                "expected a JSON payload",
                format!("RawResponse::into_json, got a {} response", other.mode_name()),
            )),
        }
    }

    const fn mode_name(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Text(_) => "text",
            Self::Json(_) => "json",
        }
    }
}

/// Body-level fault reported by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiFault {
    /// Remote error code.
    pub error_code: i64,
    /// Remote error message.
    pub error_msg: String,
}

/// The remote API's outer body shape: one of `response` / `error`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Successful payload, when present.
    #[serde(default)]
    pub response: Option<T>,
    /// Remote fault, when present.
    #[serde(default)]
    pub error: Option<ApiFault>,
}

impl<T> Envelope<T> {
    /// Folds the envelope into its payload.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidResponse` error when the body carried a remote
    /// fault, or when neither payload nor fault is present.
    pub fn into_payload(self, operation: &str) -> ApiResult<T> {
        if let Some(fault) = self.error {
            return Err(ApiError::invalid_response(
                fault.error_msg,
                format!("{operation}, api error code {}", fault.error_code),
            ));
        }
        self.response.ok_or_else(|| {
            ApiError::invalid_response(
                "missing response payload",
                format!("{operation}, neither response nor error present"),
            )
        })
    }
}

/// Paged item container used by the list-returning API methods.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemPage<T> {
    /// Items on this page.
    pub items: Vec<T>,
}
