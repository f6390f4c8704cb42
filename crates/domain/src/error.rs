//! The closed error taxonomy for the fetch pipeline.
//!
//! Every failure path in the pipeline produces exactly one [`ApiError`],
//! never a partial or ambiguous state. The [`ApiErrorKind`] is the stable
//! identifier callers can match on; the message and context are for
//! humans and logs.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for every recoverable failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// No network connectivity, or an aggregated batch failure.
    Connection,
    /// The HTTP status was outside the success range.
    Request,
    /// The payload could not be decoded, or its container type was wrong.
    InvalidResponseType,
    /// The payload decoded to zero elements.
    EmptyResponse,
    /// The remote API reported a fault inside an otherwise valid body.
    InvalidResponse,
    /// A decoded record failed a schema field constraint.
    Validation,
}

impl ApiErrorKind {
    /// Returns the stable snake_case identifier for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Request => "request",
            Self::InvalidResponseType => "invalid_response_type",
            Self::EmptyResponse => "empty_response",
            Self::InvalidResponse => "invalid_response",
            Self::Validation => "validation",
        }
    }

    /// Returns a human-readable title for this kind.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Connection => "Connection Error",
            Self::Request => "Request Failed",
            Self::InvalidResponseType => "Invalid Type Of Response",
            Self::EmptyResponse => "Empty Response",
            Self::InvalidResponse => "Invalid Response",
            Self::Validation => "Validation Error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classified pipeline failure.
///
/// Carries the human message, a free-form origin context (the component
/// and offending input, a status code, a decode trace) and the stable
/// [`ApiErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Which failure mode this is.
    pub kind: ApiErrorKind,
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Where the failure originated and what input provoked it.
    pub context: String,
}

impl ApiError {
    /// Creates an error of an arbitrary kind.
    pub fn new(kind: ApiErrorKind, message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: context.into(),
        }
    }

    /// A connectivity or aggregated batch failure.
    pub fn connection(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Connection, message, context)
    }

    /// A non-2xx HTTP status.
    pub fn request(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Request, message, context)
    }

    /// A decoding failure or wrong container type.
    pub fn invalid_response_type(
        message: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::new(ApiErrorKind::InvalidResponseType, message, context)
    }

    /// A zero-element payload.
    pub fn empty_response(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::EmptyResponse, message, context)
    }

    /// A higher-level shape violation, e.g. a body-level API fault.
    pub fn invalid_response(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidResponse, message, context)
    }

    /// A schema field failure during record decoding.
    pub fn validation(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message, context)
    }

    /// True when this error carries the given kind.
    #[must_use]
    pub fn is(&self, kind: ApiErrorKind) -> bool {
        self.kind == kind
    }
}

/// Result type alias for every fallible pipeline operation.
pub type ApiResult<T> = Result<T, ApiError>;
