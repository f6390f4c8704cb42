//! Environment-derived API settings.
//!
//! Tokens and request parameters are resolved once at startup and handed
//! down by reference; nothing below the app crate reads the process
//! environment.

use std::env;

use thiserror::Error;

/// Profile fields requested from the profile and friend endpoints.
pub const REQUEST_FIELDS: &str = "about,activities,occupation,bdate,city,connections,contacts,\
                                  counters,relatives,sex,universities,last_seen";

/// API version every request is pinned to.
pub const API_VERSION: &str = "5.131";

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A required environment variable is missing.
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Credentials and request parameters for one run.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Service token for profile and friend lookups.
    pub access_token: String,
    /// User token for mention, photo and mutual-friend lookups.
    pub user_access_token: String,
    /// Pinned API version.
    pub api_version: String,
    /// Profile fields to request.
    pub request_fields: String,
}

impl ApiSettings {
    /// Reads the tokens from `ACCESS_TOKEN` and `USER_ACCESS_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingVar`] naming the first variable
    /// that is absent.
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            access_token: require_var("ACCESS_TOKEN")?,
            user_access_token: require_var("USER_ACCESS_TOKEN")?,
            api_version: API_VERSION.to_string(),
            request_fields: REQUEST_FIELDS.to_string(),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, SettingsError> {
    env::var(name).map_err(|_| SettingsError::MissingVar(name))
}
