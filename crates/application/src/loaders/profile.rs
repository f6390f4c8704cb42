//! Profile loading use case.

use std::sync::Arc;

use kindred_domain::{ApiError, ApiResult, Profile, Target};

use super::load_payload;
use crate::fetcher::Fetcher;
use crate::ports::HttpClient;

/// Loads the subject's profile from the profile endpoint.
pub struct ProfileLoader<C: HttpClient> {
    fetcher: Arc<Fetcher<C>>,
}

impl<C: HttpClient + 'static> ProfileLoader<C> {
    /// Creates the use case over a shared fetcher.
    pub fn new(fetcher: Arc<Fetcher<C>>) -> Self {
        Self { fetcher }
    }

    /// Fetches and decodes the first profile the endpoint returns.
    ///
    /// # Errors
    ///
    /// Any pipeline error, plus `EmptyResponse` when the endpoint
    /// answers with an empty profile list.
    pub async fn load(&self, target: &Target) -> ApiResult<Profile> {
        let profiles: Vec<Profile> = load_payload(&self.fetcher, target, "users.get").await?;
        profiles.into_iter().next().ok_or_else(|| {
            ApiError::empty_response(
                "profile list is empty",
                format!("ProfileLoader::load, target = {target}"),
            )
        })
    }
}
