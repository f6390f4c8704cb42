//! Mentions loading use case.

use std::sync::Arc;

use kindred_domain::{ApiResult, ItemPage, Mention, Target};

use super::load_payload;
use crate::fetcher::Fetcher;
use crate::ports::HttpClient;

/// Loads the subject's newsfeed mentions.
pub struct MentionsLoader<C: HttpClient> {
    fetcher: Arc<Fetcher<C>>,
}

impl<C: HttpClient + 'static> MentionsLoader<C> {
    /// Creates the use case over a shared fetcher.
    pub fn new(fetcher: Arc<Fetcher<C>>) -> Self {
        Self { fetcher }
    }

    /// Fetches the mention page and applies the post-decode derivations:
    /// the wall permalink (relative to `subject`) and the normalized
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn load(&self, target: &Target, subject: i64) -> ApiResult<Vec<Mention>> {
        let page: ItemPage<Mention> =
            load_payload(&self.fetcher, target, "newsfeed.getMentions").await?;
        Ok(page
            .items
            .into_iter()
            .map(|mention| mention.with_derived(subject))
            .collect())
    }
}
