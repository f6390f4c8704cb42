//! Friend-list loading use case.

use std::sync::Arc;

use kindred_domain::{ApiResult, FriendRoster, ItemPage, Profile, Target};

use super::load_payload;
use crate::fetcher::Fetcher;
use crate::ports::HttpClient;

/// Loads the subject's friend list.
pub struct FriendsLoader<C: HttpClient> {
    fetcher: Arc<Fetcher<C>>,
}

impl<C: HttpClient + 'static> FriendsLoader<C> {
    /// Creates the use case over a shared fetcher.
    pub fn new(fetcher: Arc<Fetcher<C>>) -> Self {
        Self { fetcher }
    }

    /// Fetches the friend page and wraps it as a [`FriendRoster`], the
    /// aggregate-statistics view consumed by the caller.
    ///
    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn load(&self, target: &Target) -> ApiResult<FriendRoster> {
        let page: ItemPage<Profile> = load_payload(&self.fetcher, target, "friends.get").await?;
        Ok(FriendRoster::new(page.items))
    }
}
