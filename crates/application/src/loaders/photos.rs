//! Photo loading use case.

use std::sync::Arc;

use kindred_domain::{ApiResult, ItemPage, Photo, PhotoSize, Target};

use super::load_payload;
use crate::fetcher::Fetcher;
use crate::ports::HttpClient;

/// Loads the subject's photo archive.
pub struct PhotosLoader<C: HttpClient> {
    fetcher: Arc<Fetcher<C>>,
}

impl<C: HttpClient + 'static> PhotosLoader<C> {
    /// Creates the use case over a shared fetcher.
    pub fn new(fetcher: Arc<Fetcher<C>>) -> Self {
        Self { fetcher }
    }

    /// Fetches the photo page and keeps the largest rendition of each
    /// photo. Photos without renditions are skipped.
    ///
    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn load(&self, target: &Target) -> ApiResult<Vec<PhotoSize>> {
        let page: ItemPage<Photo> = load_payload(&self.fetcher, target, "photos.getAll").await?;
        Ok(page
            .items
            .iter()
            .filter_map(|photo| photo.largest_size().cloned())
            .collect())
    }
}
