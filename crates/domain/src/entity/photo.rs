//! Photo entity.

use serde::{Deserialize, Serialize};

/// One rendition of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    /// Download URL of this rendition.
    pub url: String,
    /// Rendition width in pixels.
    pub width: i64,
}

/// A photo record from the archive endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Photo id.
    pub id: i64,
    /// Upload timestamp, epoch seconds.
    pub date: i64,
    /// Owning account id.
    pub owner_id: i64,
    /// Available renditions, smallest first.
    pub sizes: Vec<PhotoSize>,
    /// True when people are tagged on the photo.
    pub has_tags: bool,
}

impl Photo {
    /// The largest rendition. The API lists sizes in ascending order, so
    /// this is the last entry.
    #[must_use]
    pub fn largest_size(&self) -> Option<&PhotoSize> {
        self.sizes.last()
    }
}
