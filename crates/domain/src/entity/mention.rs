//! Mention entity and its derived permalink and timestamp rules.

use std::fmt;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

const POST_TYPE_REPLY: &str = "reply";
const POST_TYPE_POST: &str = "post";

/// A wall timestamp: epoch seconds on the wire, display text once
/// normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Seconds since the Unix epoch.
    Epoch(i64),
    /// Pre-formatted display text.
    Text(String),
}

impl Timestamp {
    /// Converts epoch seconds to `YYYY-MM-DD HH:MM:SS` (UTC).
    ///
    /// Text and out-of-range values pass through unchanged.
    #[must_use]
    pub fn normalized(&self) -> Self {
        match self {
            Self::Epoch(seconds) => DateTime::from_timestamp(*seconds, 0).map_or_else(
                || self.clone(),
                |moment| Self::Text(moment.format("%Y-%m-%d %H:%M:%S").to_string()),
            ),
            Self::Text(_) => self.clone(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epoch(seconds) => write!(f, "{seconds}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A newsfeed mention of the subject on someone's wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Wall timestamp of the mentioning post.
    pub date: Timestamp,
    /// Wall owner the post was published to.
    pub to_id: i64,
    /// Author of the mentioning post.
    pub from_id: i64,
    /// Post kind reported by the API.
    pub post_type: String,
    /// Post text.
    pub text: String,
    /// Thread ancestry for replies.
    #[serde(default)]
    pub parents_stack: Option<Vec<i64>>,
    /// Post or comment id of the mention itself.
    #[serde(default)]
    pub id: Option<i64>,
    /// Parent post id, present for replies.
    #[serde(default)]
    pub post_id: Option<i64>,
    /// Derived permalink; filled after decoding, never read from the wire.
    #[serde(default, skip_deserializing)]
    pub mention_url: Option<String>,
}

impl Mention {
    /// Builds the wall permalink for this mention.
    ///
    /// Absent when the mention id is missing, when the post sits on the
    /// subject's own wall, or for post kinds other than `"post"` and
    /// `"reply"`. Replies additionally require a parent post id and link
    /// as `wall{to_id}_{post_id}?reply={id}`; plain posts link as
    /// `wall{to_id}_{id}`.
    #[must_use]
    pub fn permalink(&self, subject: i64) -> Option<String> {
        let id = self.id?;
        if self.to_id == subject {
            return None;
        }
        match self.post_type.as_str() {
            POST_TYPE_REPLY => {
                let post_id = self.post_id?;
                Some(format!("wall{}_{}?reply={}", self.to_id, post_id, id))
            }
            POST_TYPE_POST => Some(format!("wall{}_{}", self.to_id, id)),
            _ => None,
        }
    }

    /// Applies the post-decode derivations: the permalink and the
    /// normalized timestamp.
    #[must_use]
    pub fn with_derived(mut self, subject: i64) -> Self {
        self.mention_url = self.permalink(subject);
        self.date = self.date.normalized();
        self
    }
}
