//! URL templating for the remote API.
//!
//! Builds every ready-to-fetch target the pipeline consumes. The fetch
//! core performs no URL construction of its own, so all endpoint
//! knowledge lives here.

use url::Url;

use kindred_domain::Target;

use crate::settings::ApiSettings;

/// Base URL of the remote API's method dispatcher.
pub const API_BASE: &str = "https://api.vk.com/method";

/// Builds fully formed request targets from the API settings.
#[derive(Debug, Clone)]
pub struct ApiRoutes {
    settings: ApiSettings,
    base: Url,
}

impl ApiRoutes {
    /// Creates a route builder over the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API base URL fails to parse.
    pub fn new(settings: ApiSettings) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(API_BASE)?,
            settings,
        })
    }

    /// Profile lookup for a username or numeric id.
    #[must_use]
    pub fn users_get(&self, username: &str) -> Target {
        let mut url = self.method("users.get");
        url.query_pairs_mut()
            .append_pair("user_ids", &normalize_username(username))
            .append_pair("fields", &self.settings.request_fields)
            .append_pair("access_token", &self.settings.access_token)
            .append_pair("v", &self.settings.api_version);
        Target::from(url)
    }

    /// Friend list of a numeric id, first 500 entries.
    #[must_use]
    pub fn friends_get(&self, user_id: i64) -> Target {
        let mut url = self.method("friends.get");
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string())
            .append_pair("count", "500")
            .append_pair("fields", &self.settings.request_fields)
            .append_pair("access_token", &self.settings.access_token)
            .append_pair("v", &self.settings.api_version);
        Target::from(url)
    }

    /// Full photo archive of a numeric id.
    #[must_use]
    pub fn photos_get_all(&self, owner_id: i64) -> Target {
        let mut url = self.method("photos.getAll");
        url.query_pairs_mut()
            .append_pair("owner_id", &owner_id.to_string())
            .append_pair("need_hidden", "1")
            .append_pair("extended", "1")
            .append_pair("access_token", &self.settings.user_access_token)
            .append_pair("v", &self.settings.api_version);
        Target::from(url)
    }

    /// Newsfeed mentions of a numeric id, most recent 50.
    #[must_use]
    pub fn newsfeed_get_mentions(&self, owner_id: i64) -> Target {
        let mut url = self.method("newsfeed.getMentions");
        url.query_pairs_mut()
            .append_pair("owner_id", &owner_id.to_string())
            .append_pair("count", "50")
            .append_pair("access_token", &self.settings.user_access_token)
            .append_pair("v", &self.settings.api_version);
        Target::from(url)
    }

    /// Mutual friends between the subject and one chunk of friend ids.
    #[must_use]
    pub fn friends_get_mutual(&self, source_uid: i64, target_uids: &[i64]) -> Target {
        let uids: Vec<String> = target_uids.iter().map(ToString::to_string).collect();
        let mut url = self.method("friends.getMutual");
        url.query_pairs_mut()
            .append_pair("source_uid", &source_uid.to_string())
            .append_pair("target_uids", &uids.join(","))
            .append_pair("count", "500")
            .append_pair("access_token", &self.settings.user_access_token)
            .append_pair("v", &self.settings.api_version);
        Target::from(url)
    }

    fn method(&self, name: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(name);
        }
        url
    }
}

/// Normalizes bare numeric usernames to the canonical `id{digits}` form.
#[must_use]
pub fn normalize_username(username: &str) -> String {
    if !username.is_empty() && username.bytes().all(|byte| byte.is_ascii_digit()) {
        format!("id{username}")
    } else {
        username.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn routes() -> ApiRoutes {
        ApiRoutes::new(ApiSettings {
            access_token: "svc-token".to_string(),
            user_access_token: "usr-token".to_string(),
            api_version: "5.131".to_string(),
            request_fields: "bdate,city".to_string(),
        })
        .expect("base url parses")
    }

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("123"), "id123");
        assert_eq!(normalize_username("id123"), "id123");
        assert_eq!(normalize_username("loganovas"), "loganovas");
        assert_eq!(normalize_username(""), "");
    }

    #[test]
    fn test_users_get_carries_fields_and_token() {
        let target = routes().users_get("42");
        let url = target.as_str();
        assert!(url.starts_with("https://api.vk.com/method/users.get?"));
        assert!(url.contains("user_ids=id42"));
        assert!(url.contains("access_token=svc-token"));
        assert!(url.contains("v=5.131"));
    }

    #[test]
    fn test_friends_get_requests_500_profiles() {
        let target = routes().friends_get(17);
        assert!(target.as_str().contains("friends.get?"));
        assert!(target.as_str().contains("user_id=17"));
        assert!(target.as_str().contains("count=500"));
    }

    #[test]
    fn test_mutual_route_joins_the_chunk() {
        let target = routes().friends_get_mutual(17, &[2, 3, 4]);
        assert!(target.as_str().contains("source_uid=17"));
        assert!(target.as_str().contains("target_uids=2%2C3%2C4"));
        assert!(target.as_str().contains("access_token=usr-token"));
    }

    #[test]
    fn test_mentions_and_photos_use_the_user_token() {
        let mentions = routes().newsfeed_get_mentions(17);
        assert!(mentions.as_str().contains("newsfeed.getMentions?"));
        assert!(mentions.as_str().contains("access_token=usr-token"));

        let photos = routes().photos_get_all(17);
        assert!(photos.as_str().contains("photos.getAll?"));
        assert!(photos.as_str().contains("need_hidden=1"));
    }
}
