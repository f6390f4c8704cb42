//! End-to-end pipeline tests over a scripted transport double.
//!
//! Each scenario wires the real fetcher, validator, and loaders against
//! a mock `HttpClient` that answers from canned JSON bodies, the way the
//! remote API would.

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use kindred_application::loaders::{
    FriendsLoader, MentionsLoader, MutualLoader, PhotosLoader, ProfileLoader,
};
use kindred_application::ports::HttpClient;
use kindred_application::Fetcher;
use kindred_domain::{
    ApiErrorKind, ApiResult, FetchMode, FetchOptions, FetchSettings, RawResponse, Target,
};

/// Answers each request with the first canned body whose key occurs in
/// the target URL.
struct ScriptedClient {
    bodies: Vec<(&'static str, Value)>,
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn fetch(
        &self,
        target: &Target,
        _mode: FetchMode,
        _options: &FetchOptions,
    ) -> ApiResult<RawResponse> {
        let url = target.as_str();
        let body = self
            .bodies
            .iter()
            .find(|(key, _)| url.contains(key))
            .map(|(_, body)| body.clone())
            .unwrap_or_else(|| json!({"error": {"error_code": 100, "error_msg": "no script"}}));
        Ok(RawResponse::Json(body))
    }

    async fn probe(&self, _target: &Target) -> ApiResult<()> {
        Ok(())
    }
}

fn pipeline(bodies: Vec<(&'static str, Value)>, settings: FetchSettings) -> Arc<Fetcher<ScriptedClient>> {
    Arc::new(Fetcher::new(Arc::new(ScriptedClient { bodies }), settings))
}

fn target(url: &str) -> Target {
    Target::parse(url).expect("valid url")
}

#[tokio::test]
async fn profile_loader_decodes_the_first_profile() {
    let fetcher = pipeline(
        vec![(
            "users.get",
            json!({"response": [
                {"id": 17, "first_name": "Lin", "last_name": "Alder", "bdate": "15.03.1990"},
                {"id": 99, "first_name": "Shadow", "last_name": "Copy"}
            ]}),
        )],
        FetchSettings::default(),
    );
    let loader = ProfileLoader::new(fetcher);

    let profile = loader
        .load(&target("https://api.example.com/method/users.get?user_ids=lin"))
        .await
        .expect("profile loads");

    assert_eq!(profile.id, 17);
    assert_eq!(profile.age(2024), Some(34));
    assert!(profile.is_available());
}

#[tokio::test]
async fn profile_loader_surfaces_remote_faults_as_invalid_response() {
    let fetcher = pipeline(
        vec![(
            "users.get",
            json!({"error": {"error_code": 5, "error_msg": "User authorization failed"}}),
        )],
        FetchSettings::default(),
    );
    let loader = ProfileLoader::new(fetcher);

    let error = loader
        .load(&target("https://api.example.com/method/users.get?user_ids=lin"))
        .await
        .expect_err("fault body");

    assert_eq!(error.kind, ApiErrorKind::InvalidResponse);
    assert_eq!(error.message, "User authorization failed");
}

#[tokio::test]
async fn friends_loader_exposes_aggregates_over_the_roster() {
    let fetcher = pipeline(
        vec![(
            "friends.get",
            json!({"response": {"count": 4, "items": [
                {"id": 2, "first_name": "A", "last_name": "A", "bdate": "1.1.1994",
                 "city": {"id": 1, "title": "Paris"}},
                {"id": 3, "first_name": "B", "last_name": "B", "bdate": "2.2.1996",
                 "city": {"id": 1, "title": "Paris"}},
                {"id": 4, "first_name": "C", "last_name": "C",
                 "city": {"id": 2, "title": "Berlin"},
                 "occupation": {"name": "ETH", "type": "university"}},
                {"id": 5, "first_name": "D", "last_name": "D", "bdate": "1990"}
            ]}}),
        )],
        FetchSettings::default(),
    );
    let loader = FriendsLoader::new(fetcher);

    let roster = loader
        .load(&target("https://api.example.com/method/friends.get?user_id=17"))
        .await
        .expect("roster loads");

    assert_eq!(roster.len(), 4);
    assert_eq!(roster.most_common_city(), Some((2, "Paris".to_string())));
    assert_eq!(roster.most_common_university(), Some((1, "ETH".to_string())));
    assert!((roster.average_age(2024) - 29.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn mentions_loader_applies_the_derivations() {
    let fetcher = pipeline(
        vec![(
            "newsfeed.getMentions",
            json!({"response": {"items": [
                {"id": 5, "date": 1_600_000_000i64, "to_id": 100, "from_id": 7,
                 "post_type": "post", "text": "look here"},
                {"id": 6, "date": 1_600_000_000i64, "to_id": 17, "from_id": 7,
                 "post_type": "post", "text": "on the subject's own wall"}
            ]}}),
        )],
        FetchSettings::default(),
    );
    let loader = MentionsLoader::new(fetcher);

    let mentions = loader
        .load(
            &target("https://api.example.com/method/newsfeed.getMentions?owner_id=17"),
            17,
        )
        .await
        .expect("mentions load");

    assert_eq!(mentions.len(), 2);
    assert_eq!(mentions[0].mention_url.as_deref(), Some("wall100_5"));
    assert_eq!(mentions[0].date.to_string(), "2020-09-13 12:26:40");
    assert_eq!(mentions[1].mention_url, None);
}

#[tokio::test]
async fn photos_loader_keeps_the_largest_rendition() {
    let fetcher = pipeline(
        vec![(
            "photos.getAll",
            json!({"response": {"items": [
                {"id": 1, "date": 1, "owner_id": 17, "has_tags": false, "sizes": [
                    {"url": "https://cdn.example.com/1/s.jpg", "width": 75},
                    {"url": "https://cdn.example.com/1/x.jpg", "width": 604}
                ]},
                {"id": 2, "date": 2, "owner_id": 17, "has_tags": true, "sizes": []}
            ]}}),
        )],
        FetchSettings::default(),
    );
    let loader = PhotosLoader::new(fetcher);

    let sizes = loader
        .load(&target("https://api.example.com/method/photos.getAll?owner_id=17"))
        .await
        .expect("photos load");

    assert_eq!(sizes.len(), 1);
    assert_eq!(sizes[0].url, "https://cdn.example.com/1/x.jpg");
}

#[tokio::test]
async fn mutual_batches_stream_chunk_by_chunk() {
    let settings = FetchSettings {
        mutual_chunk_size: 2,
        ..FetchSettings::default()
    };
    let fetcher = pipeline(
        vec![
            (
                "target_uids=2,3",
                json!({"response": [
                    {"id": 2, "common_friends": [8, 9]},
                    {"id": 3, "common_friends": []}
                ]}),
            ),
            (
                "target_uids=4",
                json!({"response": [
                    {"id": 4, "common_friends": [9]}
                ]}),
            ),
            (
                "friends.get?",
                json!({"response": {"items": [
                    {"id": 2, "first_name": "A", "last_name": "A"},
                    {"id": 3, "first_name": "B", "last_name": "B"},
                    {"id": 9, "first_name": "X", "last_name": "X", "is_closed": true},
                    {"id": 4, "first_name": "C", "last_name": "C"}
                ]}}),
            ),
        ],
        settings,
    );

    let roster = FriendsLoader::new(Arc::clone(&fetcher))
        .load(&target("https://api.example.com/method/friends.get?user_id=17"))
        .await
        .expect("roster loads");

    let loader = MutualLoader::new(fetcher);
    let mut batches = loader.batches(&roster, |chunk| {
        let uids: Vec<String> = chunk.iter().map(ToString::to_string).collect();
        target(&format!(
            "https://api.example.com/method/friends.getMutual?source_uid=17&target_uids={}",
            uids.join(",")
        ))
    });

    assert_eq!(batches.remaining(), 2);
    let first = batches.next_batch().await.expect("one batch").expect("ok");
    assert_eq!(first.len(), 2);
    assert_eq!(batches.remaining(), 1);

    let counts = batches.collect_counts().await.expect("drains");
    assert_eq!(counts, vec![(4, 1)]);
}

#[tokio::test]
async fn collect_counts_drains_every_chunk() {
    let settings = FetchSettings {
        mutual_chunk_size: 2,
        ..FetchSettings::default()
    };
    let fetcher = pipeline(
        vec![
            (
                "target_uids=2,3",
                json!({"response": [
                    {"id": 2, "common_friends": [8, 9]},
                    {"id": 3, "common_friends": []}
                ]}),
            ),
            (
                "target_uids=4",
                json!({"response": [{"id": 4, "common_friends": [9]}]}),
            ),
            (
                "friends.get?",
                json!({"response": {"items": [
                    {"id": 2, "first_name": "A", "last_name": "A"},
                    {"id": 3, "first_name": "B", "last_name": "B"},
                    {"id": 4, "first_name": "C", "last_name": "C"}
                ]}}),
            ),
        ],
        settings,
    );

    let roster = FriendsLoader::new(Arc::clone(&fetcher))
        .load(&target("https://api.example.com/method/friends.get?user_id=17"))
        .await
        .expect("roster loads");

    let counts = MutualLoader::new(fetcher)
        .batches(&roster, |chunk| {
            let uids: Vec<String> = chunk.iter().map(ToString::to_string).collect();
            target(&format!(
                "https://api.example.com/method/friends.getMutual?source_uid=17&target_uids={}",
                uids.join(",")
            ))
        })
        .collect_counts()
        .await
        .expect("drains cleanly");

    assert_eq!(counts, vec![(2, 2), (3, 0), (4, 1)]);
}
