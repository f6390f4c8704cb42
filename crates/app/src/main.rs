//! Kindred - social-graph insight CLI.
//!
//! Fetches a person's profile, friend list and mutual-friend overlaps
//! (plus mentions and photos on request) and prints the aggregate
//! statistics over the friend set.

mod routes;
mod settings;

use std::sync::Arc;

use chrono::{Datelike, Utc};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kindred_application::{
    Fetcher, FriendsLoader, MentionsLoader, MutualLoader, PhotosLoader, ProfileLoader,
};
use kindred_domain::settings::{DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_MS};
use kindred_domain::FetchSettings;
use kindred_infrastructure::ReqwestClient;

use crate::routes::ApiRoutes;
use crate::settings::ApiSettings;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "kindred", version, about = "Social-graph insights for one profile")]
struct Cli {
    /// Username or numeric id of the subject.
    username: String,

    /// Maximum concurrent requests per batch.
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    concurrency: usize,

    /// Per-request timeout in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Delay after each successful response, in seconds.
    #[arg(long, default_value_t = 0.0)]
    delay: f64,

    /// Also list newsfeed mentions.
    #[arg(long)]
    mentions: bool,

    /// Also list photo links.
    #[arg(long)]
    photos: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let routes = ApiRoutes::new(ApiSettings::from_env()?)?;
    let fetch_settings = FetchSettings {
        max_concurrency: cli.concurrency,
        timeout_ms: cli.timeout_ms,
        delay_secs: cli.delay,
        ..FetchSettings::default()
    };
    let client = Arc::new(ReqwestClient::new()?);
    let fetcher = Arc::new(Fetcher::new(client, fetch_settings));

    let profile = ProfileLoader::new(Arc::clone(&fetcher))
        .load(&routes.users_get(&cli.username))
        .await?;
    println!("{} {} (id{})", profile.first_name, profile.last_name, profile.id);

    if !profile.is_available() {
        println!("Profile is deactivated or closed; nothing further to fetch.");
        return Ok(());
    }

    let roster = FriendsLoader::new(Arc::clone(&fetcher))
        .load(&routes.friends_get(profile.id))
        .await?;
    println!("Friends: {}", roster.len());
    if let Some((count, city)) = roster.most_common_city() {
        println!("Most common city: {city} ({count})");
    }
    if let Some((count, university)) = roster.most_common_university() {
        println!("Most common university: {university} ({count})");
    }
    println!("Average age: {:.1}", roster.average_age(Utc::now().year()));

    if cli.mentions {
        let mentions = MentionsLoader::new(Arc::clone(&fetcher))
            .load(&routes.newsfeed_get_mentions(profile.id), profile.id)
            .await?;
        println!("Mentions: {}", mentions.len());
        for mention in &mentions {
            let link = mention.mention_url.as_deref().unwrap_or("-");
            println!("  [{}] {} {}", mention.date, link, mention.text);
        }
    }

    if cli.photos {
        let sizes = PhotosLoader::new(Arc::clone(&fetcher))
            .load(&routes.photos_get_all(profile.id))
            .await?;
        println!("Photos: {}", sizes.len());
        for size in &sizes {
            println!("  {}", size.url);
        }
    }

    let subject = profile.id;
    let counts = MutualLoader::new(fetcher)
        .batches(&roster, |chunk| routes.friends_get_mutual(subject, chunk))
        .collect_counts()
        .await?;
    println!("Mutual friends:");
    for (friend_id, shared) in counts {
        println!("  id{friend_id}: {shared}");
    }

    Ok(())
}
