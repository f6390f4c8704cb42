//! Connectivity guard and the bounded-concurrency fetch orchestrator.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use kindred_domain::{ApiError, ApiResult, FetchMode, FetchSettings, RawResponse, Target};

use crate::ports::HttpClient;

/// Runs batches of GET requests under a worker cap.
///
/// The fetcher is the only concurrent component of the pipeline:
/// transport calls fan out up to `max_concurrency` at a time and are
/// collected in completion order. Before any batch starts, one
/// reachability probe confirms connectivity; the first failed fetch
/// aborts the batch.
pub struct Fetcher<C: HttpClient> {
    client: Arc<C>,
    settings: FetchSettings,
}

impl<C: HttpClient + 'static> Fetcher<C> {
    /// Creates a fetcher over the given client and settings.
    pub fn new(client: Arc<C>, settings: FetchSettings) -> Self {
        Self { client, settings }
    }

    /// The settings this fetcher runs under.
    #[must_use]
    pub const fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Downloads every target concurrently under the worker cap.
    ///
    /// Results arrive in completion order, not submission order; callers
    /// must not assume positional correspondence with `targets`.
    ///
    /// # Errors
    ///
    /// `Connection` kind when the pre-flight probe fails (no batch
    /// request is issued in that case), or as soon as any individual
    /// fetch fails: the first error aborts the batch and is returned
    /// wrapped as a `Connection` error carrying the original error's
    /// context, with no partial successes alongside it.
    pub async fn download(
        &self,
        targets: &[Target],
        mode: FetchMode,
    ) -> ApiResult<Vec<RawResponse>> {
        self.ensure_online().await?;
        self.run_batch(targets, mode).await
    }

    /// Single-target JSON convenience over the same machinery.
    ///
    /// The batch output is re-wrapped as a JSON array so the validator
    /// sees the same list shape a multi-target batch would produce. Any
    /// failure is logged before it is returned.
    ///
    /// # Errors
    ///
    /// Same classification as [`Fetcher::download`], plus
    /// `InvalidResponseType` if a non-JSON response slips through.
    pub async fn safe_download(&self, target: &Target) -> ApiResult<Value> {
        let outcome = self.json_batch(target).await;
        if let Err(error) = &outcome {
            tracing::warn!(
                kind = %error.kind,
                context = %error.context,
                "download failed: {}",
                error.message
            );
        }
        outcome
    }

    async fn json_batch(&self, target: &Target) -> ApiResult<Value> {
        let batch = self
            .download(std::slice::from_ref(target), FetchMode::Json)
            .await?;
        let mut bodies = Vec::with_capacity(batch.len());
        for raw in batch {
            bodies.push(raw.into_json()?);
        }
        Ok(Value::Array(bodies))
    }

    /// Pre-flight reachability check, run once per batch.
    async fn ensure_online(&self) -> ApiResult<()> {
        let probe = Target::parse(&self.settings.probe_url).map_err(|error| {
            ApiError::connection(
                "no connection to the internet",
                format!("Fetcher::ensure_online, bad probe url: {error}"),
            )
        })?;
        self.client.probe(&probe).await.map_err(|error| {
            ApiError::connection(
                "no connection to the internet",
                format!("Fetcher::ensure_online, {}", error.context),
            )
        })
    }

    async fn run_batch(&self, targets: &[Target], mode: FetchMode) -> ApiResult<Vec<RawResponse>> {
        let cap = self.settings.max_concurrency.max(1);
        let semaphore = Arc::new(Semaphore::new(cap));
        let mut workers: JoinSet<ApiResult<RawResponse>> = JoinSet::new();

        for target in targets {
            let client = Arc::clone(&self.client);
            let semaphore = Arc::clone(&semaphore);
            let options = self.settings.fetch_options();
            let target = target.clone();
            workers.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return Err(ApiError::connection(
                        "worker pool closed",
                        "Fetcher::run_batch, semaphore closed",
                    ));
                };
                client.fetch(&target, mode, &options).await
            });
        }

        let mut collected = Vec::with_capacity(targets.len());
        while let Some(joined) = workers.join_next().await {
            let outcome = joined.map_err(|error| {
                ApiError::connection("fetch worker failed", format!("Fetcher::run_batch, {error}"))
            })?;
            match outcome {
                Ok(response) => collected.push(response),
                Err(error) => {
                    tracing::warn!(kind = %error.kind, "aborting batch after a failed fetch");
                    // Dropping the JoinSet aborts the outstanding workers.
                    return Err(ApiError::connection(
                        format!("Error: {}", error.message),
                        error.context,
                    ));
                }
            }
        }
        Ok(collected)
    }
}
