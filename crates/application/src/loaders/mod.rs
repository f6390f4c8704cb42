//! The loader set: one use case per entity kind.
//!
//! Every loader runs the same fetch → validate → decode → derive
//! pipeline over the [`Fetcher`]; they differ only in the schema they
//! decode and the derivations they apply. Targets always come from the
//! caller's routing layer.

mod friends;
mod mentions;
mod mutual;
mod photos;
mod profile;

pub use friends::FriendsLoader;
pub use mentions::MentionsLoader;
pub use mutual::{MutualBatches, MutualLoader};
pub use photos::PhotosLoader;
pub use profile::ProfileLoader;

use serde::de::DeserializeOwned;

use kindred_domain::{ApiResult, Envelope, Target};

use crate::fetcher::Fetcher;
use crate::ports::HttpClient;
use crate::validate::{decode_record, validate_response};

/// Runs one fetch-through-decode pipeline and folds the wire envelope.
async fn load_payload<C, T>(
    fetcher: &Fetcher<C>,
    target: &Target,
    operation: &str,
) -> ApiResult<T>
where
    C: HttpClient + 'static,
    T: DeserializeOwned,
{
    tracing::debug!(%target, operation, "loading");
    let raw = fetcher.safe_download(target).await?;
    let record = validate_response(&raw)?;
    let envelope: Envelope<T> = decode_record(record)?;
    envelope.into_payload(operation)
}
