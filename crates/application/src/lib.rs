//! Kindred Application - the fetch-and-validate pipeline.
//!
//! Ports define the transport boundary, the [`Fetcher`] adds the
//! connectivity guard and the bounded-concurrency orchestrator on top of
//! it, and the loader set turns validated records into typed entities.
//! Every public operation is total: it returns either a payload or one
//! classified [`ApiError`](kindred_domain::ApiError), never both and
//! never neither.

pub mod fetcher;
pub mod loaders;
pub mod ports;
pub mod validate;

pub use fetcher::Fetcher;
pub use loaders::{
    FriendsLoader, MentionsLoader, MutualBatches, MutualLoader, PhotosLoader, ProfileLoader,
};
pub use ports::HttpClient;
pub use validate::{decode_record, validate_response};
