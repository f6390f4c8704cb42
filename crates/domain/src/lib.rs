//! Kindred Domain - core types for the social-graph fetch pipeline.
//!
//! This crate defines the data model shared by the fetch orchestrator and
//! its callers: request targets, raw transport output, the remote API's
//! wire envelope, decoded entities with their derived-field rules, and the
//! closed error taxonomy. All types here are pure Rust with no I/O
//! dependencies.

pub mod entity;
pub mod error;
pub mod request;
pub mod response;
pub mod settings;
pub mod stats;

pub use entity::{
    chunk_available_ids, City, Mention, MutualEntry, Occupation, Photo, PhotoSize, Profile,
    Timestamp, University,
};
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use request::{FetchMode, FetchOptions, Target};
pub use response::{ApiFault, Envelope, ItemPage, RawResponse};
pub use settings::FetchSettings;
pub use stats::FriendRoster;
