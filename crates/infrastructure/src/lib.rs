//! Kindred Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer. The only adapter today is the reqwest-backed
//! HTTP client.

pub mod adapters;

pub use adapters::ReqwestClient;
