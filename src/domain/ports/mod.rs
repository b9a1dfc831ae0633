//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces that infrastructure adapters implement:
//! - DocumentFetcher: plain-text HTTP GET used by the key extraction pipeline
//! - CredentialStrategy: one step of the ordered credential acquisition list

pub mod credential_strategy;
pub mod document_fetcher;

pub use credential_strategy::CredentialStrategy;
pub use document_fetcher::{DocumentFetcher, FetchError};
