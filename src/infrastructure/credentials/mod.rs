//! Credentials management infrastructure
//!
//! API key acquisition for the upstream catalog API:
//! - Environment variable override
//! - Extraction from the vendor website's front-end bundle
//! - In-process single-slot cache with at-most-one acquisition in flight

pub mod extraction;
pub mod provider;
pub mod strategies;

pub use extraction::{locate_bundle_reference, resolve_bundle_url, BundleKeyPattern};
pub use provider::CredentialProvider;
pub use strategies::{BundleExtractionStrategy, EnvOverrideStrategy};
