//! Infrastructure layer module
//!
//! Adapters to the outside world:
//! - Configuration loading (figment)
//! - Logging setup (tracing)
//! - HTTP document fetching (reqwest)
//! - The credential provider and its acquisition strategies
//! - The Systembolaget catalog API client
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod http;
pub mod logging;
pub mod systembolaget;
