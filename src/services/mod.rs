//! Service layer: the catalog tool operations and their output shaping.

pub mod catalog_service;
pub mod formatting;
pub mod truncation;

pub use catalog_service::{CatalogError, CatalogService};
pub use truncation::truncate_response;
