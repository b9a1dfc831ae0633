//! Plain HTTP document fetching used by the key extraction pipeline.

pub mod fetcher;

pub use fetcher::HttpDocumentFetcher;
