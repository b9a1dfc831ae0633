pub mod client;
pub mod errors;

pub use client::{Query, SystembolagetClient, SUBSCRIPTION_KEY_HEADER};
pub use errors::ApiError;
