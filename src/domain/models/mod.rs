pub mod config;
pub mod credential;
pub mod params;

pub use config::{Config, CredentialsConfig, LoggingConfig, OutputConfig, UpstreamConfig};
pub use credential::{Credential, CredentialSource};
pub use params::{
    GetProductParams, GetStoreParams, Page, ResponseFormat, SearchProductsParams,
    SearchStoresParams,
};
