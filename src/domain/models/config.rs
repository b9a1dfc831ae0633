use serde::{Deserialize, Serialize};

/// Main configuration structure for the Systembolaget MCP server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Upstream endpoints and HTTP settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// API key acquisition settings
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Tool response shaping
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream endpoints and HTTP settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpstreamConfig {
    /// Base URL of the e-commerce API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Public website the API key is extracted from
    #[serde(default = "default_website_url")]
    pub website_url: String,

    /// Timeout applied to every outbound request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base_url() -> String {
    "https://api-extern.systembolaget.se/sb-api-ecommerce/v1".to_string()
}

fn default_website_url() -> String {
    "https://www.systembolaget.se".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("systembolaget-mcp/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            website_url: default_website_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// API key acquisition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialsConfig {
    /// Environment variable holding an operator-supplied API key
    #[serde(default = "default_override_env")]
    pub override_env: String,

    /// Name of the constant the front-end bundle assigns the key to
    #[serde(default = "default_key_constant")]
    pub key_constant: String,

    /// Expire a cached key after this many seconds (unset: never expire)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl_secs: Option<u64>,
}

fn default_override_env() -> String {
    "SYSTEMBOLAGET_API_KEY".to_string()
}

fn default_key_constant() -> String {
    "NEXT_PUBLIC_API_KEY_APIM".to_string()
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            override_env: default_override_env(),
            key_constant: default_key_constant(),
            cache_ttl_secs: None,
        }
    }
}

/// Tool response shaping
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// Responses longer than this many characters are truncated
    #[serde(default = "default_character_limit")]
    pub character_limit: usize,

    /// Page size used when a tool call omits `limit`
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Largest `limit` a tool call may request
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

const fn default_character_limit() -> usize {
    25_000
}

const fn default_page_size() -> u32 {
    20
}

const fn default_max_page_size() -> u32 {
    100
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            character_limit: default_character_limit(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format for stderr: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling JSON log files (unset: stderr only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
