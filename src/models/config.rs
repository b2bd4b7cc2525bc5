//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob of the tera templates, e.g. `templates/**/*.html`.
    pub templates_dir: String,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Base URL of the search provider.
    pub api_url: String,
    /// Results per page on the web interface.
    pub per_page: u32,
    /// Outbound request timeout; reqwest's defaults apply when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}
