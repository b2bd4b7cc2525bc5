//! HTTP client for the repository search endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;

use crate::client::decode::decode_search_result;
use crate::client::errors::{ClientError, ClientResult};
use crate::domain::repository::SearchResult;

pub mod decode;
pub mod errors;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const SEARCH_PATH: &str = "/search/repositories";
/// Media type requested from the provider.
pub const GITHUB_JSON: &str = "application/vnd.github+json";

const USER_AGENT: &str = concat!("gh-query/", env!("CARGO_PKG_VERSION"));

/// Source of repository search results.
pub trait RepositorySearch {
    /// Runs a single search with an already encoded query string.
    fn search_repositories(
        &self,
        encoded_query: &str,
    ) -> impl Future<Output = ClientResult<SearchResult>>;
}

/// Anonymous client for the GitHub search API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: reqwest::Client,
    search_url: String,
}

impl GithubClient {
    /// Creates a client for `api_url`. Without a timeout reqwest's defaults apply.
    pub fn new(api_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            search_url: format!("{}{SEARCH_PATH}", api_url.trim_end_matches('/')),
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

impl RepositorySearch for GithubClient {
    async fn search_repositories(&self, encoded_query: &str) -> ClientResult<SearchResult> {
        let url = format!("{}?{encoded_query}", self.search_url);

        let response = self.http.get(url).header(ACCEPT, GITHUB_JSON).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Upstream {
                status,
                query: encoded_query.to_string(),
            });
        }

        let body = response.text().await?;
        decode_search_result(&body)
    }
}
