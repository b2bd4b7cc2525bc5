//! Decoding of the search response body.

use crate::client::errors::ClientResult;
use crate::domain::repository::SearchResult;

/// Parses a search response body. Missing or `null` fields take their zero value.
pub fn decode_search_result(body: &str) -> ClientResult<SearchResult> {
    Ok(serde_json::from_str(body)?)
}
