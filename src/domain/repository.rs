//! Read-only projections of the provider's search response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Account owning a repository.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Owner {
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar_url: String,
    /// API URL of the account.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// A single repository matched by a search.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Repository {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: Owner,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Primary language label, empty when the provider could not detect one.
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    pub open_issues_count: u64,
    pub stargazers_count: u64,
    pub archived: bool,
    pub disabled: bool,
    pub private: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Decoded body of a repository search.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchResult {
    pub total_count: u64,
    /// Set when the provider timed out before counting every match.
    pub incomplete_results: bool,
    /// Matches in provider order.
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Repository>,
}
