use serde::Serialize;

use crate::domain::repository::Repository;
use crate::forms::search::SearchParams;
use crate::pagination::Paginated;

/// Data required to render the search page or one of its fragments.
#[derive(Debug, Default, Serialize)]
pub struct SearchPageData {
    /// Search term echoed back into the form.
    pub search_query: String,
    /// Whether a search was submitted at all.
    pub has_query: bool,
    pub selected_lang: String,
    pub selected_sort: String,
    pub selected_order: String,
    pub selected_scope: String,
    pub total_count: u64,
    pub incomplete_results: bool,
    pub repositories: Paginated<Repository>,
    /// Query string fetching the next page, when there is one.
    pub next_page_query: Option<String>,
    /// Row that triggers loading of the next page.
    pub last_repository_id: Option<u64>,
}

impl SearchPageData {
    /// Page state with the form selections echoed and no results.
    pub fn from_params(params: &SearchParams) -> Self {
        let echo = |value: &Option<String>| {
            value
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase()
        };

        Self {
            search_query: params.q.as_deref().unwrap_or_default().to_string(),
            has_query: params.q.is_some(),
            selected_lang: echo(&params.lang),
            selected_sort: Some(echo(&params.sort))
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "stars".to_string()),
            selected_order: Some(echo(&params.order))
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "desc".to_string()),
            selected_scope: echo(&params.scope),
            ..Self::default()
        }
    }

    pub fn next_page(&self) -> Option<u32> {
        self.repositories.next_page
    }
}
