use serde::{Deserialize, Serialize};

use crate::search::{DEFAULT_PAGE, QueryResult, SearchQuery, encode_pairs};

/// Query parameters accepted by the search page.
///
/// Every field is kept as raw text; validation happens when the parameters
/// are turned into a [`SearchQuery`].
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub lang: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub scope: Option<String>,
    pub page: Option<String>,
    /// Present on infinite-scroll requests that only need table rows.
    pub skip_table_header: Option<String>,
}

impl SearchParams {
    /// Requested page; anything that is not a positive number means page one.
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(DEFAULT_PAGE)
    }

    pub fn skip_table_header(&self) -> bool {
        self.skip_table_header
            .as_deref()
            .is_some_and(|flag| !flag.is_empty())
    }

    /// Validates the parameters into a search for `per_page` results.
    pub fn to_query(&self, per_page: u32) -> QueryResult<SearchQuery> {
        SearchQuery::builder()
            .name(self.q.as_deref().unwrap_or_default())
            .scope(self.scope.as_deref())
            .language(self.lang.as_deref())
            .sort(self.sort.as_deref())
            .order(self.order.as_deref())
            .page(self.page())
            .per_page(per_page)
            .build()
    }

    /// Query string for the same search at `page`, as understood by this page.
    pub fn page_link(&self, page: u32) -> String {
        let page = page.to_string();
        let mut pairs = Vec::new();
        for (key, value) in [
            ("q", &self.q),
            ("lang", &self.lang),
            ("sort", &self.sort),
            ("order", &self.order),
            ("scope", &self.scope),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, value));
            }
        }
        pairs.push(("page", page.as_str()));
        encode_pairs(&pairs)
    }
}
