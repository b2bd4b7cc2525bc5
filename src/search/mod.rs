//! Query builder for the repository search endpoint.
//!
//! Raw parameter values are validated against the option tables in
//! [`crate::domain::options`] and combined into the provider's search syntax.
//! See <https://docs.github.com/en/search-github/searching-on-github/searching-for-repositories>.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::options::{Language, Scope, SortKey, SortOrder, UnknownOption};

/// Page requested when none is given.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used by the command-line tool.
pub const CLI_PER_PAGE: u32 = 10;
/// Page size used by the web interface.
pub const WEB_PER_PAGE: u32 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors raised while validating search parameters.
pub enum QueryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown scope '{0}'")]
    UnknownScope(String),

    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("unknown order '{0}'")]
    UnknownOrder(String),

    #[error("unknown sort '{0}'")]
    UnknownSort(String),
}

pub type QueryResult<T> = Result<T, QueryError>;

/// A validated set of search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    name: String,
    scope: Option<Scope>,
    language: Option<Language>,
    sort: SortKey,
    order: SortOrder,
    page: u32,
    per_page: u32,
}

impl SearchQuery {
    pub fn builder() -> SearchQueryBuilder {
        SearchQueryBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Combined search term: the name followed by its qualifiers.
    pub fn search_term(&self) -> String {
        let mut terms = vec![self.name.clone()];
        if let Some(scope) = self.scope {
            terms.push(format!("in:{scope}"));
        }
        if let Some(language) = self.language {
            terms.push(format!("language:{language}"));
        }
        terms.join(" ")
    }

    /// Encodes the query string sent to the provider.
    ///
    /// Parameters are always emitted as `q, sort, order, page, per_page`.
    pub fn encode(&self) -> String {
        let term = self.search_term();
        let page = self.page.to_string();
        let per_page = self.per_page.to_string();
        encode_pairs(&[
            ("q", term.as_str()),
            ("sort", self.sort.as_str()),
            ("order", self.order.as_str()),
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
        ])
    }
}

/// Joins `key=value` pairs, percent-encoding both sides.
pub fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Collects raw parameter values and validates them on [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct SearchQueryBuilder {
    name: String,
    scope: Option<String>,
    language: Option<String>,
    sort: Option<String>,
    order: Option<String>,
    page: u32,
    per_page: u32,
}

impl Default for SearchQueryBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            scope: None,
            language: None,
            sort: None,
            order: None,
            page: DEFAULT_PAGE,
            per_page: CLI_PER_PAGE,
        }
    }
}

impl SearchQueryBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn scope<S: Into<String>>(mut self, scope: Option<S>) -> Self {
        self.scope = scope.map(Into::into);
        self
    }

    pub fn language<S: Into<String>>(mut self, language: Option<S>) -> Self {
        self.language = language.map(Into::into);
        self
    }

    pub fn sort<S: Into<String>>(mut self, sort: Option<S>) -> Self {
        self.sort = sort.map(Into::into);
        self
    }

    pub fn order<S: Into<String>>(mut self, order: Option<S>) -> Self {
        self.order = order.map(Into::into);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Validates every parameter. Nothing is sent anywhere from here.
    pub fn build(self) -> QueryResult<SearchQuery> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(QueryError::InvalidInput(
                "cannot make search for empty repository name".to_string(),
            ));
        }
        if let Some(token) = name.split_whitespace().find(|token| is_qualifier(token)) {
            return Err(QueryError::InvalidInput(format!(
                "repository name cannot contain the qualifier '{token}'"
            )));
        }

        let scope = parse_option::<Scope>(self.scope.as_deref())
            .map_err(|UnknownOption(value)| QueryError::UnknownScope(value))?;
        let language = parse_option::<Language>(self.language.as_deref())
            .map_err(|UnknownOption(value)| QueryError::UnknownLanguage(value))?;
        let order = parse_option::<SortOrder>(self.order.as_deref())
            .map_err(|UnknownOption(value)| QueryError::UnknownOrder(value))?
            .unwrap_or_default();
        let sort = parse_option::<SortKey>(self.sort.as_deref())
            .map_err(|UnknownOption(value)| QueryError::UnknownSort(value))?
            .unwrap_or_default();

        if self.page == 0 {
            return Err(QueryError::InvalidInput(
                "page must be a positive integer".to_string(),
            ));
        }
        if self.per_page == 0 {
            return Err(QueryError::InvalidInput(
                "page size must be a positive integer".to_string(),
            ));
        }

        Ok(SearchQuery {
            name: name.to_string(),
            scope,
            language,
            sort,
            order,
            page: self.page,
            per_page: self.per_page,
        })
    }
}

/// `key:value` tokens are provider qualifiers; only the builder may emit them.
fn is_qualifier(token: &str) -> bool {
    token.split_once(':').is_some_and(|(key, _)| {
        !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

/// Blank values count as "not provided".
fn parse_option<T>(raw: Option<&str>) -> Result<Option<T>, UnknownOption>
where
    T: FromStr<Err = UnknownOption>,
{
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.parse().map(Some),
        None => Ok(None),
    }
}

/// Typed view of an encoded provider query string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiParams {
    pub q: String,
    pub sort: String,
    pub order: String,
    pub page: u32,
    pub per_page: u32,
}

impl ApiParams {
    /// Parses a string produced by [`SearchQuery::encode`].
    pub fn parse(encoded: &str) -> QueryResult<Self> {
        serde_html_form::from_str(encoded)
            .map_err(|err| QueryError::InvalidInput(format!("malformed query string: {err}")))
    }

    /// Value of a `key:value` qualifier in the search term.
    pub fn qualifier(&self, key: &str) -> Option<&str> {
        self.q.split(' ').find_map(|token| {
            token
                .split_once(':')
                .filter(|(k, _)| *k == key)
                .map(|(_, value)| value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(name: &str) -> SearchQueryBuilder {
        SearchQuery::builder().name(name)
    }

    fn count_token(encoded: &str, token: &str) -> usize {
        let params = ApiParams::parse(encoded).expect("encoded query parses");
        params.q.split(' ').filter(|t| *t == token).count()
    }

    #[test]
    fn empty_name_is_invalid_input() {
        assert!(matches!(
            query("").build(),
            Err(QueryError::InvalidInput(_))
        ));
        assert!(matches!(
            query("   ").build(),
            Err(QueryError::InvalidInput(_))
        ));
    }

    #[test]
    fn defaults_apply_when_only_name_is_given() {
        let query = query("tokio").build().expect("valid query");

        assert_eq!(query.name(), "tokio");
        assert_eq!(query.sort(), SortKey::Stars);
        assert_eq!(query.order(), SortOrder::Desc);
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), CLI_PER_PAGE);
        assert_eq!(query.search_term(), "tokio");
    }

    #[test]
    fn encoding_is_deterministic() {
        let query = query("web framework")
            .scope(Some("Description"))
            .language(Some("RUST"))
            .sort(Some("forks"))
            .order(Some("asc"))
            .page(3)
            .per_page(25)
            .build()
            .expect("valid query");

        let expected = concat!(
            "q=web%20framework%20in%3Adescription%20language%3Arust",
            "&sort=forks&order=asc&page=3&per_page=25",
        );
        assert_eq!(query.encode(), expected);
        assert_eq!(query.encode(), query.clone().encode());
    }

    #[test]
    fn every_valid_option_appears_exactly_once() {
        for scope in Scope::ALL {
            let encoded = query("x").scope(Some(scope.as_str())).build().unwrap().encode();
            assert_eq!(count_token(&encoded, &format!("in:{scope}")), 1);
        }
        for language in Language::ALL {
            let encoded = query("x")
                .language(Some(language.as_str().to_uppercase()))
                .build()
                .unwrap()
                .encode();
            assert_eq!(count_token(&encoded, &format!("language:{language}")), 1);
        }
        for sort in SortKey::ALL {
            let encoded = query("x").sort(Some(sort.as_str())).build().unwrap().encode();
            let params = ApiParams::parse(&encoded).unwrap();
            assert_eq!(params.sort, sort.as_str());
            assert_eq!(encoded.matches("sort=").count(), 1);
        }
        for order in SortOrder::ALL {
            let encoded = query("x").order(Some(order.as_str())).build().unwrap().encode();
            assert_eq!(encoded.matches(&format!("order={order}")).count(), 1);
        }
    }

    #[test]
    fn name_scope_is_never_added_implicitly() {
        let encoded = query("serde").build().unwrap().encode();
        assert_eq!(count_token(&encoded, "in:name"), 0);
    }

    #[test]
    fn unknown_values_map_to_their_error() {
        assert_eq!(
            query("x").scope(Some("wiki")).build(),
            Err(QueryError::UnknownScope("wiki".to_string()))
        );
        assert_eq!(
            query("x").language(Some("cobol")).build(),
            Err(QueryError::UnknownLanguage("cobol".to_string()))
        );
        assert_eq!(
            query("x").order(Some("sideways")).build(),
            Err(QueryError::UnknownOrder("sideways".to_string()))
        );
        assert_eq!(
            query("x").sort(Some("watchers")).build(),
            Err(QueryError::UnknownSort("watchers".to_string()))
        );
    }

    #[test]
    fn blank_options_fall_back_to_defaults() {
        let query = query("x")
            .scope(Some(""))
            .language(Some(" "))
            .sort(Some(""))
            .order(Some(""))
            .build()
            .expect("blank options are ignored");

        assert_eq!(query.scope(), None);
        assert_eq!(query.language(), None);
        assert_eq!(query.sort(), SortKey::Stars);
        assert_eq!(query.order(), SortOrder::Desc);
    }

    #[test]
    fn zero_page_or_size_is_rejected() {
        assert!(matches!(
            query("x").page(0).build(),
            Err(QueryError::InvalidInput(_))
        ));
        assert!(matches!(
            query("x").per_page(0).build(),
            Err(QueryError::InvalidInput(_))
        ));
    }

    #[test]
    fn encoded_query_parses_back() {
        let query = query("actix")
            .language(Some("go"))
            .sort(Some("updated"))
            .page(4)
            .per_page(50)
            .build()
            .unwrap();

        let params = ApiParams::parse(&query.encode()).unwrap();

        assert_eq!(params.page, 4);
        assert_eq!(params.per_page, 50);
        assert_eq!(params.sort, "updated");
        assert_eq!(params.order, "desc");
        assert_eq!(params.qualifier("language"), Some("go"));
        assert_eq!(params.qualifier("in"), None);
        assert_eq!(params.q, query.search_term());
    }

    #[test]
    fn qualifiers_in_the_name_are_rejected() {
        assert!(matches!(
            query("x language:rust").language(Some("rust")).build(),
            Err(QueryError::InvalidInput(_))
        ));
        assert!(matches!(
            query("x language:cobol in:wiki").build(),
            Err(QueryError::InvalidInput(_))
        ));
        assert!(matches!(
            query("stars:>100").build(),
            Err(QueryError::InvalidInput(_))
        ));
    }

    #[test]
    fn colons_outside_qualifiers_are_kept() {
        let query = query("c++ :: :tada:").build().expect("no qualifier tokens");

        assert_eq!(query.search_term(), "c++ :: :tada:");
    }
}
