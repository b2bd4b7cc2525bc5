//! Service backing the search page.

use crate::client::RepositorySearch;
use crate::dto::search::SearchPageData;
use crate::forms::search::SearchParams;
use crate::pagination::Paginated;
use crate::services::ServiceResult;

/// Runs the search described by `params` and prepares the page data.
///
/// Without a `q` parameter the landing page is returned and nothing is
/// fetched. Invalid parameters fail before the client is called.
pub async fn load_search_page<C>(
    client: &C,
    params: &SearchParams,
    per_page: u32,
) -> ServiceResult<SearchPageData>
where
    C: RepositorySearch,
{
    let mut data = SearchPageData::from_params(params);
    if params.q.is_none() {
        return Ok(data);
    }

    let query = params.to_query(per_page)?;
    let encoded = query.encode();

    let result = client
        .search_repositories(&encoded)
        .await
        .map_err(|err| {
            log::error!("Failed to search repositories: {err}");
            err
        })?;

    log::info!(
        "found {} repositories for search: '{encoded}'",
        result.total_count
    );

    let repositories = Paginated::new(
        result.items,
        query.page(),
        query.per_page(),
        result.total_count,
    );

    if let Some(next_page) = repositories.next_page {
        data.next_page_query = Some(params.page_link(next_page));
        data.last_repository_id = repositories.last().map(|repo| repo.id);
    }

    data.search_query = query.name().to_string();
    data.total_count = result.total_count;
    data.incomplete_results = result.incomplete_results;
    data.repositories = repositories;

    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use reqwest::StatusCode;

    use super::*;
    use crate::client::errors::{ClientError, ClientResult};
    use crate::domain::repository::{Repository, SearchResult};
    use crate::search::{ApiParams, QueryError};
    use crate::services::ServiceError;

    /// Records every query and answers with a canned result.
    struct StubClient {
        total_count: u64,
        items: usize,
        status: Option<StatusCode>,
        queries: RefCell<Vec<String>>,
    }

    impl StubClient {
        fn returning(total_count: u64, items: usize) -> Self {
            Self {
                total_count,
                items,
                status: None,
                queries: RefCell::new(Vec::new()),
            }
        }

        fn failing(status: StatusCode) -> Self {
            Self {
                status: Some(status),
                ..Self::returning(0, 0)
            }
        }

        fn calls(&self) -> usize {
            self.queries.borrow().len()
        }
    }

    impl RepositorySearch for StubClient {
        async fn search_repositories(&self, encoded_query: &str) -> ClientResult<SearchResult> {
            self.queries.borrow_mut().push(encoded_query.to_string());
            if let Some(status) = self.status {
                return Err(ClientError::Upstream {
                    status,
                    query: encoded_query.to_string(),
                });
            }
            Ok(SearchResult {
                total_count: self.total_count,
                incomplete_results: false,
                items: (1..=self.items as u64)
                    .map(|id| Repository {
                        id,
                        name: format!("repo-{id}"),
                        ..Repository::default()
                    })
                    .collect(),
            })
        }
    }

    fn params(q: &str, page: Option<&str>) -> SearchParams {
        SearchParams {
            q: Some(q.to_string()),
            page: page.map(str::to_string),
            ..SearchParams::default()
        }
    }

    #[tokio::test]
    async fn landing_page_does_not_search() {
        let client = StubClient::returning(10, 10);

        let data = load_search_page(&client, &SearchParams::default(), 50)
            .await
            .expect("landing page");

        assert_eq!(client.calls(), 0);
        assert!(!data.has_query);
        assert_eq!(data.selected_sort, "stars");
        assert_eq!(data.selected_order, "desc");
    }

    #[tokio::test]
    async fn empty_name_fails_before_searching() {
        let client = StubClient::returning(10, 10);

        let result = load_search_page(&client, &params("  ", None), 50).await;

        assert!(matches!(
            result,
            Err(ServiceError::Query(QueryError::InvalidInput(_)))
        ));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn unknown_language_fails_before_searching() {
        let client = StubClient::returning(10, 10);
        let mut params = params("x", None);
        params.lang = Some("brainfuck".to_string());

        let result = load_search_page(&client, &params, 50).await;

        assert!(matches!(
            result,
            Err(ServiceError::Query(QueryError::UnknownLanguage(_)))
        ));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn first_page_links_to_the_second() {
        let client = StubClient::returning(120, 50);

        let data = load_search_page(&client, &params("tokio", Some("1")), 50)
            .await
            .expect("search succeeds");

        assert_eq!(data.next_page(), Some(2));
        let next = data.next_page_query.as_deref().expect("next page query");
        assert!(next.contains("page=2"));
        assert!(next.contains("q=tokio"));
        assert_eq!(data.last_repository_id, Some(50));
        assert_eq!(data.repositories.items.len(), 50);
        assert_eq!(data.total_count, 120);
    }

    #[tokio::test]
    async fn last_page_has_no_next_page() {
        let client = StubClient::returning(120, 20);

        let data = load_search_page(&client, &params("tokio", Some("3")), 50)
            .await
            .expect("search succeeds");

        assert_eq!(data.next_page(), None);
        assert_eq!(data.next_page_query, None);
        assert_eq!(data.last_repository_id, None);
    }

    #[tokio::test]
    async fn sends_requested_page_and_size() {
        let client = StubClient::returning(0, 0);

        load_search_page(&client, &params("serde", Some("garbage")), 50)
            .await
            .expect("search succeeds");

        let queries = client.queries.borrow();
        let sent = ApiParams::parse(&queries[0]).expect("encoded query");
        assert_eq!(sent.page, 1);
        assert_eq!(sent.per_page, 50);
        assert_eq!(sent.sort, "stars");
        assert_eq!(sent.q, "serde");
    }

    #[tokio::test]
    async fn upstream_failure_is_propagated() {
        let client = StubClient::failing(StatusCode::FORBIDDEN);

        let result = load_search_page(&client, &params("x", None), 50).await;

        match result {
            Err(ServiceError::Client(ClientError::Upstream { status, .. })) => {
                assert_eq!(status, StatusCode::FORBIDDEN);
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
