//! Column-aligned listing of search results for the terminal.

use std::io::{self, Write};

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::domain::repository::SearchResult;

pub const NO_RESULTS: &str = "Query did not return any results";

/// Writes one row per repository in result order, or [`NO_RESULTS`] when
/// nothing matched.
pub fn write_results<W: Write>(
    out: &mut W,
    result: &SearchResult,
    show_repo_url: bool,
) -> io::Result<()> {
    if result.total_count == 0 {
        return writeln!(out, "{NO_RESULTS}");
    }

    let mut header = vec![
        "Name".to_string(),
        "Owner".to_string(),
        "Stars".to_string(),
        "Issues".to_string(),
    ];
    if show_repo_url {
        header.push("Repository URL".to_string());
    }

    let mut builder = Builder::default();
    builder.push_record(header);
    for repo in &result.items {
        let mut row = vec![
            repo.name.clone(),
            repo.owner.login.clone(),
            repo.stargazers_count.to_string(),
            repo.open_issues_count.to_string(),
        ];
        if show_repo_url {
            row.push(repo.html_url.clone());
        }
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    writeln!(out, "{table}")
}
