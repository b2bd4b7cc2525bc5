//! Command-line search of GitHub repositories.

use std::fmt::Display;
use std::io;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use gh_query::client::{DEFAULT_API_URL, GithubClient, RepositorySearch};
use gh_query::search::{CLI_PER_PAGE, DEFAULT_PAGE, QueryError, SearchQuery};
use gh_query::table::write_results;

#[derive(Parser, Debug)]
#[command(name = "ghq")]
#[command(version)]
#[command(about = "Search GitHub repositories from the terminal")]
struct Cli {
    /// Name of repository to search
    #[arg(long)]
    name: Option<String>,

    /// Filter results by programming language (e.g. rust, go, cpp)
    #[arg(long)]
    lang: Option<String>,

    /// How many results to return per page
    #[arg(long, default_value_t = CLI_PER_PAGE, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Page of the results to fetch
    #[arg(long, default_value_t = DEFAULT_PAGE, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// How to sort the results: stars, forks, help-wanted-issues, updated
    #[arg(long, default_value = "stars")]
    sort: String,

    /// Restrict the search to the repository name, description, topics or readme
    #[arg(long)]
    scope: Option<String>,

    /// Sort direction: asc, desc
    #[arg(long, default_value = "desc")]
    order: String,

    /// Show the repository URL in the results
    #[arg(long)]
    show_repo_url: bool,

    /// Base URL of the search API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl Cli {
    fn to_query(&self) -> Result<SearchQuery, QueryError> {
        SearchQuery::builder()
            .name(self.name.as_deref().unwrap_or_default())
            .scope(self.scope.as_deref())
            .language(self.lang.as_deref())
            .sort(Some(self.sort.as_str()))
            .order(Some(self.order.as_str()))
            .page(self.page)
            .per_page(self.count)
            .build()
    }
}

fn error_kind(err: &QueryError, name_missing: bool) -> ErrorKind {
    match err {
        QueryError::InvalidInput(_) if name_missing => ErrorKind::MissingRequiredArgument,
        _ => ErrorKind::InvalidValue,
    }
}

/// Exits through clap so validation errors look like argument errors.
fn invalid_arguments(err: QueryError, name_missing: bool) -> ! {
    Cli::command()
        .error(error_kind(&err, name_missing), err)
        .exit()
}

fn fail(err: impl Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let query = cli
        .to_query()
        .unwrap_or_else(|err| invalid_arguments(err, cli.name.is_none()));

    let client = GithubClient::new(&cli.api_url, cli.timeout.map(Duration::from_secs))
        .unwrap_or_else(|err| fail(err));

    let encoded = query.encode();
    log::debug!("searching {}?{encoded}", client.search_url());

    let result = client
        .search_repositories(&encoded)
        .await
        .unwrap_or_else(|err| fail(err));

    if let Err(err) = write_results(&mut io::stdout().lock(), &result, cli.show_repo_url) {
        fail(err);
    }
}
