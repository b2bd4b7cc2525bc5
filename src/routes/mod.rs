//! HTTP routes and HTML rendering helpers.

use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use tera::{Context, Tera, Value};

use crate::domain::options::{Language, Scope, SortKey, SortOrder};
use crate::dto::search::SearchPageData;
use crate::humanize::humanize_count;

pub mod main;

/// Header set by htmx on requests it issues.
pub const HX_REQUEST: &str = "HX-Request";

/// Which part of the search page a request receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Complete document with the search form.
    Full,
    /// Results markup only, for client-side appending.
    Fragment { include_header: bool },
}

impl RenderMode {
    /// Picks the mode from the htmx request header and the header flag.
    pub fn from_request(req: &HttpRequest, skip_table_header: bool) -> Self {
        let is_htmx = req
            .headers()
            .get(HX_REQUEST)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value == "true");

        if is_htmx {
            RenderMode::Fragment {
                include_header: !skip_table_header,
            }
        } else {
            RenderMode::Full
        }
    }

    fn template(self, has_error: bool) -> &'static str {
        match self {
            RenderMode::Full => "main/index.html",
            RenderMode::Fragment { .. } if has_error => "main/_error.html",
            RenderMode::Fragment {
                include_header: true,
            } => "main/_results.html",
            RenderMode::Fragment {
                include_header: false,
            } => "main/_rows.html",
        }
    }
}

/// Tera filter wrapping [`humanize_count`].
pub fn humanize_count_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let count = value
        .as_u64()
        .ok_or_else(|| tera::Error::msg("humanize_count expects a non-negative integer"))?;
    Ok(Value::String(humanize_count(count)))
}

/// Loads the templates matching `glob` and registers the custom filters.
pub fn build_tera(glob: &str) -> tera::Result<Tera> {
    let mut tera = Tera::new(glob)?;
    tera.register_filter("humanize_count", humanize_count_filter);
    Ok(tera)
}

/// Renders the search page (or a fragment of it) with the given status.
pub fn render_search_page(
    tera: &Tera,
    mode: RenderMode,
    data: &SearchPageData,
    error: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let mut context = match Context::from_serialize(data) {
        Ok(context) => context,
        Err(err) => {
            log::error!("Failed to build template context: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };
    context.insert("error", &error);
    context.insert("language_options", &Language::options());
    context.insert("sort_options", &SortKey::options());
    context.insert("order_options", &SortOrder::options());
    context.insert("scope_options", &Scope::options());

    let template = mode.template(error.is_some());
    match tera.render(template, &context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
