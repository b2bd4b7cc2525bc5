use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::client::GithubClient;
use crate::dto::search::SearchPageData;
use crate::forms::search::SearchParams;
use crate::models::config::ServerConfig;
use crate::routes::{RenderMode, render_search_page};
use crate::services::{ServiceError, search as search_service};

/// Show the search form and, when a term was given, its results.
#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    client: web::Data<GithubClient>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let params: SearchParams = match serde_html_form::from_str(req.query_string()) {
        Ok(params) => params,
        Err(err) => {
            log::warn!("Rejected malformed query string: {err}");
            return HttpResponse::BadRequest().body("Malformed query string");
        }
    };
    let mode = RenderMode::from_request(&req, params.skip_table_header());

    match search_service::load_search_page(client.get_ref(), &params, server_config.per_page).await
    {
        Ok(data) => render_search_page(&tera, mode, &data, None, StatusCode::OK),
        Err(ServiceError::Query(err)) => {
            let message = err.to_string();
            render_search_page(
                &tera,
                mode,
                &SearchPageData::from_params(&params),
                Some(&message),
                StatusCode::BAD_REQUEST,
            )
        }
        Err(err) => {
            log::error!("Failed to load search page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
