//! Client API calls for dataset citations.

use common::citation::Citation;
use dioxus::prelude::*;


#[server]
pub async fn fetch_citation(citation_url: String) -> Result<Citation, ServerFnError> {
    let routes = backend::http_utils::api_routes::ApiRoutes::from_env();
    let x = backend::api::citation::fetch_citation(&routes, &citation_url).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
