//! Citation endpoint.

use common::citation::Citation;

use crate::http_utils::{api_routes::ApiRoutes, json_fetch::get_json};


/// Citations are fetched through the proxy endpoint, never from the
/// publisher directly, to keep browser-facing origins consistent.
pub async fn fetch_citation(routes: &ApiRoutes, citation_url: &str) -> anyhow::Result<Citation> {
    let url = reqwest::Url::parse_with_params(&routes.citation, [("citurl", citation_url)])?;
    get_json(url.as_str()).await
}
