//! Projects endpoint.

use common::projects::Project;
use serde::{Deserialize, Serialize};

use crate::http_utils::{api_routes::ApiRoutes, json_fetch::get_json};


#[derive(Debug, Serialize, Deserialize)]
struct RawProjectsResponse {
    results: Vec<Project>,
}

pub async fn fetch_projects(routes: &ApiRoutes) -> anyhow::Result<Vec<Project>> {
    let response: RawProjectsResponse = get_json(&routes.projects).await?;
    Ok(response.results)
}
