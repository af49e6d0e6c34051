//! Client API calls for the project catalog.

use common::projects::Project;
use dioxus::prelude::*;


#[server]
pub async fn fetch_projects() -> Result<Vec<Project>, ServerFnError> {
    let routes = backend::http_utils::api_routes::ApiRoutes::from_env();
    let x = backend::api::projects::fetch_projects(&routes).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
