//! Client API calls for data node health.

use common::node_status::NodeStatusArray;
use dioxus::prelude::*;


#[server]
pub async fn fetch_node_status() -> Result<NodeStatusArray, ServerFnError> {
    let routes = backend::http_utils::api_routes::ApiRoutes::from_env();
    let x = backend::api::node_status::fetch_node_status(&routes).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
