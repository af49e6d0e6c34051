//! Client API calls for search endpoints.

use common::search_query::SearchQuery;
use common::search_result::{DatasetSearchResults, FileSearchResults};
use dioxus::prelude::*;




#[server]
pub async fn search_datasets(input: SearchQuery, page: u64) -> Result<DatasetSearchResults, ServerFnError> {
    let routes = backend::http_utils::api_routes::ApiRoutes::from_env();
    let x = backend::api::search::search_datasets(&routes, input, page).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn search_files(dataset_id: String, page: u64) -> Result<FileSearchResults, ServerFnError> {
    let routes = backend::http_utils::api_routes::ApiRoutes::from_env();
    let x = backend::api::search::search_files(&routes, &dataset_id, page).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
