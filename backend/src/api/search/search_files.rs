//! File search endpoint for a single dataset.

use common::search_result::{DatasetFile, FileSearchResults};
use serde::{Deserialize, Serialize};

use crate::api::search::query_params::build_file_search_params;
use crate::http_utils::{api_routes::ApiRoutes, json_fetch::get_json_cached};


#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFileSearchEnvelope {
    response: RawFileSearchResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFileSearchResponse {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<DatasetFile>,
}

pub async fn search_files(
    routes: &ApiRoutes,
    dataset_id: &str,
    page: u64,
) -> anyhow::Result<FileSearchResults> {
    let params = build_file_search_params(page);
    let url = reqwest::Url::parse_with_params(&routes.search_files_url(dataset_id), &params)?;
    let raw: RawFileSearchEnvelope = get_json_cached(url.as_str()).await?;

    Ok(FileSearchResults {
        dataset_id: dataset_id.to_string(),
        num_found: raw.response.num_found,
        files: raw.response.docs,
    })
}
