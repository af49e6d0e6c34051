//! Dataset search endpoint.

use std::collections::BTreeMap;

use common::search_query::SearchQuery;
use common::search_result::{Dataset, DatasetSearchResults};
use serde::{Deserialize, Serialize};

use crate::api::search::facet_parsing::parse_facet_fields;
use crate::api::search::query_params::build_dataset_search_params;
use crate::http_utils::{api_routes::ApiRoutes, json_fetch::get_json_cached};


#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSearchEnvelope {
    response: RawSearchResponse,
    #[serde(default)]
    facet_counts: RawFacetCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSearchResponse {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct RawFacetCounts {
    #[serde(default)]
    facet_fields: BTreeMap<String, Vec<serde_json::Value>>,
}

pub async fn search_datasets(
    routes: &ApiRoutes,
    query: SearchQuery,
    page: u64,
) -> anyhow::Result<DatasetSearchResults> {
    let params = build_dataset_search_params(&query, page);
    let url = reqwest::Url::parse_with_params(&routes.search_datasets, &params)?;
    let raw: RawSearchEnvelope = get_json_cached(url.as_str()).await?;

    Ok(DatasetSearchResults {
        query,
        page,
        num_found: raw.response.num_found,
        datasets: raw.response.docs,
        facets: parse_facet_fields(&raw.facet_counts.facet_fields),
    })
}
