//! Contract tests for the projects and citation operations.

mod mock_api;

use backend::api::citation::fetch_citation;
use backend::api::projects::fetch_projects;
use backend::http_utils::api_routes::ApiRoutes;
use common::projects::facets_by_group_for;


#[tokio::test]
async fn projects_carry_their_facet_grouping() {
    let base = mock_api::spawn_mock_api().await.unwrap();
    let routes = ApiRoutes::from_base_urls(&base, &base);

    let projects = fetch_projects(&routes).await.unwrap();
    assert_eq!(projects.len(), 2);

    let grouping = facets_by_group_for(&projects, "CMIP6").unwrap();
    assert_eq!(grouping["General"], vec!["mip_era".to_string(), "data_node".to_string()]);

    // a project without grouping renders no facet panels
    assert!(facets_by_group_for(&projects, "E3SM").is_none());
}

#[tokio::test]
async fn citation_is_fetched_through_the_proxy() {
    let base = mock_api::spawn_mock_api().await.unwrap();
    let routes = ApiRoutes::from_base_urls(&base, &base);

    let citation = fetch_citation(&routes, "http://aims3.llnl.gov/citation_url")
        .await
        .unwrap();
    assert_eq!(citation.identifier.id, "10.5072/mock-citation");
    assert_eq!(citation.publisher, "Earth System Grid Federation");
    assert_eq!(citation.creators_list(), "Doe, Jane; Roe, Riley");
    assert_eq!(citation.publication_year, 2020);
}
