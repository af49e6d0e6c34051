//! Request parameter builders for the search endpoints.

use common::search_const::{FILES_PAGE_SIZE, PAGE_SIZE};
use common::search_query::SearchQuery;


/// Query parameters for a paged dataset search. One parameter per active
/// facet, values comma-joined; an empty free-text query becomes the
/// match-all `*`.
pub fn build_dataset_search_params(query: &SearchQuery, page: u64) -> Vec<(String, String)> {
    let mut params = vec![
        ("format".to_string(), "application/solr+json".to_string()),
        ("type".to_string(), "Dataset".to_string()),
        ("offset".to_string(), (page * PAGE_SIZE).to_string()),
        ("limit".to_string(), PAGE_SIZE.to_string()),
        ("latest".to_string(), query.default_facets.latest.to_string()),
        ("replica".to_string(), query.default_facets.replica.to_string()),
    ];
    if !query.project.is_empty() {
        params.push(("project".to_string(), query.project.clone()));
    }
    let free_text = query.free_text();
    let free_text = free_text.trim();
    params.push((
        "query".to_string(),
        if free_text.is_empty() { "*".to_string() } else { free_text.to_string() },
    ));
    for (facet, values) in query.active_facets.iter() {
        if values.is_empty() {
            continue;
        }
        params.push((facet.clone(), values.join(",")));
    }
    params
}

pub fn build_file_search_params(page: u64) -> Vec<(String, String)> {
    vec![
        ("format".to_string(), "application/solr+json".to_string()),
        ("type".to_string(), "File".to_string()),
        ("offset".to_string(), (page * FILES_PAGE_SIZE).to_string()),
        ("limit".to_string(), FILES_PAGE_SIZE.to_string()),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::facets::ActiveFacets;

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn empty_free_text_becomes_match_all() {
        let params = build_dataset_search_params(&SearchQuery::for_project("CMIP6"), 0);
        assert_eq!(param(&params, "query"), Some("*"));
        assert_eq!(param(&params, "project"), Some("CMIP6"));
    }

    #[test]
    fn free_text_terms_are_joined() {
        let mut query = SearchQuery::for_project("CMIP6");
        query.text_inputs = vec!["surface".to_string(), "temperature".to_string()];
        let params = build_dataset_search_params(&query, 0);
        assert_eq!(param(&params, "query"), Some("surface temperature"));
    }

    #[test]
    fn one_parameter_per_active_facet_with_comma_joined_values() {
        let mut query = SearchQuery::default();
        query.active_facets = ActiveFacets::from([
            ("data_node".to_string(), vec!["a.gov".to_string(), "b.org".to_string()]),
            ("empty_facet".to_string(), Vec::new()),
            ("mip_era".to_string(), vec!["CMIP6".to_string()]),
        ]);
        let params = build_dataset_search_params(&query, 0);
        assert_eq!(param(&params, "data_node"), Some("a.gov,b.org"));
        assert_eq!(param(&params, "mip_era"), Some("CMIP6"));
        assert_eq!(param(&params, "empty_facet"), None);
    }

    #[test]
    fn pagination_offsets_scale_with_page_size() {
        let params = build_dataset_search_params(&SearchQuery::default(), 3);
        assert_eq!(param(&params, "offset"), Some("30"));
        assert_eq!(param(&params, "limit"), Some("10"));
    }

    #[test]
    fn toggles_are_always_sent() {
        let params = build_dataset_search_params(&SearchQuery::default(), 0);
        assert_eq!(param(&params, "latest"), Some("true"));
        assert_eq!(param(&params, "replica"), Some("false"));
    }
}
