//! Facets sidebar: fetches the catalog inputs and drives the form.

use common::facet_selection::FacetSelections;
use common::projects::facets_by_group_for;
use common::search_query::SearchQuery;
use dioxus::prelude::*;

use crate::api::node_status_api::fetch_node_status;
use crate::api::projects_api::fetch_projects;
use crate::api::search_api::search_datasets;
use crate::components::facets::facets_form::FacetsForm;
use crate::routes::Route;


#[component]
pub fn FacetsSidePanel(query: ReadSignal<SearchQuery>) -> Element {
    // the facet catalog rides on the search response; page zero is enough
    // because counts do not depend on result paging
    let mut catalog = use_resource(move || {
        let q = query.read().clone();
        search_datasets(q, 0)
    });
    use_effect(move || {
        let _ = query.read();
        catalog.clear();
        catalog.restart();
    });

    let projects = use_resource(move || fetch_projects());
    let node_status_resource = use_resource(move || fetch_node_status());

    let facets_by_group = use_memo(move || {
        let project = query.read().project.clone();
        projects
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .and_then(|projects| facets_by_group_for(projects, &project).cloned())
    });
    let project_facets = use_memo(move || {
        catalog
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .map(|results| results.facets.clone())
            .unwrap_or_default()
    });
    let node_status = use_memo(move || {
        node_status_resource
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok().cloned())
    });
    let active_facets = use_memo(move || query.read().active_facets.clone());
    let default_facets = use_memo(move || query.read().default_facets);

    let on_values_change = Callback::new(move |selections: FacetSelections| {
        let updated = query.read().with_selections(&selections);
        navigator().push(Route::search_page_from_query(updated));
    });

    rsx! {
        div {
            id: "x-facets-side-panel",
            style: "
                height: 100%;
                overflow-y: auto;
                background-color: #ECEEF2;
                border-right: 1px solid rgba(0,0,0,0.15);
            ",
            FacetsForm {
                facets_by_group: facets_by_group(),
                default_facets: default_facets(),
                active_facets: active_facets(),
                project_facets: project_facets(),
                node_status: node_status(),
                on_values_change,
            }
        }
    }
}
