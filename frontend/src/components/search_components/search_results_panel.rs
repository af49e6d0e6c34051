//! Results panel: paged dataset list fed by the search resource.

use common::search_query::SearchQuery;
use common::search_result::DatasetSearchResults;
use dioxus::prelude::*;

use crate::api::search_api::search_datasets;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::search_components::search_result_item_card::SearchResultItemCard;
use crate::components::search_components::search_result_list_controls::SearchResultListControls;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::routes::Route;


#[derive(Copy, Clone)]
pub struct SearchResultsState {
    pub search_results: ReadSignal<Option<Result<DatasetSearchResults, ServerFnError>>>,
    pub page: ReadSignal<u64>,
    pub set_page: Callback<u64>,
}

#[component]
pub fn SearchResultsPanel(query: ReadSignal<SearchQuery>, page: ReadSignal<u64>) -> Element {
    let mut search_results = use_resource(move || {
        let q = query.read().clone();
        search_datasets(q, *page.read())
    });
    // when the query or page changes, restart the search resource
    use_effect(move || {
        let _ = query.read();
        let _ = page.read();
        search_results.clear();
        search_results.restart();
    });

    let set_page = Callback::new(move |new_page: u64| {
        navigator().push(Route::SearchPage {
            query: query.read().clone().into(),
            page: new_page,
        });
    });

    use_context_provider(move || SearchResultsState {
        search_results: search_results.into(),
        page,
        set_page,
    });

    rsx! {
        div {
            id: "x-search-results-panel",
            style: "
                display: flex;
                flex-direction: column;
                height: 100%;
                width: 100%;
            ",
            SearchResultListControls {}
            DatasetResultsList {}
        }
    }
}

#[component]
fn DatasetResultsList() -> Element {
    let state = use_context::<SearchResultsState>();
    let search_results = state.search_results;

    rsx! {
        div {
            style: "
                flex-grow: 1;
                overflow-y: auto;
                padding: 8px;
            ",
            {match search_results.read().as_ref() {
                None => rsx! {
                    LoadingIndicator {}
                },
                Some(Err(e)) => rsx! {
                    ComponentErrorDisplay { error_txt: format!("{:#?}", e) }
                },
                Some(Ok(results)) => rsx! {
                    if results.datasets.is_empty() {
                        div {
                            style: "color: rgba(0,0,0,0.6); font-size: 18px; padding: 20px;",
                            "No datasets match the current filters."
                        }
                    }
                    for dataset in results.datasets.clone() {
                        SearchResultItemCard { key: "{dataset.id}", dataset }
                    }
                },
            }}
        }
    }
}
