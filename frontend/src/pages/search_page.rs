use common::search_query::SearchQuery;
use dioxus::prelude::*;

use crate::components::facets::facets_side_panel::FacetsSidePanel;
use crate::components::search_components::search_input_top_bar::SearchInputTopBar;
use crate::components::search_components::search_results_panel::SearchResultsPanel;
use crate::data_definitions::url_param::UrlParam;


fn title_ellipsis(title: String) -> String {
    if title.len() > 20 {
        title[..18].to_string() + "..."
    } else {
        title
    }
}

/// Search page
#[component]
pub fn SearchPage(query: UrlParam<SearchQuery>, page: u64) -> Element {
    let page_title = format!("Dataset Search: {}", title_ellipsis(query.0.free_text()));
    rsx! {
        Title { "{page_title}" }
        SearchPageRootComponent {
            query: query.0.clone(),
            page,
        }
    }
}

#[component]
fn SearchPageRootComponent(query: ReadSignal<SearchQuery>, page: ReadSignal<u64>) -> Element {
    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",

                SearchInputTopBar { original_query: query }
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-search-facets-left-panel",
                    style: "
                        height: 100%;
                        flex-shrink: 0;
                        min-width: 280px;
                        width: 320px;
                    ",
                    FacetsSidePanel { query }
                }
                div {
                    id: "x-search-results-right-panel",
                    style: "
                        height: 100%;
                        flex-grow: 1;
                        min-width: 300px;
                        background-color: #F5F6F8;
                    ",
                    SearchResultsPanel { query, page }
                }
            }
        }
    }
}
