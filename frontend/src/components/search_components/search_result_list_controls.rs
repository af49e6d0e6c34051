//! Result count readout and pagination buttons.

use common::search_const::PAGE_SIZE;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowBack, MdArrowForward};
use dioxus_free_icons::Icon;

use crate::components::search_components::search_results_panel::SearchResultsState;


#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-search-results-title-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                padding: 7px;
                align-items: center;
                height: 52px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112);",
                SearchHitCountString {}
            }
            // empty space
            div {
                style: "flex-grow: 1;"
            }
            PaginationControls {}
        }
    }
}

#[component]
fn SearchHitCountString() -> Element {
    let state = use_context::<SearchResultsState>();
    let search_results = state.search_results;
    let hit_count_txt = use_memo(move || match search_results.read().as_ref() {
        Some(Ok(results)) => format!("{} results", results.num_found),
        Some(Err(_)) => "-".to_string(),
        None => "...".to_string(),
    });
    rsx! { "{hit_count_txt}" }
}

#[component]
fn PaginationControls() -> Element {
    let state = use_context::<SearchResultsState>();
    let page = state.page;
    let set_page = state.set_page;
    let search_results = state.search_results;

    let num_found = use_memo(move || {
        search_results
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .map(|results| results.num_found)
            .unwrap_or(0)
    });
    let can_go_previous = use_memo(move || *page.read() > 0);
    let can_go_next = use_memo(move || (*page.read() + 1) * PAGE_SIZE < num_found());
    let page_display = use_memo(move || *page.read() + 1);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 10px;
            ",

            button {
                class: "x-page-button",
                disabled: !can_go_previous(),
                onclick: move |_| {
                    let current = *page.read();
                    if current > 0 {
                        set_page(current - 1);
                    }
                },
                Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
            }
            div {
                style: "font-size: 15px; color: rgb(75, 87, 112);",
                "Page {page_display}"
            }
            button {
                class: "x-page-button",
                disabled: !can_go_next(),
                onclick: move |_| {
                    set_page(*page.read() + 1);
                },
                Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
            }
        }
    }
}
