//! Search input bar: project selection plus free text entry.

use common::search_query::SearchQuery;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use crate::api::projects_api::fetch_projects;
use crate::routes::Route;


#[component]
pub fn SearchInputTopBar(original_query: ReadSignal<SearchQuery>) -> Element {
    let mut modified_search_query = use_signal(|| original_query.read().clone());
    let mut free_text = use_signal(|| original_query.read().free_text());
    // navigation does not reset local signals, so sync them whenever the
    // url-carried query changes
    use_effect(move || {
        let new_query = original_query.read().clone();
        free_text.set(new_query.free_text());
        modified_search_query.set(new_query);
    });

    let query_has_changed = use_memo(move || {
        modified_search_query.read().clone() != original_query.read().clone()
            || free_text.read().trim() != original_query.read().free_text()
    });
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });

    let trigger_search = move |_: ()| {
        let mut query = modified_search_query.read().clone();
        query.text_inputs = free_text
            .read()
            .split_whitespace()
            .map(|term| term.to_string())
            .collect();
        navigator().push(Route::search_page_from_query(query));
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };

    rsx! {
        ProjectSelect { modified_search_query }

        div {
            id: "x-search-input-search-box",
            style: "
                display: flex;
                align-items: center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: {search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search for datasets",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 18px;
                ",
                value: "{free_text}",
                oninput: move |event| {
                    free_text.set(event.value());
                },
                onkeydown: search_onkeydown,
            }
        }
    }
}

#[component]
fn ProjectSelect(modified_search_query: Signal<SearchQuery>) -> Element {
    let projects = use_resource(move || fetch_projects());
    let project_list = use_memo(move || {
        projects
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok().cloned())
            .unwrap_or_default()
    });
    let current = use_memo(move || modified_search_query.read().project.clone());

    rsx! {
        select {
            id: "x-search-project-select",
            style: "
                margin-left: 16px;
                height: 44px;
                border-radius: 8px;
                border: 1px solid rgba(101, 101, 101, 0.8);
                background-color: white;
                color: #111827;
                font-size: 16px;
                padding: 0 8px;
            ",
            onchange: move |event| {
                // a project switch drops the old project's facet selections
                // and runs a fresh search right away
                let updated = modified_search_query.read().with_project(event.value());
                modified_search_query.set(updated.clone());
                navigator().push(Route::search_page_from_query(updated));
            },

            option { value: "", selected: current().is_empty(), "All projects" }
            for project in project_list() {
                option {
                    key: "{project.pk}",
                    value: "{project.name}",
                    selected: current() == project.name,
                    "{project.name}"
                }
            }
        }
    }
}
