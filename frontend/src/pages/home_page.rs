use common::search_query::SearchQuery;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdSearch, MdShoppingCart};
use dioxus_free_icons::Icon;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Dataset Search - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                DatasetSearchCard {}
                CartCard {}
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        h1 {
            style: "font-size: 34px; font-weight: 500; color: #1C212D; margin: 0;",
            "Earth system dataset discovery"
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        p {
            style: "font-size: 18px; color: rgba(28, 33, 45, 0.75); max-width: 640px; margin: 0;",
            "Filter federated climate model output by project, facet and data node, \
             then collect datasets into a cart and download them in one go."
        }
    }
}

#[component]
fn DatasetSearchCard() -> Element {
    rsx! {
        div {
            class: "x-home-card",
            Icon { icon: MdSearch, style: "width: 34px; height: 34px; color: #3B82F6;" }
            h3 {
                style: "font-size: 20px; margin: 10px 0 6px 0;",
                "Search datasets"
            }
            p {
                style: "font-size: 15px; color: rgba(28, 33, 45, 0.7);",
                "Browse the full catalog with faceted filters and per-value result counts."
            }
            Link {
                class: "x-card-button",
                to: Route::search_page_from_query(SearchQuery::default()),
                "Start searching"
            }
        }
    }
}

#[component]
fn CartCard() -> Element {
    rsx! {
        div {
            class: "x-home-card",
            Icon { icon: MdShoppingCart, style: "width: 34px; height: 34px; color: #3B82F6;" }
            h3 {
                style: "font-size: 20px; margin: 10px 0 6px 0;",
                "Your cart"
            }
            p {
                style: "font-size: 15px; color: rgba(28, 33, 45, 0.7);",
                "Review saved datasets and fetch a wget script for everything at once."
            }
            Link {
                class: "x-card-button",
                to: Route::CartPage {},
                "Open cart"
            }
        }
    }
}
