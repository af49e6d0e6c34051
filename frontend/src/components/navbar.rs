//! Side navigation bar and layout shell.

use dioxus::prelude::*;
use dioxus_primitives::ContentSide;

use crate::api::cart_api::fetch_cart;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::hover_card::{HoverCard, HoverCardContent, HoverCardTrigger};
use crate::routes::Route;
use common::search_query::SearchQuery;

use dioxus_free_icons::icons::md_action_icons::{MdHome, MdInfo, MdSearch, MdShoppingCart};
use dioxus_free_icons::icons::md_file_icons::MdFolder;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};


/// Cart size shared with every page so add/remove actions update the badge.
#[derive(Clone, Copy)]
pub struct CartCountState {
    pub cart_count: Signal<u64>,
}

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    let mut cart_count = use_signal(|| 0_u64);
    use_context_provider(|| CartCountState { cart_count });

    let cart = use_resource(move || fetch_cart());
    use_effect(move || {
        if let Some(Ok(cart)) = cart.read().as_ref() {
            cart_count.set(cart.items.len() as u64);
        }
    });

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",

                NavbarTopLogo {},
                NavbarTopIconLinks {},

                // empty space
                div {
                    style: "flex-grow: 1;"
                }
                NavbarBottomEntries {},
            },

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            div {
                style: "
                    width: 38px;
                    height: 38px;
                    border-radius: 8px;
                    background-color: #3B82F6;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                ",
                Icon { icon: MdSearch, style: "width: 26px; height: 26px; color: white;" }
            }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
            IconLink { to: Route::search_page_from_query(SearchQuery::default()), icon: MdSearch, label: "Search" }
            CartIconLink {}
        }
    }
}

/// Cart link with the live item count badge.
#[component]
fn CartIconLink() -> Element {
    let cart_count = use_context::<CartCountState>().cart_count;
    rsx! {
        HoverCard {
            HoverCardTrigger {
                Link {
                    to: Route::CartPage {},
                    span {
                        style: "color: white; position: relative; display: inline-block;",
                        Icon { icon: MdShoppingCart, style: "width: 26px; height: 26px;" }
                        if cart_count() > 0 {
                            span {
                                style: "
                                    position: absolute;
                                    top: -6px;
                                    right: -10px;
                                    background-color: #3B82F6;
                                    color: white;
                                    font-size: 11px;
                                    border-radius: 999px;
                                    padding: 1px 5px;
                                ",
                                "{cart_count}"
                            }
                        }
                    }
                }
            },
            HoverCardContent {
                side: ContentSide::Right,
                div { class: "x-tooltip-body", "Cart" }
            }
        }
    }
}

/// Entries kept visible but not yet wired up, plus the disabled login.
#[component]
fn NavbarBottomEntries() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",

            DisabledEntry { icon: MdInfo, label: "Learn (coming soon)" }
            DisabledEntry { icon: MdFolder, label: "Resources (coming soon)" }
            DisabledEntry { icon: MdPerson, label: "Log In (coming soon)" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        HoverCard {
            HoverCardTrigger {
                Link {
                    to: to,
                    span {
                        style: "color: white;",
                        Icon { icon: icon, style: "width: 26px; height: 26px;" }
                    }
                }
            },
            HoverCardContent {
                side: ContentSide::Right,
                div { class: "x-tooltip-body", "{label}" }
            }
        }
    }
}

#[component]
fn DisabledEntry<T: IconShape + Clone + PartialEq + 'static>(icon: T, label: String) -> Element {
    rsx! {
        HoverCard {
            HoverCardTrigger {
                span {
                    style: "color: white; opacity: 0.35; cursor: not-allowed;",
                    Icon { icon: icon, style: "width: 26px; height: 26px;" }
                }
            },
            HoverCardContent {
                side: ContentSide::Right,
                div { class: "x-tooltip-body", "{label}" }
            }
        }
    }
}
