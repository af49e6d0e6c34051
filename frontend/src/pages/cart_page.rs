use common::cart::UserCart;
use common::search_result::{format_bytes, Dataset};
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdDelete;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use dioxus_free_icons::Icon;

use crate::api::cart_api::{fetch_cart, save_cart};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::navbar::CartCountState;
use crate::components::suspend_boundary::LoadingIndicator;


/// Cart page
#[component]
pub fn CartPage() -> Element {
    rsx! {
        Title { "Dataset Search - Cart" }
        CartPageRootComponent {}
    }
}

#[component]
fn CartPageRootComponent() -> Element {
    let mut cart = use_resource(move || fetch_cart());
    let mut cart_count = use_context::<CartCountState>().cart_count;

    let do_remove = use_callback(move |dataset_id: String| {
        let current = cart
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .cloned();
        let Some(mut current) = current else { return };
        spawn(async move {
            current.remove(&dataset_id);
            match save_cart(current.items).await {
                Ok(updated) => {
                    cart_count.set(updated.items.len() as u64);
                    cart.restart();
                }
                Err(e) => {
                    dioxus::logger::tracing::warn!("Cart update failed: {}", e);
                }
            }
        });
    });

    rsx! {
        div {
            id: "x-cart-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            h1 {
                style: "font-size: 28px; font-weight: 500; color: #1C212D; margin: 0;",
                "Your cart"
            }

            {match cart.read().as_ref() {
                None => rsx! {
                    LoadingIndicator {}
                },
                Some(Err(e)) => rsx! {
                    ComponentErrorDisplay { error_txt: format!("{:#?}", e) }
                },
                Some(Ok(cart_data)) => rsx! {
                    if cart_data.is_empty() {
                        div {
                            style: "color: rgba(28, 33, 45, 0.7); font-size: 18px;",
                            "Your cart is empty. Add datasets from the search results."
                        }
                    } else {
                        WgetDownloadLink { cart: cart_data.clone() }
                        div {
                            for dataset in cart_data.items.clone() {
                                CartItemRow {
                                    key: "{dataset.id}",
                                    dataset,
                                    on_remove: do_remove,
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

/// Checkout step: a wget script covering every carted dataset.
#[component]
fn WgetDownloadLink(cart: UserCart) -> Element {
    let dataset_ids = cart
        .items
        .iter()
        .map(|dataset| encode_query_component(&dataset.id))
        .collect::<Vec<_>>()
        .join(",");

    rsx! {
        a {
            class: "x-card-button",
            style: "width: fit-content;",
            href: "/_download_wget?dataset_ids={dataset_ids}",
            Icon { icon: MdFileDownload, style: "width: 18px; height: 18px;" }
            "Download wget script"
        }
    }
}

#[component]
fn CartItemRow(dataset: Dataset, on_remove: Callback<String>) -> Element {
    let dataset_id = dataset.id.clone();
    let meta_line = format!(
        "{} - {} files - {}",
        dataset.data_node,
        dataset.number_of_files,
        format_bytes(dataset.size)
    );
    rsx! {
        div {
            class: "x-result-card",
            style: "
                background: white;
                border: 1px solid rgba(0,0,0,0.15);
                border-radius: 8px;
                margin: 6px 0;
                padding: 12px;
                display: flex;
                flex-direction: row;
                gap: 14px;
                align-items: center;
            ",
            div {
                style: "min-width: 0; overflow: hidden;",
                div {
                    style: "font-size: 16px; font-weight: 500; overflow-wrap: anywhere;",
                    "{dataset.title}"
                }
                div {
                    style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);",
                    "{meta_line}"
                }
            }
            div { style: "flex: 1 1 auto;" }
            button {
                class: "x-card-button",
                onclick: move |_| {
                    on_remove(dataset_id.clone());
                },
                Icon { icon: MdDelete, style: "width: 18px; height: 18px;" }
                "Remove"
            }
        }
    }
}

/// Dataset ids are dot separated with a "|node" suffix; escape the few
/// characters that cannot ride in a query string.
fn encode_query_component(s: &str) -> String {
    s.replace('%', "%25")
        .replace('&', "%26")
        .replace('#', "%23")
        .replace('|', "%7C")
        .replace(' ', "%20")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_ids_are_query_safe() {
        assert_eq!(
            encode_query_component("CMIP6.CMIP.piControl|aims3.llnl.gov"),
            "CMIP6.CMIP.piControl%7Caims3.llnl.gov"
        );
        assert_eq!(encode_query_component("a%b&c"), "a%25b%26c");
    }
}
