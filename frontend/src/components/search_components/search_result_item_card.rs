//! One dataset record in the results list.

use common::search_result::{format_bytes, Dataset};
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdShoppingCart;
use dioxus_free_icons::icons::md_editor_icons::MdInsertLink;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use dioxus_free_icons::Icon;

use crate::api::cart_api::{fetch_cart, save_cart};
use crate::api::citation_api::fetch_citation;
use crate::api::search_api::search_files;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::navbar::CartCountState;
use crate::components::suspend_boundary::LoadingIndicator;


#[component]
pub fn SearchResultItemCard(dataset: Dataset) -> Element {
    let mut show_files = use_signal(|| false);
    let mut show_citation = use_signal(|| false);
    let citation_link = dataset.citation_link().map(str::to_string);
    let size_display = format_bytes(dataset.size);

    rsx! {
        div {
            class: "x-result-card",
            style: "
                background: white;
                border: 1px solid rgba(0,0,0,0.15);
                border-radius: 8px;
                margin: 8px 4px;
                padding: 12px;
            ",

            h3 {
                style: "font-size: 18px; font-weight: 500; margin: 0 0 6px 0; overflow-wrap: anywhere;",
                "{dataset.title}"
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 14px;
                    font-size: 14px;
                    color: rgba(28, 33, 45, 0.75);
                ",
                div { "Node: {dataset.data_node}" }
                div { "Version: {dataset.version}" }
                div { "Files: {dataset.number_of_files}" }
                div { "Size: {size_display}" }
                for service in dataset.access.clone() {
                    div {
                        style: "border: 1px solid rgba(28, 33, 45, 0.3); border-radius: 999px; padding: 0 8px;",
                        "{service}"
                    }
                }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 8px;
                    margin-top: 10px;
                    align-items: center;
                ",
                AddToCartButton { dataset: dataset.clone() }
                CopyLinkButton {}
                button {
                    class: "x-card-button",
                    onclick: move |_| {
                        let expanded = *show_files.read();
                        show_files.set(!expanded);
                    },
                    Icon { icon: MdFileDownload, style: "width: 18px; height: 18px;" }
                    "Files"
                }
                if citation_link.is_some() {
                    button {
                        class: "x-card-button",
                        onclick: move |_| {
                            let expanded = *show_citation.read();
                            show_citation.set(!expanded);
                        },
                        "Citation"
                    }
                }
            }

            if show_files() {
                FilesSection { dataset_id: dataset.id.clone() }
            }
            if show_citation() && citation_link.is_some() {
                CitationSection { citation_url: citation_link.clone().unwrap_or_default() }
            }
        }
    }
}

#[component]
fn AddToCartButton(dataset: Dataset) -> Element {
    let mut cart_count = use_context::<CartCountState>().cart_count;

    let do_add_to_cart = use_callback(move |_: ()| {
        let dataset = dataset.clone();
        spawn(async move {
            let result = async move {
                let mut cart = fetch_cart().await?;
                cart.add(dataset);
                save_cart(cart.items).await
            }
            .await;

            let toast_api = dioxus_primitives::toast::consume_toast();
            match result {
                Ok(cart) => {
                    cart_count.set(cart.items.len() as u64);
                    toast_api.info(
                        "Added to cart.".to_string(),
                        dioxus_primitives::toast::ToastOptions::new()
                            .description("The dataset has been saved to your cart.")
                            .duration(std::time::Duration::from_secs(10))
                            .permanent(false),
                    );
                }
                Err(e) => {
                    dioxus::logger::tracing::warn!("Cart update failed: {}", e);
                    toast_api.info(
                        "Could not update the cart.".to_string(),
                        dioxus_primitives::toast::ToastOptions::new()
                            .description("The cart service did not accept the change.")
                            .duration(std::time::Duration::from_secs(10))
                            .permanent(false),
                    );
                }
            }
        });
    });

    rsx! {
        button {
            class: "x-card-button",
            onclick: move |_| {
                do_add_to_cart(());
            },
            Icon { icon: MdShoppingCart, style: "width: 18px; height: 18px;" }
            "Add to cart"
        }
    }
}

#[component]
fn CopyLinkButton() -> Element {
    let do_copy_link = use_callback(move |_: ()| {
        let url = web_sys::window().unwrap().location().href().unwrap();
        let _r = web_sys::window().unwrap().navigator().clipboard().write_text(&url);
        dioxus::logger::tracing::info!("Link copied to clipboard: {:#?}", url);

        let toast_api = dioxus_primitives::toast::consume_toast();
        toast_api.info(
            "Link copied to clipboard.".to_string(),
            dioxus_primitives::toast::ToastOptions::new()
                .description("The search link has been copied to your clipboard.")
                .duration(std::time::Duration::from_secs(10))
                .permanent(false),
        );
    });

    rsx! {
        button {
            class: "x-card-button",
            onclick: move |_| {
                do_copy_link(());
            },
            Icon { icon: MdInsertLink, style: "width: 18px; height: 18px;" }
            "Copy link"
        }
    }
}

#[component]
fn FilesSection(dataset_id: ReadSignal<String>) -> Element {
    let files = use_resource(move || search_files(dataset_id.read().clone(), 0));

    rsx! {
        div {
            style: "margin-top: 10px; border-top: 1px solid rgba(0,0,0,0.1); padding-top: 8px;",
            {match files.read().as_ref() {
                None => rsx! {
                    LoadingIndicator {}
                },
                Some(Err(e)) => rsx! {
                    ComponentErrorDisplay { error_txt: format!("{:#?}", e) }
                },
                Some(Ok(results)) => rsx! {
                    div {
                        style: "font-size: 14px; color: rgba(28, 33, 45, 0.75); margin-bottom: 4px;",
                        "{results.num_found} files"
                    }
                    for file in results.files.clone() {
                        div {
                            key: "{file.id}",
                            style: "
                                display: flex;
                                flex-direction: row;
                                gap: 12px;
                                font-size: 14px;
                                padding: 3px 0;
                                align-items: center;
                            ",
                            div {
                                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap; min-width: 0;",
                                "{file.title}"
                            }
                            div { style: "flex: 1 1 auto;" }
                            div { {format_bytes(file.size)} }
                            {file.http_download_url().map(|download_url| rsx! {
                                a {
                                    class: "x-card-button",
                                    href: "{download_url}",
                                    target: "_blank",
                                    "Download"
                                }
                            })}
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn CitationSection(citation_url: ReadSignal<String>) -> Element {
    let citation = use_resource(move || fetch_citation(citation_url.read().clone()));

    rsx! {
        div {
            style: "margin-top: 10px; border-top: 1px solid rgba(0,0,0,0.1); padding-top: 8px; font-size: 14px;",
            {match citation.read().as_ref() {
                None => rsx! {
                    LoadingIndicator {}
                },
                Some(Err(e)) => rsx! {
                    ComponentErrorDisplay { error_txt: format!("{:#?}", e) }
                },
                Some(Ok(citation)) => {
                    let byline = format!("{} ({})", citation.creators_list(), citation.publication_year);
                    let source_line = format!(
                        "{} - {}: {}",
                        citation.publisher, citation.identifier.identifier_type, citation.identifier.id
                    );
                    rsx! {
                        div {
                            style: "font-weight: 500;",
                            "{byline}"
                        }
                        for title in citation.titles.clone() {
                            div { "{title}" }
                        }
                        div {
                            style: "color: rgba(28, 33, 45, 0.75);",
                            "{source_line}"
                        }
                    }
                }
            }}
        }
    }
}
