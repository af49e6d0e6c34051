//! Hover overlay showing a data node's health next to its name.

use common::node_status::{lookup_node_status, NodeStatus, NodeStatusArray};
use dioxus::prelude::*;
use dioxus_primitives::ContentSide;

use crate::components::hover_card::{HoverCard, HoverCardContent, HoverCardTrigger};


#[component]
pub fn StatusTooltip(
    node_status: ReadSignal<Option<NodeStatusArray>>,
    data_node: ReadSignal<String>,
) -> Element {
    let status = use_memo(move || {
        node_status
            .read()
            .as_ref()
            .and_then(|statuses| lookup_node_status(statuses, &data_node.read()).cloned())
    });
    let (dot_color, label) = status_legend(&status());

    rsx! {
        HoverCard {
            HoverCardTrigger {
                span {
                    style: "
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background-color: {dot_color};
                        margin-right: 6px;
                        flex-shrink: 0;
                    ",
                }
                div {
                    style: "font-size: 15px; color: rgb(0, 0, 0); overflow: hidden; text-overflow: ellipsis; white-space: nowrap; min-width: 0;",
                    "{data_node}"
                }
            }
            HoverCardContent {
                side: ContentSide::Right,
                div {
                    class: "x-tooltip-body",
                    "{label}"
                }
            }
        }
    }
}

fn status_legend(status: &Option<NodeStatus>) -> (&'static str, &'static str) {
    match status {
        Some(status) if status.is_online => ("#52c41a", "This data node is online."),
        Some(_) => ("#f5222d", "This data node is offline."),
        None => ("#9ca3af", "No status information for this data node."),
    }
}
