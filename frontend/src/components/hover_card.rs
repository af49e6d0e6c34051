//! Hover card used for tooltips and status overlays.

use dioxus::prelude::*;
use dioxus_primitives::ContentSide;

#[derive(Clone, Copy)]
struct HoverCardState {
    open: Signal<bool>,
}

#[component]
pub fn HoverCard(children: Element) -> Element {
    let open = use_signal(|| false);
    use_context_provider(|| HoverCardState { open });
    rsx! {
        div {
            style: "position: relative; display: inline-block;",
            {children}
        }
    }
}

#[component]
pub fn HoverCardTrigger(children: Element) -> Element {
    let mut open = use_context::<HoverCardState>().open;
    rsx! {
        div {
            style: "display: inline-flex; align-items: center;",
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),
            {children}
        }
    }
}

#[component]
pub fn HoverCardContent(side: Option<ContentSide>, children: Element) -> Element {
    let open = use_context::<HoverCardState>().open;
    let placement = match side.unwrap_or(ContentSide::Top) {
        ContentSide::Right => "left: 100%; top: 0; margin-left: 8px;",
        ContentSide::Left => "right: 100%; top: 0; margin-right: 8px;",
        ContentSide::Bottom => "top: 100%; left: 0; margin-top: 6px;",
        _ => "bottom: 100%; left: 0; margin-bottom: 6px;",
    };
    rsx! {
        if open() {
            div {
                style: "position: absolute; z-index: 1200; {placement}",
                {children}
            }
        }
    }
}
