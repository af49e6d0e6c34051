//! Facet filtering form: grouped, collapsible facet panels with selectable
//! options and the fixed toggle row.

use std::collections::BTreeMap;

use common::facet_catalog::{assemble_facet_groups, FacetGroupPanel, FacetPanel, OptionRenderer, OPTIONAL_FACET_HINT};
use common::facet_selection::{FacetFormState, FacetSelections};
use common::facets::{ActiveFacets, DefaultFacets, FacetOption, ParsedFacets, TOGGLE_REPLICA};
use common::node_status::NodeStatusArray;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdInfo;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowDropDown, MdArrowDropUp};
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};
use dioxus_free_icons::Icon;
use dioxus_primitives::ContentSide;

use crate::components::hover_card::{HoverCard, HoverCardContent, HoverCardTrigger};
use crate::components::node_status::status_tooltip::StatusTooltip;


#[derive(Clone, Copy)]
struct FacetsFormContext {
    form_state: Signal<FacetFormState>,
    node_status: ReadSignal<Option<NodeStatusArray>>,
    on_values_change: Callback<FacetSelections>,
    expanded_facet: Signal<String>,
}

#[component]
pub fn FacetsForm(
    facets_by_group: ReadSignal<Option<BTreeMap<String, Vec<String>>>>,
    default_facets: ReadSignal<DefaultFacets>,
    active_facets: ReadSignal<ActiveFacets>,
    project_facets: ReadSignal<ParsedFacets>,
    node_status: ReadSignal<Option<NodeStatusArray>>,
    on_values_change: Callback<FacetSelections>,
) -> Element {
    let mut form_state =
        use_signal(|| FacetFormState::from_inputs(&active_facets.read(), &default_facets.read()));
    // field state is rebuilt whenever the upstream selections change, so the
    // option counts shown always belong to the latest catalog
    use_effect(move || {
        let active = active_facets.read().clone();
        let defaults = default_facets.read().clone();
        form_state.set(FacetFormState::from_inputs(&active, &defaults));
    });

    let expanded_facet = use_signal(|| "".to_string());
    use_context_provider(|| FacetsFormContext {
        form_state,
        node_status,
        on_values_change,
        expanded_facet,
    });

    let group_panels = use_memo(move || {
        assemble_facet_groups(facets_by_group.read().as_ref(), &project_facets.read())
    });

    rsx! {
        div {
            id: "x-facets-form",
            style: "
                display: flex;
                flex-direction: column;
                padding: 10px;
                height: 100%;
            ",

            DefaultTogglesRow {}

            div {
                style: "
                    flex-grow: 1;
                    overflow-y: auto;
                    margin-top: 12px;
                ",
                for group in group_panels() {
                    FacetGroupSection { key: "{group.group}", group }
                }
            }
        }
    }
}

/// Checkbox row for the fixed toggle set.
#[component]
fn DefaultTogglesRow() -> Element {
    let ctx = use_context::<FacetsFormContext>();
    let mut form_state = ctx.form_state;
    let on_values_change = ctx.on_values_change;
    let is_checked = use_memo(move || form_state.read().default_selected(TOGGLE_REPLICA));

    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                align-items: center;
                padding: 4px;
            ",
            onclick: move |_| {
                let snapshot = form_state.write().toggle_default(TOGGLE_REPLICA);
                on_values_change(snapshot);
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "font-size: 16px; color: rgb(0, 0, 0);",
                "Include Replica"
            }
        }
    }
}

#[component]
fn FacetGroupSection(group: FacetGroupPanel) -> Element {
    rsx! {
        div {
            style: "margin-top: 12px;",
            h4 {
                style: "font-weight: bold; text-transform: capitalize; margin: 4px 0;",
                "{group.group}"
            }
            div {
                style: "border: 1px solid rgba(0,0,0,0.2); border-radius: 6px; background: white;",
                for facet in group.facets {
                    FacetCollapsePanel { key: "{facet.name}", facet }
                }
            }
        }
    }
}

#[component]
fn FacetCollapsePanel(facet: FacetPanel) -> Element {
    let ctx = use_context::<FacetsFormContext>();
    let mut expanded_facet = ctx.expanded_facet;

    let panel_name = facet.name.clone();
    let is_expanded = use_memo(move || expanded_facet.read().clone() == panel_name);
    let toggle_name = facet.name.clone();

    rsx! {
        div {
            style: "border-bottom: 1px solid rgba(0,0,0,0.1);",
            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    width: 100%;
                    border: none;
                    background: none;
                    cursor: pointer;
                    padding: 8px;
                    font-size: 15px;
                ",
                onclick: move |_| {
                    // one panel open at a time
                    if expanded_facet.read().clone() == toggle_name {
                        expanded_facet.set("".to_string());
                    } else {
                        expanded_facet.set(toggle_name.clone());
                    }
                },
                "{facet.label}"
                div { style: "flex: 1 1 auto;" }
                if is_expanded() {
                    Icon { icon: MdArrowDropUp, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.9);" }
                } else {
                    Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.9);" }
                }
            }

            if is_expanded() {
                if facet.optional {
                    OptionalFacetHint {}
                }
                ul {
                    style: "list-style: none; margin: 0; padding: 0 4px 6px 4px;",
                    for option in facet.options.clone() {
                        li {
                            key: "{option.value}",
                            FacetOptionRow {
                                facet_name: facet.name.clone(),
                                renderer: facet.renderer,
                                option,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// "(Optional)" annotation with the guidance tooltip.
#[component]
fn OptionalFacetHint() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 2px 8px;
                color: rgba(0,0,0,0.6);
                font-size: 13px;
            ",
            "(Optional)"
            HoverCard {
                HoverCardTrigger {
                    Icon { icon: MdInfo, style: "width: 16px; height: 16px; color: rgba(0,0,0,0.6);" }
                }
                HoverCardContent {
                    side: ContentSide::Right,
                    div {
                        class: "x-tooltip-body",
                        "{OPTIONAL_FACET_HINT}"
                    }
                }
            }
        }
    }
}

#[component]
fn FacetOptionRow(
    facet_name: ReadSignal<String>,
    renderer: OptionRenderer,
    option: FacetOption,
) -> Element {
    let ctx = use_context::<FacetsFormContext>();
    let mut form_state = ctx.form_state;
    let on_values_change = ctx.on_values_change;
    let node_status = ctx.node_status;

    let checked_value = option.value.clone();
    let is_checked =
        use_memo(move || form_state.read().is_selected(&facet_name.read(), &checked_value));
    let toggled_value = option.value.clone();

    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
            ",
            onclick: move |_| {
                // every change reports the complete selection snapshot
                let snapshot = form_state
                    .write()
                    .toggle_facet_value(&facet_name.read(), &toggled_value);
                on_values_change(snapshot);
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }

            if renderer == OptionRenderer::NodeStatusOverlay {
                StatusTooltip {
                    node_status,
                    data_node: option.value.clone(),
                }
            } else {
                div {
                    style: "font-size: 15px; color: rgb(0, 0, 0); overflow: hidden; text-overflow: ellipsis; white-space: nowrap; min-width: 0;",
                    "{option.value}"
                }
            }

            div { style: "flex: 1 1 auto;" }

            div {
                style: "font-size: 14px; color: rgba(28, 33, 45, 0.7); flex-shrink: 0;",
                "({option.count})"
            }
        }
    }
}
