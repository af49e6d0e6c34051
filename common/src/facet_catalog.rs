//! Grouping of the facet catalog into renderable panels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::facets::{humanize_facet_name, FacetOption, ParsedFacets};


/// Facet identifier whose options carry the node status overlay.
pub const NODE_STATUS_FACET: &str = "data_node";

/// Guidance text shown next to facets that offer a "none" option.
pub const OPTIONAL_FACET_HINT: &str =
    "Selecting the \"none\" option filters for datasets that do not use this facet.";

/// How a facet's options are drawn. Selected by facet identifier when the
/// panels are assembled, not by inspecting options at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionRenderer {
    Plain,
    NodeStatusOverlay,
}

impl OptionRenderer {
    pub fn for_facet(name: &str) -> Self {
        if name == NODE_STATUS_FACET {
            Self::NodeStatusOverlay
        } else {
            Self::Plain
        }
    }
}

/// One facet ready for display: humanized label, renderer choice and the
/// option list from the current catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetPanel {
    pub name: String,
    pub label: String,
    pub optional: bool,
    pub renderer: OptionRenderer,
    pub options: Vec<FacetOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetGroupPanel {
    pub group: String,
    pub facets: Vec<FacetPanel>,
}

/// Partition the facet catalog into named groups for display.
///
/// Only facets that appear both in a group and in the catalog are rendered.
/// A group entry with no catalog counterpart is skipped, and a catalog facet
/// assigned to no group is left out entirely. With no grouping at all,
/// nothing renders.
pub fn assemble_facet_groups(
    facets_by_group: Option<&BTreeMap<String, Vec<String>>>,
    project_facets: &ParsedFacets,
) -> Vec<FacetGroupPanel> {
    let Some(facets_by_group) = facets_by_group else {
        return Vec::new();
    };
    facets_by_group
        .iter()
        .map(|(group, facet_names)| FacetGroupPanel {
            group: group.clone(),
            facets: facet_names
                .iter()
                .filter_map(|name| {
                    project_facets
                        .get(name)
                        .map(|options| facet_panel(name, options))
                })
                .collect(),
        })
        .collect()
}

fn facet_panel(name: &str, options: &[FacetOption]) -> FacetPanel {
    // a facet whose first option is "none"-like only applies to a subset of
    // datasets, and the form annotates it as optional
    let optional = options
        .first()
        .map(|option| option.value.contains("none"))
        .unwrap_or(false);
    FacetPanel {
        name: name.to_string(),
        label: humanize_facet_name(name),
        optional,
        renderer: OptionRenderer::for_facet(name),
        options: options.to_vec(),
    }
}
