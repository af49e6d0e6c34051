//! Shared search query models and helpers.

use serde::{Deserialize, Serialize};

use crate::facet_selection::FacetSelections;
use crate::facets::{ActiveFacets, DefaultFacets};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub project: String,
    pub text_inputs: Vec<String>,
    pub active_facets: ActiveFacets,
    pub default_facets: DefaultFacets,
}

impl SearchQuery {
    pub fn for_project(project: impl Into<String>) -> Self {
        Self { project: project.into(), ..Default::default() }
    }

    /// New query carrying a fresh selection snapshot from the facets form.
    pub fn with_selections(&self, selections: &FacetSelections) -> Self {
        Self {
            project: self.project.clone(),
            text_inputs: self.text_inputs.clone(),
            active_facets: selections.facets.clone(),
            default_facets: DefaultFacets::from_selected(&selections.selected_defaults),
        }
    }

    /// Switching project invalidates the facet selections made against the
    /// previous project's catalog.
    pub fn with_project(&self, project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            text_inputs: self.text_inputs.clone(),
            active_facets: ActiveFacets::new(),
            default_facets: self.default_facets,
        }
    }

    pub fn free_text(&self) -> String {
        self.text_inputs.join(" ")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::TOGGLE_REPLICA;

    #[test]
    fn with_selections_replaces_facets_and_toggles() {
        let query = SearchQuery::for_project("CMIP6");
        let selections = FacetSelections {
            facets: ActiveFacets::from([("mip_era".to_string(), vec!["CMIP6".to_string()])]),
            selected_defaults: vec![TOGGLE_REPLICA.to_string()],
        };
        let updated = query.with_selections(&selections);
        assert_eq!(updated.project, "CMIP6");
        assert_eq!(updated.active_facets["mip_era"], vec!["CMIP6"]);
        assert!(updated.default_facets.replica);
        assert!(!updated.default_facets.latest);
    }

    #[test]
    fn with_project_clears_active_facets() {
        let mut query = SearchQuery::for_project("CMIP6");
        query.active_facets.insert("data_node".to_string(), vec!["aims3.llnl.gov".to_string()]);
        let switched = query.with_project("CMIP5");
        assert_eq!(switched.project, "CMIP5");
        assert!(switched.active_facets.is_empty());
    }
}
