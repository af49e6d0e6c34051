//! Form field state for facet selection.

use serde::{Deserialize, Serialize};

use crate::facets::{ActiveFacets, DefaultFacets};


/// Complete selection snapshot: every facet's selected values plus the
/// toggle identifiers that are on. Change callbacks always receive one of
/// these, never a diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FacetSelections {
    pub facets: ActiveFacets,
    pub selected_defaults: Vec<String>,
}

/// Field state backing the facets form.
///
/// Seeded from the upstream active/default inputs and thrown away whenever
/// those inputs change, so displayed selections never outlive the catalog
/// they were made against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacetFormState {
    selections: FacetSelections,
}

impl FacetFormState {
    pub fn from_inputs(active: &ActiveFacets, defaults: &DefaultFacets) -> Self {
        Self {
            selections: FacetSelections {
                facets: active.clone(),
                selected_defaults: defaults.selected(),
            },
        }
    }

    /// Replace one facet's selected values and return the full snapshot.
    pub fn set_facet_values(&mut self, facet: &str, values: Vec<String>) -> FacetSelections {
        if values.is_empty() {
            self.selections.facets.remove(facet);
        } else {
            self.selections.facets.insert(facet.to_string(), values);
        }
        self.snapshot()
    }

    /// Flip a single facet value on or off and return the full snapshot.
    pub fn toggle_facet_value(&mut self, facet: &str, value: &str) -> FacetSelections {
        let entry = self.selections.facets.entry(facet.to_string()).or_default();
        if let Some(position) = entry.iter().position(|v| v == value) {
            entry.remove(position);
        } else {
            entry.push(value.to_string());
        }
        if entry.is_empty() {
            self.selections.facets.remove(facet);
        }
        self.snapshot()
    }

    pub fn set_selected_defaults(&mut self, values: Vec<String>) -> FacetSelections {
        self.selections.selected_defaults = values;
        self.snapshot()
    }

    /// Flip one toggle and return the full snapshot.
    pub fn toggle_default(&mut self, toggle: &str) -> FacetSelections {
        let selected = &mut self.selections.selected_defaults;
        if let Some(position) = selected.iter().position(|t| t == toggle) {
            selected.remove(position);
        } else {
            selected.push(toggle.to_string());
        }
        self.snapshot()
    }

    pub fn is_selected(&self, facet: &str, value: &str) -> bool {
        self.selections
            .facets
            .get(facet)
            .map(|values| values.iter().any(|v| v == value))
            .unwrap_or(false)
    }

    pub fn default_selected(&self, toggle: &str) -> bool {
        self.selections.selected_defaults.iter().any(|t| t == toggle)
    }

    pub fn snapshot(&self) -> FacetSelections {
        self.selections.clone()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::{TOGGLE_LATEST, TOGGLE_REPLICA};

    fn seeded_state() -> FacetFormState {
        let active = ActiveFacets::from([
            ("data_node".to_string(), vec!["aims3.llnl.gov".to_string()]),
            ("mip_era".to_string(), vec!["CMIP6".to_string()]),
        ]);
        FacetFormState::from_inputs(&active, &DefaultFacets::default())
    }

    #[test]
    fn changing_one_facet_returns_complete_snapshot() {
        let mut state = seeded_state();
        let snapshot = state.set_facet_values("grid_label", vec!["gn".to_string()]);

        // the untouched facets and toggles ride along with every change
        assert_eq!(snapshot.facets.len(), 3);
        assert_eq!(snapshot.facets["data_node"], vec!["aims3.llnl.gov"]);
        assert_eq!(snapshot.facets["mip_era"], vec!["CMIP6"]);
        assert_eq!(snapshot.selected_defaults, vec![TOGGLE_LATEST.to_string()]);
    }

    #[test]
    fn toggling_a_value_off_removes_the_empty_facet() {
        let mut state = seeded_state();
        let snapshot = state.toggle_facet_value("mip_era", "CMIP6");
        assert!(!snapshot.facets.contains_key("mip_era"));

        let snapshot = state.toggle_facet_value("mip_era", "CMIP5");
        assert_eq!(snapshot.facets["mip_era"], vec!["CMIP5"]);
    }

    #[test]
    fn clearing_values_removes_the_facet_entry() {
        let mut state = seeded_state();
        let snapshot = state.set_facet_values("data_node", Vec::new());
        assert!(!snapshot.facets.contains_key("data_node"));
    }

    #[test]
    fn toggle_defaults_ride_along_with_facet_changes() {
        let mut state = seeded_state();
        state.toggle_default(TOGGLE_REPLICA);
        let snapshot = state.set_facet_values("grid_label", vec!["gn".to_string()]);
        assert!(snapshot.selected_defaults.contains(&TOGGLE_REPLICA.to_string()));
        assert!(snapshot.selected_defaults.contains(&TOGGLE_LATEST.to_string()));
    }

    #[test]
    fn rebuilding_from_inputs_discards_stale_selections() {
        let mut state = seeded_state();
        state.set_facet_values("grid_label", vec!["gn".to_string()]);
        assert!(state.is_selected("grid_label", "gn"));

        // upstream inputs changed: the form state is rebuilt from scratch
        let fresh_active = ActiveFacets::from([("mip_era".to_string(), vec!["CMIP5".to_string()])]);
        state = FacetFormState::from_inputs(&fresh_active, &DefaultFacets::default());
        assert!(!state.is_selected("grid_label", "gn"));
        assert!(!state.is_selected("data_node", "aims3.llnl.gov"));
        assert!(state.is_selected("mip_era", "CMIP5"));
    }

    #[test]
    fn selected_lookup_helpers() {
        let mut state = FacetFormState::default();
        assert!(!state.is_selected("data_node", "x"));
        assert!(!state.default_selected(TOGGLE_LATEST));

        state.set_selected_defaults(vec![TOGGLE_LATEST.to_string()]);
        assert!(state.default_selected(TOGGLE_LATEST));
        assert!(!state.default_selected(TOGGLE_REPLICA));
    }
}
