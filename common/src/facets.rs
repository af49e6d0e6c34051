//! Facet catalog models and label derivation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


/// One observed value of a facet together with its result count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub count: u64,
}

impl FacetOption {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self { value: value.into(), count }
    }
}

/// Facet name mapped to its ordered option list. Built once per search
/// fetch and treated as read-only until the next fetch replaces it.
pub type ParsedFacets = BTreeMap<String, Vec<FacetOption>>;

/// Facet name mapped to the values the user currently has selected.
pub type ActiveFacets = BTreeMap<String, Vec<String>>;

pub const TOGGLE_LATEST: &str = "latest";
pub const TOGGLE_REPLICA: &str = "replica";

/// Fixed boolean toggle set, independent of facet selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultFacets {
    pub latest: bool,
    pub replica: bool,
}

impl Default for DefaultFacets {
    fn default() -> Self {
        Self { latest: true, replica: false }
    }
}

impl DefaultFacets {
    /// Toggle identifiers that are currently switched on.
    pub fn selected(&self) -> Vec<String> {
        let mut selected = Vec::new();
        if self.latest {
            selected.push(TOGGLE_LATEST.to_string());
        }
        if self.replica {
            selected.push(TOGGLE_REPLICA.to_string());
        }
        selected
    }

    pub fn from_selected(values: &[String]) -> Self {
        Self {
            latest: values.iter().any(|v| v == TOGGLE_LATEST),
            replica: values.iter().any(|v| v == TOGGLE_REPLICA),
        }
    }
}


const LABEL_ACRONYMS: [&str; 4] = ["Id", "Cf", "Cmor", "Mip"];

/// Converts facet names from snake_case to human readable.
///
/// Fragments whose capitalized form matches a known acronym are upper-cased
/// whole, so `cf_standard_name` becomes "CF Standard Name".
pub fn humanize_facet_name(name: &str) -> String {
    name.split('_')
        .map(|fragment| {
            let mut chars = fragment.chars();
            let capitalized = match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            if LABEL_ACRONYMS.contains(&capitalized.as_str()) {
                capitalized.to_uppercase()
            } else {
                capitalized
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
