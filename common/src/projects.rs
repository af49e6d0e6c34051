//! Project catalog models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


/// One searchable project, with its facet grouping for the filter form.
/// Projects without a grouping render no facet panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub pk: String,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub project_url: String,
    #[serde(default)]
    pub facets_by_group: Option<BTreeMap<String, Vec<String>>>,
}

/// Grouping for the named project, if it is known and has one.
pub fn facets_by_group_for<'a>(
    projects: &'a [Project],
    name: &str,
) -> Option<&'a BTreeMap<String, Vec<String>>> {
    projects
        .iter()
        .find(|project| project.name == name)
        .and_then(|project| project.facets_by_group.as_ref())
}
