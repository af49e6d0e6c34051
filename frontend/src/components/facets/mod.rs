//! Facet filtering components.

pub mod facets_form;
pub mod facets_side_panel;
