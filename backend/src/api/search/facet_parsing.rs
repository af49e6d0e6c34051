//! Conversion of raw facet count arrays into the facet catalog.

use std::collections::BTreeMap;

use common::facets::{FacetOption, ParsedFacets};
use serde_json::Value;


/// The search API returns each facet as one flat `[value, count, value,
/// count, ..]` array. Pair the entries up into option lists, preserving
/// order; a trailing value without a count is dropped.
pub fn parse_facet_fields(facet_fields: &BTreeMap<String, Vec<Value>>) -> ParsedFacets {
    let mut parsed = ParsedFacets::new();
    for (facet, flat_counts) in facet_fields {
        let options = flat_counts
            .chunks_exact(2)
            .map(|pair| FacetOption {
                value: match &pair[0] {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
                count: pair[1].as_u64().unwrap_or(0),
            })
            .collect();
        parsed.insert(facet.clone(), options);
    }
    parsed
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> BTreeMap<String, Vec<Value>> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn flat_arrays_pair_up_in_order() {
        let parsed = parse_facet_fields(&fields(json!({
            "data_node": ["aims3.llnl.gov", 5, "esgf.ceda.ac.uk", 2],
        })));
        assert_eq!(
            parsed["data_node"],
            vec![FacetOption::new("aims3.llnl.gov", 5), FacetOption::new("esgf.ceda.ac.uk", 2)]
        );
    }

    #[test]
    fn trailing_value_without_count_is_dropped() {
        let parsed = parse_facet_fields(&fields(json!({
            "mip_era": ["CMIP6", 9, "CMIP5"],
        })));
        assert_eq!(parsed["mip_era"], vec![FacetOption::new("CMIP6", 9)]);
    }

    #[test]
    fn non_string_values_are_stringified() {
        let parsed = parse_facet_fields(&fields(json!({
            "version": [20200101, 3],
        })));
        assert_eq!(parsed["version"], vec![FacetOption::new("20200101", 3)]);
    }

    #[test]
    fn empty_facet_array_yields_empty_options() {
        let parsed = parse_facet_fields(&fields(json!({ "mip_era": [] })));
        assert!(parsed["mip_era"].is_empty());
    }
}
