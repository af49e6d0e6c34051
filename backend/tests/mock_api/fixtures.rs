//! Response fixtures for the mock API, one function per payload.

use serde_json::{json, Value};

#[allow(dead_code)]
pub fn user_auth_fixture() -> Value {
    json!({
        "access_token": "mock-access-token",
        "refresh_token": "mock-refresh-token",
    })
}

#[allow(dead_code)]
pub fn user_info_fixture() -> Value {
    json!({ "pk": "5d7a5684-0b77-4c64-95c4-655dcaa0c1cf" })
}

/// Search record carrying both dataset and file fields, so the same
/// fixture serves the dataset and file search routes.
#[allow(dead_code)]
pub fn search_record_fixture() -> Value {
    json!({
        "id": "CMIP6.CMIP.E3SM-Project.piControl.r1i1p1f1|aims3.llnl.gov",
        "title": "CMIP6.CMIP.E3SM-Project.piControl.r1i1p1f1",
        "data_node": "aims3.llnl.gov",
        "number_of_files": 2,
        "size": 4211245,
        "version": "20200101",
        "access": ["HTTPServer", "OPENDAP"],
        "citation_url": ["http://aims3.llnl.gov/citation_url"],
        "url": ["http://aims3.llnl.gov/thredds/fileServer/f1.nc|application/netcdf|HTTPServer"],
        "checksum": "e05f8ff1b42f84e3ec5c8b05cb71ba7a",
    })
}

#[allow(dead_code)]
pub fn user_cart_fixture() -> Value {
    json!({ "items": [search_record_fixture()] })
}

#[allow(dead_code)]
pub fn projects_fixture() -> Value {
    json!([
        {
            "pk": "1",
            "name": "CMIP6",
            "full_name": "Coupled Model Intercomparison Project Phase 6",
            "project_url": "https://wcrp-cmip.org",
            "facets_by_group": {
                "General": ["mip_era", "data_node"],
                "Labels": ["grid_label"],
            },
        },
        {
            "pk": "2",
            "name": "E3SM",
            "full_name": "Energy Exascale Earth System Model",
            "project_url": "https://e3sm.org",
            "facets_by_group": null,
        },
    ])
}

#[allow(dead_code)]
pub fn esg_search_fixture() -> Value {
    json!({
        "response": {
            "numFound": 1,
            "docs": [search_record_fixture()],
        },
        "facet_counts": {
            "facet_fields": {
                "data_node": ["aims3.llnl.gov", 5, "esgf.ceda.ac.uk", 2],
                "grid_label": ["none", 12, "gn", 4],
                "mip_era": ["CMIP6", 9],
            },
        },
    })
}

#[allow(dead_code)]
pub fn citation_fixture() -> Value {
    json!({
        "identifier": { "id": "10.5072/mock-citation", "identifierType": "DOI" },
        "creators": [{ "creatorName": "Doe, Jane" }, { "creatorName": "Roe, Riley" }],
        "titles": ["Mock dataset citation"],
        "publisher": "Earth System Grid Federation",
        "publicationYear": 2020,
    })
}
