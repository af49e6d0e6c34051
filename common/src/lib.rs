//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod facets;
pub mod facet_catalog;
pub mod facet_selection;
pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod projects;
pub mod cart;
pub mod users;
pub mod citation;
pub mod node_status;
