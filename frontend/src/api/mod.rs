//! Server function bridges to the backend operations.

pub mod search_api;
pub mod projects_api;
pub mod cart_api;
pub mod citation_api;
pub mod node_status_api;
