//! HTTP client helpers for the external service APIs.

pub mod api_routes;
pub mod json_fetch;
