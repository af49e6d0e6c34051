//! Extra axum routes mounted next to the server-function API.

pub mod download_script;
