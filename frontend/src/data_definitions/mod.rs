//! Frontend-only state and helper types.

pub mod url_param;
