//! Search tuning constants shared by both sides.

/// Results per page requested from the search API.
pub const PAGE_SIZE: u64 = 10;

/// Files listed per dataset expansion.
pub const FILES_PAGE_SIZE: u64 = 25;
