//! Search API operations and response shaping.

mod search_datasets;
pub use search_datasets::search_datasets;

mod search_files;
pub use search_files::search_files;

pub mod facet_parsing;
pub mod query_params;
