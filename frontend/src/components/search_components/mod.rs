//! Search page components.

pub mod search_input_top_bar;
pub mod search_results_panel;
pub mod search_result_item_card;
pub mod search_result_list_controls;
