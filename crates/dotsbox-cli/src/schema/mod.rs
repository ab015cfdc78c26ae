pub mod chosen_action;
pub mod match_summary;
