pub mod alert_dialog;
pub mod confirm_dialog;
pub mod date_input;
pub mod filter_panel;
pub mod form_input;
pub mod notice;
pub mod stat_card;
pub mod table;
