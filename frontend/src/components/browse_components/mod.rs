pub mod search_box;
pub mod filter_panel;
pub mod catalog_select;
pub mod listing_card;
pub mod list_controls;
pub mod card_action_buttons;
