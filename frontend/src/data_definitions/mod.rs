pub mod debounce;
pub mod directory_data;
pub mod listing_card_data;
