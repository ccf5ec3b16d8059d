pub mod directory_view;
pub mod facet_panel;
pub mod listing_card;
pub mod pagination_controls;
