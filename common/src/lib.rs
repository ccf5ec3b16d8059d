//! Common library exports shared by every directory view.

extern crate serde;


pub mod list_const;
pub mod record;
pub mod facet;
pub mod filter_state;
pub mod filtered_dataset;
pub mod pagination;
pub mod list_config;
pub mod list_view;
pub mod entities;
