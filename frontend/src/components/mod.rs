pub mod error_boundary;
pub mod list_components;
pub mod navbar;
