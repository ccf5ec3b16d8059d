//! Typed record schemas of the directory views.
//!
//! Each view reads a fixed set of fields, named by its own field enum.

pub mod project;
pub mod post;
pub mod university;
pub mod faculty;

pub use faculty::{FacultyField, FacultyListing};
pub use post::{PostField, PostListing};
pub use project::{ProjectField, ProjectListing};
pub use university::{UniversityField, UniversityListing};
