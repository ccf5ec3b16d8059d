use common::entities::{FacultyListing, faculty};
use dioxus::prelude::*;

use crate::components::{error_boundary::{DirectoryErrorBoundary, DirectoryLoadError}, list_components::directory_view::DirectoryView};
use crate::data_definitions::directory_data::load_faculties;


#[component]
pub fn FacultiesPage() -> Element {
    let records = use_hook(|| load_faculties().map_err(|e| format!("{e:#}")));
    let records = match records {
        Ok(records) => records,
        Err(e) => return rsx! { DirectoryLoadError { directory: "faculties", error_txt: e } },
    };
    rsx! {
        Title { "Academic Directory - Faculties" }
        DirectoryErrorBoundary {
            directory: "faculties",
            DirectoryView::<FacultyListing> {
                title: "Faculties",
                records,
                config: faculty::default_config(),
            }
        }
    }
}
