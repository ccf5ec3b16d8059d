use common::entities::{UniversityListing, university};
use dioxus::prelude::*;

use crate::components::{error_boundary::{DirectoryErrorBoundary, DirectoryLoadError}, list_components::directory_view::DirectoryView};
use crate::data_definitions::directory_data::load_universities;


#[component]
pub fn UniversitiesPage() -> Element {
    let records = use_hook(|| load_universities().map_err(|e| format!("{e:#}")));
    let records = match records {
        Ok(records) => records,
        Err(e) => return rsx! { DirectoryLoadError { directory: "universities", error_txt: e } },
    };
    rsx! {
        Title { "Academic Directory - Universities" }
        DirectoryErrorBoundary {
            directory: "universities",
            DirectoryView::<UniversityListing> {
                title: "Universities",
                records,
                config: university::default_config(),
            }
        }
    }
}
