use common::entities::{ProjectListing, project};
use dioxus::prelude::*;

use crate::components::{error_boundary::{DirectoryErrorBoundary, DirectoryLoadError}, list_components::directory_view::DirectoryView};
use crate::data_definitions::directory_data::load_projects;


#[component]
pub fn ProjectsPage() -> Element {
    let records = use_hook(|| load_projects().map_err(|e| format!("{e:#}")));
    let records = match records {
        Ok(records) => records,
        Err(e) => return rsx! { DirectoryLoadError { directory: "projects", error_txt: e } },
    };
    rsx! {
        Title { "Academic Directory - Projects" }
        DirectoryErrorBoundary {
            directory: "projects",
            DirectoryView::<ProjectListing> {
                title: "Projects",
                records,
                config: project::default_config(),
            }
        }
    }
}
