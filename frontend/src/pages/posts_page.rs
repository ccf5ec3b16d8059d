use common::entities::{PostListing, post};
use dioxus::prelude::*;

use crate::components::{error_boundary::{DirectoryErrorBoundary, DirectoryLoadError}, list_components::directory_view::DirectoryView};
use crate::data_definitions::directory_data::load_posts;


#[component]
pub fn PostsPage() -> Element {
    let records = use_hook(|| load_posts().map_err(|e| format!("{e:#}")));
    let records = match records {
        Ok(records) => records,
        Err(e) => return rsx! { DirectoryLoadError { directory: "posts", error_txt: e } },
    };
    rsx! {
        Title { "Academic Directory - Posts" }
        DirectoryErrorBoundary {
            directory: "posts",
            DirectoryView::<PostListing> {
                title: "Posts",
                records,
                config: post::default_config(),
            }
        }
    }
}
