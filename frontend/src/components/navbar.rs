//! Sidebar navigation between the directories.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon, IconShape,
    icons::{
        md_action_icons::{MdAccountBalance, MdDescription, MdHome, MdLightbulbOutline},
        md_social_icons::MdSchool,
    },
};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",
                NavbarIconLinks {}
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px; height: 100%;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
            IconLink { to: Route::ProjectsPage {}, icon: MdLightbulbOutline, label: "Projects" }
            IconLink { to: Route::PostsPage {}, icon: MdDescription, label: "Posts" }
            IconLink { to: Route::UniversitiesPage {}, icon: MdAccountBalance, label: "Universities" }
            IconLink { to: Route::FacultiesPage {}, icon: MdSchool, label: "Faculties" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color:white;",
                title: "{label}",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
