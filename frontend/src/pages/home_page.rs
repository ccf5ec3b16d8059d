use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdAccountBalance, MdDescription, MdLightbulbOutline};
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::{Icon, IconShape};

use crate::data_definitions::directory_data::{load_faculties, load_posts, load_projects, load_universities};
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    let counts = use_hook(|| {
        [
            load_projects().map(|r| r.len()).ok(),
            load_posts().map(|r| r.len()).ok(),
            load_universities().map(|r| r.len()).ok(),
            load_faculties().map(|r| r.len()).ok(),
        ]
    });
    rsx! {
        Title { "Academic Directory - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                DirectoryCard {
                    to: Route::ProjectsPage {},
                    icon: MdLightbulbOutline,
                    title: "Projects",
                    description: "Student and faculty projects, by purpose, theme, university, country and year.",
                    count: counts[0],
                    background: "linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%)",
                }
                DirectoryCard {
                    to: Route::PostsPage {},
                    icon: MdDescription,
                    title: "Posts",
                    description: "News and articles, by category, tag and author.",
                    count: counts[1],
                    background: "linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%)",
                }
                DirectoryCard {
                    to: Route::UniversitiesPage {},
                    icon: MdAccountBalance,
                    title: "Universities",
                    description: "Partner universities, by country, city, funding and teaching language.",
                    count: counts[2],
                    background: "linear-gradient(135deg, #8A3B20 0%, #D9622B 100%)",
                }
                DirectoryCard {
                    to: Route::FacultiesPage {},
                    icon: MdSchool,
                    title: "Faculties",
                    description: "Faculties and schools, by university, discipline and degree level.",
                    count: counts[3],
                    background: "linear-gradient(135deg, #134E6F 0%, #1F8FBF 100%)",
                }
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to the" }
            span { style: "color:#4F46E5;", "Academic Directory" }
        }
    }
}

#[component]
fn DirectoryCard<I: IconShape + Clone + PartialEq + 'static>(
    to: Route,
    icon: I,
    title: String,
    description: String,
    count: Option<usize>,
    background: String,
) -> Element {
    let count_txt = count.map(|c| format!("{c} entries")).unwrap_or("unavailable".to_string());
    rsx! {
        Link {
            to: to,
            style: "text-decoration: none;",
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 420px;
                    min-height: 200px;
                    border-radius: 22px;
                    padding: 22px 22px 26px 22px;
                    background: {background};
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                div {
                    style: "display:flex; flex-direction: row; align-items: center; gap: 10px; font-size: 30px; font-weight: 500;",
                    Icon { icon: icon, style: "width: 30px; height: 30px;" }
                    "{title}"
                }
                div {
                    style: "font-size: 18px; font-weight: 500; line-height: 1.5; color: rgba(255,255,255,0.92);",
                    "{description}"
                }
                div { style: "flex-grow: 1;" }
                div {
                    style: "padding-top: 7px; border-top: 1px solid white; font-size: 16px; color: rgba(255,255,255,0.9);",
                    "{count_txt}"
                }
            }
        }
    }
}
