use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::projects_page::ProjectsPage;
use crate::pages::posts_page::PostsPage;
use crate::pages::universities_page::UniversitiesPage;
use crate::pages::faculties_page::FacultiesPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/projects")]
    ProjectsPage {},

    #[route("/posts")]
    PostsPage {},

    #[route("/universities")]
    UniversitiesPage {},

    #[route("/faculties")]
    FacultiesPage {},

}
