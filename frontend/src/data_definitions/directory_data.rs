//! Record collections bundled with the application.

use anyhow::Context;
use common::entities::{FacultyListing, PostListing, ProjectListing, UniversityListing};
use serde::de::DeserializeOwned;

const PROJECTS_JSON: &str = include_str!("../../data/projects.json");
const POSTS_JSON: &str = include_str!("../../data/posts.json");
const UNIVERSITIES_JSON: &str = include_str!("../../data/universities.json");
const FACULTIES_JSON: &str = include_str!("../../data/faculties.json");

fn parse_collection<T: DeserializeOwned>(json: &str, name: &str) -> anyhow::Result<Vec<T>> {
    let records: Vec<T> = serde_json::from_str(json).with_context(|| format!("failed to parse bundled {name}"))?;
    dioxus::logger::tracing::info!("loaded {} {}", records.len(), name);
    Ok(records)
}

pub fn load_projects() -> anyhow::Result<Vec<ProjectListing>> {
    parse_collection(PROJECTS_JSON, "projects")
}

pub fn load_posts() -> anyhow::Result<Vec<PostListing>> {
    parse_collection(POSTS_JSON, "posts")
}

pub fn load_universities() -> anyhow::Result<Vec<UniversityListing>> {
    parse_collection(UNIVERSITIES_JSON, "universities")
}

pub fn load_faculties() -> anyhow::Result<Vec<FacultyListing>> {
    parse_collection(FACULTIES_JSON, "faculties")
}
