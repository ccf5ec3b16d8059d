pub mod faculties_page;
pub mod home_page;
pub mod posts_page;
pub mod projects_page;
pub mod universities_page;
