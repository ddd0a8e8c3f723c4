pub mod auth;
pub mod dashboard;
pub mod form;
pub mod projects;
