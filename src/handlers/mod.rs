pub mod auth;
pub mod dashboard;
pub mod details;
pub mod earnings;
pub mod pages;
