pub mod app;
pub mod binding;
pub mod handlers;
pub mod home;
pub mod input;
pub mod todo;
pub mod ui;
