pub mod actions;
pub mod container;
pub mod models;
pub mod reducer;
