pub mod app;
pub mod handlers;
pub mod search;
pub mod ui;
