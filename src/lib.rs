pub mod models;
pub mod quiz;
pub mod services;
pub mod tui;
