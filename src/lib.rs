pub mod api;
pub mod config;
pub mod models;
pub mod prober;
pub mod protocol;
pub mod render;
