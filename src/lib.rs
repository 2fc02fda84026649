pub mod clients;
pub mod config;
pub mod error;
pub mod filters;
pub mod format;
pub mod models;
pub mod pricing;
pub mod render;
pub mod utils;
