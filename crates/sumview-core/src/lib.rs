pub mod api;
pub mod config;
pub mod constants;
pub mod models;
pub mod runtime;
pub mod store;
pub mod tracing_setup;
