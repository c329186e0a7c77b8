pub mod config;
pub mod dcarbon_api;
