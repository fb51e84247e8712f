pub mod amount;
pub mod api;
pub mod config;
pub mod models;
pub mod services;
