pub mod api;
pub mod config;
pub mod pdf;
pub mod provider;
pub mod session;
