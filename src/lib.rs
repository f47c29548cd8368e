// HTTP server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;

// Document store accessor
pub mod store;
