pub mod config;
pub mod errors;
pub mod models;
pub mod provider;
pub mod render;
pub mod routes;
pub mod search;
pub mod server;
pub mod state;
