//! Car ratings API
//!
//! Registers cars validated against the NHTSA vehicle catalog, stores ratings
//! for them and lists cars with their average rating.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
