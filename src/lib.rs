// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod use_cases;
pub mod utils;

pub use routes::create_router;
