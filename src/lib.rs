pub mod api;
pub mod auth;
pub mod classroom;
pub mod config;
pub mod error;
pub mod gemini;
pub mod gmail;
pub mod models;
pub mod services;
pub mod state;
pub mod upstream;
