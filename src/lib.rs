//! Knjižnica Library Catalogue Management System
//!
//! A Rust implementation of the Knjižnica catalogue backend, providing a
//! REST JSON API over books, libraries and the pairings linking them, plus
//! a typed HTTP client for frontend consumers.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
