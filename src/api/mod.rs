//! API handlers for the Knjižnica REST endpoints

pub mod books;
pub mod health;
pub mod libraries;
pub mod openapi;
