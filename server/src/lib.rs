//! Booking directory for music venues, artists and the shows that connect
//! them, served as plain HTML pages.

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod forms;
pub mod handlers;
pub mod listing;
pub mod models;
pub mod routes;
pub mod utils;
pub mod views;

use db::{Directory, MemoryDirectory};

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn Directory>,
}

impl AppState {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }

    /// State over a fresh, empty in-memory directory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryDirectory::new()))
    }
}
