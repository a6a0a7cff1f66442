use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod model;
pub mod route;
pub mod schema;
pub mod store;

use store::TodoStore;

// Struct representing the application state
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}
