//! Application state for shared services

use std::sync::Arc;

use crate::domain::store::DocumentStore;
use crate::infrastructure::services::ExpertService;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub expert_service: Arc<ExpertService>,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(expert_service: Arc<ExpertService>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            expert_service,
            store,
        }
    }
}
