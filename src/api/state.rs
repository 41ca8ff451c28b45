//! Application state for Axum handlers.

use std::sync::Arc;

use crate::service::{QuestionNotifier, QuestionService};
use crate::storage::traits::QuestionStorage;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend.
    pub storage: Arc<dyn QuestionStorage>,
    /// Question service.
    pub question_service: Arc<QuestionService>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(storage: Arc<dyn QuestionStorage>, notifier: Arc<dyn QuestionNotifier>) -> Self {
        let question_service = Arc::new(QuestionService::new(Arc::clone(&storage), notifier));

        Self {
            storage,
            question_service,
        }
    }
}
