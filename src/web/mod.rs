mod error;
pub mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::components::OfficeHoursValidator;
use handlers::{
    health_handler, office_hours_handler, schedule_interview_handler, validate_slot_handler,
};

#[derive(Clone)]
pub struct AppState {
    /// Shared validator for the configured office hours
    pub validator: Arc<OfficeHoursValidator>,
}

impl AppState {
    pub fn new(validator: OfficeHoursValidator) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }
}

/// Build the router for the scheduling endpoints
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/office-hours", get(office_hours_handler))
        .route("/api/interviews/validate", post(validate_slot_handler))
        .route("/api/interviews", post(schedule_interview_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
