use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::error::ApiError;
use super::AppState;
use crate::components::office_hours::{ScheduledSlot, ValidationVerdict};

/// Slot fields submitted by the scheduling form
#[derive(Debug, Clone, Deserialize)]
pub struct SlotRequest {
    /// Date in YYYY-MM-DD format
    pub date: String,
    /// Start time, 24-hour or with an AM/PM marker
    pub time: String,
    /// Length of the interview in minutes
    pub duration: u32,
}

/// Interview booking request
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleInterviewRequest {
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub candidate: Option<String>,
    pub interviewer: Option<String>,
}

/// Response for an accepted booking
#[derive(Debug, Serialize)]
pub struct ScheduledInterview {
    pub message: String,
    pub slot: ScheduledSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer: Option<String>,
}

/// Longest interview the form accepts, one full day
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

fn check_duration(duration: u32) -> Result<(), ApiError> {
    if duration == 0 {
        return Err(ApiError::BadRequest(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    if duration > MAX_DURATION_MINUTES {
        return Err(ApiError::BadRequest(format!(
            "duration must be at most {} minutes",
            MAX_DURATION_MINUTES
        )));
    }
    Ok(())
}

/// Handler for API health check
pub async fn health_handler() -> &'static str {
    "OK"
}

/// Handler returning the active office hours policy
pub async fn office_hours_handler(State(state): State<AppState>) -> impl IntoResponse {
    let policy = state.validator.policy();
    Json(json!({
        "startHour": policy.start_hour,
        "endHour": policy.end_hour,
        "allowedWeekdays": policy.allowed_weekdays,
        "window": format!("{}-{}", policy.opening_label(), policy.closing_label()),
        "days": policy.describe_weekdays(),
    }))
}

/// Handler that reports whether a slot could be booked
pub async fn validate_slot_handler(
    State(state): State<AppState>,
    Json(request): Json<SlotRequest>,
) -> Result<Json<ValidationVerdict>, ApiError> {
    check_duration(request.duration)?;

    let verdict = state
        .validator
        .validate(&request.date, &request.time, request.duration);
    info!(
        date = %request.date,
        time = %request.time,
        duration = request.duration,
        valid = verdict.is_valid,
        "Checked interview slot"
    );

    Ok(Json(verdict))
}

/// Handler for interview booking submissions
pub async fn schedule_interview_handler(
    State(state): State<AppState>,
    Json(request): Json<ScheduleInterviewRequest>,
) -> Result<Json<ScheduledInterview>, ApiError> {
    check_duration(request.duration)?;

    match state
        .validator
        .check(&request.date, &request.time, request.duration)
    {
        Ok(slot) => {
            info!(
                date = %slot.date,
                start = %slot.start,
                end = %slot.end,
                "Interview slot accepted"
            );
            Ok(Json(ScheduledInterview {
                message: ValidationVerdict::available().message,
                slot,
                candidate: request.candidate,
                interviewer: request.interviewer,
            }))
        }
        Err(rejection) => {
            info!(
                date = %request.date,
                time = %request.time,
                reason = %rejection,
                "Interview slot rejected"
            );
            Err(ApiError::Validation {
                field: "time",
                message: rejection.to_string(),
            })
        }
    }
}
