//! # Calendar Handlers
//!
//! Create a calendar, attach proposed slots to it, read it back and check
//! its password. Field limits match the ones the planner form enforces, so a
//! request the form accepts is never rejected here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use hangout_core::{
    errors::HangoutError,
    models::calendar::{
        CreateCalendarRequest, CreateCalendarResponse, CreateTimeSlotsRequest,
        CreateTimeSlotsResponse, GetCalendarResponse, VerifyPasswordRequest,
        VerifyPasswordResponse,
    },
    proposal::{
        MAX_DESCRIPTION_LENGTH, MAX_LOCATION_LENGTH, MAX_TITLE_LENGTH, MIN_PASSWORD_LENGTH,
    },
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    middleware::{auth, error_handling::AppError},
    store::NewCalendar,
    ApiState,
};

#[axum::debug_handler]
pub async fn create_calendar(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateCalendarRequest>,
) -> Result<(StatusCode, Json<CreateCalendarResponse>), AppError> {
    validate_calendar(&payload)?;

    // Hash password if provided
    let password_hash = match payload.password.as_deref() {
        Some(password) => Some(auth::hash_password(password)?),
        None => None,
    };

    let calendar = state
        .store
        .create_calendar(NewCalendar {
            title: payload.title.trim().to_string(),
            description: payload.description,
            location: payload.location,
            password_hash,
            accept_responses_until: payload.accept_responses_until,
        })
        .await;
    info!("Created calendar {} ({:?})", calendar.id, calendar.title);

    Ok((
        StatusCode::CREATED,
        Json(CreateCalendarResponse { id: calendar.id }),
    ))
}

#[axum::debug_handler]
pub async fn create_time_slots(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateTimeSlotsRequest>,
) -> Result<(StatusCode, Json<CreateTimeSlotsResponse>), AppError> {
    if payload.time_slots.is_empty() {
        return Err(AppError(HangoutError::Validation(
            "At least one time slot is required".to_string(),
        )));
    }

    if let Some(slot) = payload
        .time_slots
        .iter()
        .find(|slot| slot.start_date >= slot.end_date)
    {
        return Err(AppError(HangoutError::Validation(format!(
            "Time slot starting at {} must end after it starts",
            slot.start_date.to_rfc3339()
        ))));
    }

    let created = state.store.add_time_slots(id, &payload.time_slots).await?;
    info!("Added {} time slots to calendar {}", created, id);

    Ok((
        StatusCode::CREATED,
        Json(CreateTimeSlotsResponse { created }),
    ))
}

#[axum::debug_handler]
pub async fn get_calendar(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetCalendarResponse>, AppError> {
    let (calendar, time_slots) = state
        .store
        .get_calendar(id)
        .await
        .ok_or_else(|| HangoutError::NotFound(format!("Calendar with ID {} not found", id)))?;

    Ok(Json(GetCalendarResponse {
        id: calendar.id,
        title: calendar.title,
        description: calendar.description,
        location: calendar.location,
        accept_responses_until: calendar.accept_responses_until,
        is_protected: calendar.password_hash.is_some(),
        created_at: calendar.created_at,
        updated_at: calendar.updated_at,
        time_slots,
    }))
}

#[axum::debug_handler]
pub async fn verify_password(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VerifyPasswordRequest>,
) -> Result<Json<VerifyPasswordResponse>, AppError> {
    // Calendars without a password accept anything
    let valid = match state.store.password_hash(id).await? {
        Some(password_hash) => auth::verify_password(&payload.password, &password_hash)?,
        None => true,
    };

    Ok(Json(VerifyPasswordResponse { valid }))
}

fn validate_calendar(payload: &CreateCalendarRequest) -> Result<(), HangoutError> {
    let title_length = payload.title.trim().chars().count();
    if title_length == 0 {
        return Err(HangoutError::Validation("Title is required".to_string()));
    }
    if title_length > MAX_TITLE_LENGTH {
        return Err(HangoutError::Validation(format!(
            "Title cannot exceed {} characters",
            MAX_TITLE_LENGTH
        )));
    }

    if let Some(password) = &payload.password {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(HangoutError::Validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }
    }

    let too_long = |value: &Option<String>, limit: usize| {
        value
            .as_ref()
            .is_some_and(|value| value.chars().count() > limit)
    };
    if too_long(&payload.description, MAX_DESCRIPTION_LENGTH) {
        return Err(HangoutError::Validation(format!(
            "Description cannot exceed {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    if too_long(&payload.location, MAX_LOCATION_LENGTH) {
        return Err(HangoutError::Validation(format!(
            "Location cannot exceed {} characters",
            MAX_LOCATION_LENGTH
        )));
    }

    Ok(())
}
