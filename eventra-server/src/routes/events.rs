//! Event CRUD endpoints

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};
use eventra_core::{Event, EventPatch, FieldError, validate};
use serde::Deserialize;

use crate::routes::ApiError;
use crate::state::AppState;

static EVENT_NOT_FOUND: &str = "Event not found";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).patch(update_event).delete(delete_event),
        )
}

#[derive(Deserialize)]
pub struct ListEventsQuery {
    /// Only return events on this calendar day (YYYY-MM-DD)
    pub date: Option<String>,
}

/// GET /api/events - List events in chronological order
async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<ListEventsQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let Query(query) = query?;
    let events = match query.date {
        Some(date) => {
            let day = validate::parse_date(&date).ok_or_else(|| {
                ApiError::Validation(vec![FieldError::new(
                    "date",
                    "Expected a date in YYYY-MM-DD format",
                )])
            })?;
            state.storage.get_events_on(day)
        }
        None => state.storage.get_events(),
    }
    .map_err(ApiError::context("Failed to fetch events"))?;

    Ok(Json(events))
}

/// GET /api/events/{id}
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .storage
        .get_event(&id)
        .map_err(ApiError::context("Failed to fetch event"))?
        .ok_or(ApiError::NotFound(EVENT_NOT_FOUND))?;

    Ok(Json(event))
}

/// POST /api/events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    body: Result<Json<EventPatch>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let Json(body) = body?;
    let insert = validate::validate_new(body)?;

    let event = state
        .storage
        .create_event(insert)
        .map_err(ApiError::context("Failed to create event"))?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// PATCH /api/events/{id} - Update some fields of an event
///
/// Moving an event (new `date` or `time`) without a `dateTime` rebuilds
/// `dateTime` from the merged values so ordering stays correct. An empty
/// patch leaves storage untouched.
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EventPatch>, JsonRejection>,
) -> Result<Json<Event>, ApiError> {
    let Json(mut patch) = body?;
    validate::validate_patch(&patch)?;

    if patch.is_empty() {
        let event = state
            .storage
            .get_event(&id)
            .map_err(ApiError::context("Failed to update event"))?
            .ok_or(ApiError::NotFound(EVENT_NOT_FOUND))?;
        return Ok(Json(event));
    }

    if patch.needs_date_time() {
        let existing = state
            .storage
            .get_event(&id)
            .map_err(ApiError::context("Failed to update event"))?
            .ok_or(ApiError::NotFound(EVENT_NOT_FOUND))?;

        let date = patch.date.as_deref().unwrap_or(&existing.date);
        let time = patch.time.as_deref().unwrap_or(&existing.time);
        patch.date_time = Some(validate::combine_date_time(date, time));
    }

    let event = state
        .storage
        .update_event(&id, patch)
        .map_err(ApiError::context("Failed to update event"))?
        .ok_or(ApiError::NotFound(EVENT_NOT_FOUND))?;

    Ok(Json(event))
}

/// DELETE /api/events/{id}
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .storage
        .delete_event(&id)
        .map_err(ApiError::context("Failed to delete event"))?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(EVENT_NOT_FOUND))
    }
}
