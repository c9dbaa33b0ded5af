use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::Event,
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Month selector; `month` is 1-based.
#[derive(Deserialize, IntoParams)]
pub struct MonthParams {
    pub month: u32,
    pub year: i32,
}

#[derive(Deserialize, IntoParams)]
pub struct CompanyEventParams {
    pub month: u32,
    pub year: i32,
    /// Only sessions held with this client name.
    pub client: Option<String>,
}

/// Schedule a session.
///
/// Employers may schedule on behalf of one of their employees by passing `employee_id`.
///
/// # Returns
/// - `201 Created` - Created session with employee and company names
/// - `400 Bad Request` - Missing title/client, end not after start or no company
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Scheduling for someone outside the caller's company
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Created session", body = EventDto),
        (status = 400, description = "Invalid session data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot schedule for this employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db).create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Sessions on the caller's calendar for a month.
///
/// Employers see every session of their company; employees see their own.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(MonthParams),
    responses(
        (status = 200, description = "Sessions starting in the month", body = Vec<EventDto>),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<MonthParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let events = EventService::new(&state.db)
        .get_calendar(&user, params.year, params.month)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Completed sessions of a company in a month, for invoice generation.
///
/// # Access Control
/// - `CompanyMember` - Caller must belong to the company
#[utoipa::path(
    get,
    path = "/api/events/company/{company_id}",
    tag = EVENT_TAG,
    params(
        ("company_id" = i32, Path, description = "Company ID"),
        CompanyEventParams
    ),
    responses(
        (status = 200, description = "Completed sessions", body = Vec<EventDto>),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_company_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(company_id): Path<i32>,
    Query(params): Query<CompanyEventParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::CompanyMember(company_id)])
        .await?;

    let events = EventService::new(&state.db)
        .get_completed_for_company(
            company_id,
            params.year,
            params.month,
            params.client.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Replace a session's details.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Updated session", body = EventDto),
        (status = 400, description = "Invalid session data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db)
        .update(&user, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Session deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    EventService::new(&state.db).delete(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Event deleted".to_string(),
        }),
    ))
}

/// Mark a session as held.
#[utoipa::path(
    patch,
    path = "/api/events/{id}/complete",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Completed session", body = EventDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn complete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let event = EventService::new(&state.db).complete(&user, id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

fn into_dtos(events: Vec<Event>) -> Vec<EventDto> {
    events.into_iter().map(|event| event.into_dto()).collect()
}
