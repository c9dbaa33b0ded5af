use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        time_entry::{CreateTimeEntryDto, TimeEntryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::time_entry::TimeEntryService,
        state::AppState,
    },
};

/// Tag for grouping time entry endpoints in OpenAPI documentation
pub static TIME_TAG: &str = "time";

/// List the authenticated user's time entries, newest first.
#[utoipa::path(
    get,
    path = "/api/time",
    tag = TIME_TAG,
    responses(
        (status = 200, description = "Time entries", body = Vec<TimeEntryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_time_entries(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let entries: Vec<TimeEntryDto> = TimeEntryService::new(&state.db)
        .get_by_user(user.id)
        .await?
        .into_iter()
        .map(|entry| entry.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}

/// Log hours for the authenticated user.
///
/// # Returns
/// - `201 Created` - Created entry
/// - `400 Bad Request` - Hours not greater than zero
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Client not in the user's company
#[utoipa::path(
    post,
    path = "/api/time",
    tag = TIME_TAG,
    request_body = CreateTimeEntryDto,
    responses(
        (status = 201, description = "Created entry", body = TimeEntryDto),
        (status = 400, description = "Invalid time entry", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_time_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTimeEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let entry = TimeEntryService::new(&state.db)
        .create(&user, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}
