use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated user's profile with their company.
///
/// # Returns
/// - `200 OK` - User with company and profile
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - User no longer exists
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let (user, company) = UserService::new(&state.db).get_profile(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto(company))))
}

/// Replace the authenticated user's name and profile fields.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Empty name or negative hourly rate
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - User no longer exists
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let (user, company) = UserService::new(&state.db)
        .update_profile(user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(company))))
}
