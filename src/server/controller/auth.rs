use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{AuthResponseDto, JoinCompanyDto, JoinCompanyResponseDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Employers may include company details to create the company they own in the same
/// request. The response carries a token so the client is logged in right away.
///
/// # Returns
/// - `201 Created` - Account created, token issued
/// - `400 Bad Request` - Missing fields, short password or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.jwt)
        .register(payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(session.into_dto("User created successfully")),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Token and user with company and profile
/// - `400 Bad Request` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.jwt)
        .login(payload)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto("Login successful"))))
}

/// Join an existing company as the authenticated user.
///
/// # Access Control
/// - Authenticated employees; employers are refused
///
/// # Returns
/// - `200 OK` - Updated user with company
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is an employer
/// - `404 Not Found` - User or company not found
#[utoipa::path(
    post,
    path = "/api/auth/join-company",
    tag = AUTH_TAG,
    request_body = JoinCompanyDto,
    responses(
        (status = 200, description = "Joined company", body = JoinCompanyResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Employers cannot join a company", body = ErrorDto),
        (status = 404, description = "User or company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn join_company(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<JoinCompanyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let (user, company) = AuthService::new(&state.db, &state.jwt)
        .join_company(user.id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(JoinCompanyResponseDto {
            message: "Successfully joined company".to_string(),
            user: user.into_dto(Some(company)),
        }),
    ))
}
