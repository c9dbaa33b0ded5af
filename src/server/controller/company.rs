use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        company::{CompanyDataDto, CompanyDetailDto, CompanyDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::company::CompanyService,
        state::AppState,
    },
};

/// Tag for grouping company endpoints in OpenAPI documentation
pub static COMPANY_TAG: &str = "company";

/// List every company with its owner and employees.
///
/// Used by employees looking for a company to join, so any authenticated user may call it.
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "All companies", body = Vec<CompanyDetailDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_companies(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let companies: Vec<CompanyDetailDto> = CompanyService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|company| company.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(companies)))
}

/// Get a company with its owner and employees.
///
/// # Returns
/// - `200 OK` - Company details
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Company not found
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(
        ("id" = i32, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company details", body = CompanyDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_company(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let company = CompanyService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(company.into_dto())))
}

/// Search companies by name or email, ignoring case.
#[utoipa::path(
    get,
    path = "/api/companies/search/{query}",
    tag = COMPANY_TAG,
    params(
        ("query" = String, Path, description = "Text contained in the name or email")
    ),
    responses(
        (status = 200, description = "Matching companies", body = Vec<CompanyDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn search_companies(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(query): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let companies: Vec<CompanyDto> = CompanyService::new(&state.db)
        .search(&query)
        .await?
        .into_iter()
        .map(|company| company.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(companies)))
}

/// Replace a company's details.
///
/// # Access Control
/// - `CompanyOwner` - Only the employer owning the company
///
/// # Returns
/// - `200 OK` - Updated company
/// - `400 Bad Request` - Missing name/email or email used by another company
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not own the company
/// - `404 Not Found` - Company not found
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(
        ("id" = i32, Path, description = "Company ID")
    ),
    request_body = CompanyDataDto,
    responses(
        (status = 200, description = "Updated company", body = CompanyDto),
        (status = 400, description = "Invalid company data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the company owner", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_company(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CompanyDataDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::CompanyOwner(id)])
        .await?;

    let company = CompanyService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(company.into_dto())))
}

/// List the employees of a company.
#[utoipa::path(
    get,
    path = "/api/companies/{id}/employees",
    tag = COMPANY_TAG,
    params(
        ("id" = i32, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Employees ordered by name", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of the company", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_company_employees(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::CompanyMember(id)])
        .await?;

    let employees: Vec<UserDto> = CompanyService::new(&state.db)
        .get_employees(id)
        .await?
        .into_iter()
        .map(|employee| employee.into_dto(None))
        .collect();

    Ok((StatusCode::OK, Json(employees)))
}
