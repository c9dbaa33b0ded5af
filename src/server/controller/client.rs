use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        client::{ClientDto, SaveClientDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::User,
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// List the clients of the caller's company.
///
/// # Access Control
/// - `HasCompany` - Employers and employees of a company
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Clients ordered by name", body = Vec<ClientDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of any company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::HasCompany])
        .await?;

    let clients: Vec<ClientDto> = ClientService::new(&state.db)
        .get_by_company(company_id(&user)?)
        .await?
        .into_iter()
        .map(|client| client.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(clients)))
}

/// Add a client to the caller's company.
///
/// # Access Control
/// - `Employer` and `HasCompany`
///
/// # Returns
/// - `201 Created` - Created client
/// - `400 Bad Request` - Empty name, negative rate or name already used
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Not an employer with a company
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = SaveClientDto,
    responses(
        (status = 201, description = "Created client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SaveClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Employer, Permission::HasCompany])
        .await?;

    let client = ClientService::new(&state.db)
        .create(company_id(&user)?, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

/// Update one of the caller's company clients.
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = SaveClientDto,
    responses(
        (status = 200, description = "Updated client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SaveClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Employer, Permission::HasCompany])
        .await?;

    let client = ClientService::new(&state.db)
        .update(company_id(&user)?, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Delete one of the caller's company clients.
///
/// Sessions keep the client's name, so existing events and invoices are left untouched.
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Employer, Permission::HasCompany])
        .await?;

    ClientService::new(&state.db)
        .delete(company_id(&user)?, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Client deleted".to_string(),
        }),
    ))
}

/// Company of a user that already passed `Permission::HasCompany`.
fn company_id(user: &User) -> Result<i32, AppError> {
    user.company_id
        .ok_or_else(|| AppError::BadRequest("Join or register a company first".to_string()))
}
