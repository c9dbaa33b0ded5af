use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        invoice::{
            CreateInvoiceDto, GenerateInvoiceDto, InvoiceDto, InvoicePreviewDto, InvoiceStatsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{invoice::Invoice, user::User},
        service::invoice::InvoiceService,
        state::AppState,
    },
};

/// Tag for grouping invoice endpoints in OpenAPI documentation
pub static INVOICE_TAG: &str = "invoice";

#[derive(Deserialize, IntoParams)]
pub struct PreviewParams {
    pub client_id: i32,
    /// 1-based month.
    pub month: u32,
    pub year: i32,
}

#[derive(Deserialize, IntoParams)]
pub struct ListParams {
    /// `all`, `draft`, `sent`, `paid` or `overdue`.
    pub status: Option<String>,
    /// Matched against invoice number, client name and notes.
    pub search: Option<String>,
}

/// Preview the invoice for a client's completed, unbilled sessions in a month.
///
/// Nothing is stored; the preview may have no items.
///
/// # Access Control
/// - `Employer` and `HasCompany`
#[utoipa::path(
    get,
    path = "/api/invoices/preview",
    tag = INVOICE_TAG,
    params(PreviewParams),
    responses(
        (status = 200, description = "Invoice preview", body = InvoicePreviewDto),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn preview_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PreviewParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    let draft = InvoiceService::new(&state.db)
        .preview(&user, params.client_id, params.year, params.month)
        .await?;

    Ok((StatusCode::OK, Json(draft.into_preview_dto())))
}

/// Generate and store the month's invoice for a client.
///
/// The billed sessions are flagged as invoiced and will not be billed again.
///
/// # Returns
/// - `201 Created` - Stored draft invoice
/// - `400 Bad Request` - No completed sessions for the client and month
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Not an employer with a company
/// - `404 Not Found` - Client not found
#[utoipa::path(
    post,
    path = "/api/invoices/generate",
    tag = INVOICE_TAG,
    request_body = GenerateInvoiceDto,
    responses(
        (status = 201, description = "Generated invoice", body = InvoiceDto),
        (status = 400, description = "Nothing to bill", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn generate_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GenerateInvoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    let invoice = InvoiceService::new(&state.db)
        .generate(&user, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(invoice))))
}

/// Store an invoice entered by hand.
#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = INVOICE_TAG,
    request_body = CreateInvoiceDto,
    responses(
        (status = 201, description = "Created invoice", body = InvoiceDto),
        (status = 400, description = "Invalid items", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateInvoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    let invoice = InvoiceService::new(&state.db)
        .create(&user, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(invoice))))
}

/// List the caller's invoices, newest first.
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = INVOICE_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Invoices with effective status", body = Vec<InvoiceDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_invoices(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    let invoices = InvoiceService::new(&state.db)
        .list(&user, params.status.as_deref(), params.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(invoices)))
}

#[utoipa::path(
    get,
    path = "/api/invoices/stats/summary",
    tag = INVOICE_TAG,
    responses(
        (status = 200, description = "Count and amount per status", body = InvoiceStatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_invoice_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    let stats = InvoiceService::new(&state.db).stats(&user).await?;

    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = INVOICE_TAG,
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Invoice", body = InvoiceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    let invoice = InvoiceService::new(&state.db).get(&user, id).await?;

    Ok((StatusCode::OK, Json(to_dto(invoice))))
}

/// Delete an invoice and its items.
///
/// Sessions it billed stay flagged as invoiced.
#[utoipa::path(
    delete,
    path = "/api/invoices/{id}",
    tag = INVOICE_TAG,
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Invoice deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    InvoiceService::new(&state.db).delete(&user, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Invoice deleted".to_string(),
        }),
    ))
}

/// Mark an invoice as sent.
///
/// # Returns
/// - `200 OK` - Invoice with status `sent` and `sent_at` set
/// - `400 Bad Request` - Invoice already paid
/// - `404 Not Found` - Invoice not found
#[utoipa::path(
    patch,
    path = "/api/invoices/{id}/send",
    tag = INVOICE_TAG,
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Sent invoice", body = InvoiceDto),
        (status = 400, description = "Invoice cannot be sent", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn send_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    let invoice = InvoiceService::new(&state.db).send(&user, id).await?;

    Ok((StatusCode::OK, Json(to_dto(invoice))))
}

#[utoipa::path(
    patch,
    path = "/api/invoices/{id}/mark-paid",
    tag = INVOICE_TAG,
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Paid invoice", body = InvoiceDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn mark_invoice_paid(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    let invoice = InvoiceService::new(&state.db).mark_paid(&user, id).await?;

    Ok((StatusCode::OK, Json(to_dto(invoice))))
}

/// Printable HTML tax invoice. The browser's print dialog turns it into a PDF.
#[utoipa::path(
    get,
    path = "/api/invoices/{id}/document",
    tag = INVOICE_TAG,
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Invoice document", content_type = "text/html", body = String),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an employer with a company", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_invoice_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = employer(&state, &headers).await?;

    let html = InvoiceService::new(&state.db).document(&user, id).await?;

    Ok((StatusCode::OK, Html(html)))
}

async fn employer(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<User, AppError> {
    AuthGuard::new(&state.db, &state.jwt, headers)
        .require(&[Permission::Employer, Permission::HasCompany])
        .await
}

fn to_dto(invoice: Invoice) -> InvoiceDto {
    invoice.into_dto(Utc::now().date_naive())
}
