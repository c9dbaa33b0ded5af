use crate::{
    client::{
        api::helper::{
            delete, get, parse_response, parse_text_response, patch, post, query, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        invoice::{
            CreateInvoiceDto, GenerateInvoiceDto, InvoiceDto, InvoicePreviewDto, InvoiceStatsDto,
        },
    },
};

pub async fn preview_invoice(
    client_id: i32,
    year: i32,
    month: u32,
) -> Result<InvoicePreviewDto, ApiError> {
    let url = format!(
        "/api/invoices/preview{}",
        query(&[
            ("client_id", client_id.to_string()),
            ("month", month.to_string()),
            ("year", year.to_string()),
        ])
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn generate_invoice(payload: GenerateInvoiceDto) -> Result<InvoiceDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/invoices/generate").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_invoice(payload: CreateInvoiceDto) -> Result<InvoiceDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/invoices").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Invoices filtered by status (`all` for every status) and search text.
pub async fn get_invoices(status: String, search: String) -> Result<Vec<InvoiceDto>, ApiError> {
    let url = format!(
        "/api/invoices{}",
        query(&[("status", status), ("search", search)])
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_invoice_stats() -> Result<InvoiceStatsDto, ApiError> {
    let request = get("/api/invoices/stats/summary");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn send_invoice(id: i32) -> Result<InvoiceDto, ApiError> {
    let url = format!("/api/invoices/{}/send", id);
    let request = patch(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn mark_invoice_paid(id: i32) -> Result<InvoiceDto, ApiError> {
    let url = format!("/api/invoices/{}/mark-paid", id);
    let request = patch(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_invoice(id: i32) -> Result<MessageDto, ApiError> {
    let url = format!("/api/invoices/{}", id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Printable HTML of a stored invoice.
pub async fn get_invoice_document(id: i32) -> Result<String, ApiError> {
    let url = format!("/api/invoices/{}/document", id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_text_response(response).await
}

/// Opens the stored invoice in a new window and starts the browser's print dialog, where it
/// can be saved as PDF.
pub async fn print_invoice(id: i32) -> Result<(), ApiError> {
    let html = get_invoice_document(id).await?;
    let html = serialize_json(&html)?;

    dioxus::prelude::document::eval(&format!(
        r#"const win = window.open("", "_blank");
if (win) {{
    win.document.write({});
    win.document.close();
    win.focus();
    setTimeout(() => win.print(), 250);
}}"#,
        html
    ));

    Ok(())
}
