use crate::{
    client::{
        api::helper::{
            delete, get, parse_response, patch, post, put, query, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
};

/// Sessions on the current user's calendar for a 1-based month.
pub async fn get_events(year: i32, month: u32) -> Result<Vec<EventDto>, ApiError> {
    let url = format!(
        "/api/events{}",
        query(&[("month", month.to_string()), ("year", year.to_string())])
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_company_events(
    company_id: i32,
    year: i32,
    month: u32,
    client: Option<String>,
) -> Result<Vec<EventDto>, ApiError> {
    let url = format!(
        "/api/events/company/{}{}",
        company_id,
        query(&[
            ("month", month.to_string()),
            ("year", year.to_string()),
            ("client", client.unwrap_or_default()),
        ])
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_event(payload: CreateEventDto) -> Result<EventDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/events").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_event(id: i32, payload: UpdateEventDto) -> Result<EventDto, ApiError> {
    let url = format!("/api/events/{}", id);
    let body = serialize_json(&payload)?;
    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn complete_event(id: i32) -> Result<EventDto, ApiError> {
    let url = format!("/api/events/{}/complete", id);
    let request = patch(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_event(id: i32) -> Result<MessageDto, ApiError> {
    let url = format!("/api/events/{}", id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
