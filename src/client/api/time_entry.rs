use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::time_entry::{CreateTimeEntryDto, TimeEntryDto},
};

pub async fn get_time_entries() -> Result<Vec<TimeEntryDto>, ApiError> {
    let request = get("/api/time");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_time_entry(payload: CreateTimeEntryDto) -> Result<TimeEntryDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/time").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
