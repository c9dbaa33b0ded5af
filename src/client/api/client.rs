use crate::{
    client::{
        api::helper::{delete, get, parse_response, post, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        client::{ClientDto, SaveClientDto},
    },
};

pub async fn get_clients() -> Result<Vec<ClientDto>, ApiError> {
    let request = get("/api/clients");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_client(payload: SaveClientDto) -> Result<ClientDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/clients").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_client(id: i32, payload: SaveClientDto) -> Result<ClientDto, ApiError> {
    let url = format!("/api/clients/{}", id);
    let body = serialize_json(&payload)?;
    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_client(id: i32) -> Result<MessageDto, ApiError> {
    let url = format!("/api/clients/{}", id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
