use crate::{
    client::{
        api::helper::{get, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::user::{UpdateProfileDto, UserDto},
};

pub async fn get_profile() -> Result<UserDto, ApiError> {
    let request = get("/api/users/profile");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_profile(payload: UpdateProfileDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = put("/api/users/profile").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
