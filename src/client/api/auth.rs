use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::user::{
        AuthResponseDto, JoinCompanyDto, JoinCompanyResponseDto, LoginDto, RegisterDto,
    },
};

pub async fn register(payload: RegisterDto) -> Result<AuthResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/auth/register").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn login(payload: LoginDto) -> Result<AuthResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/auth/login").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn join_company(payload: JoinCompanyDto) -> Result<JoinCompanyResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/auth/join-company").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
