use crate::{
    client::{
        api::helper::{get, parse_response, path_segment, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        company::{CompanyDataDto, CompanyDetailDto, CompanyDto},
        user::UserDto,
    },
};

pub async fn get_companies() -> Result<Vec<CompanyDetailDto>, ApiError> {
    let request = get("/api/companies");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn search_companies(query: &str) -> Result<Vec<CompanyDto>, ApiError> {
    let url = format!("/api/companies/search/{}", path_segment(query));
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_company(id: i32) -> Result<CompanyDetailDto, ApiError> {
    let url = format!("/api/companies/{}", id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_company(id: i32, payload: CompanyDataDto) -> Result<CompanyDto, ApiError> {
    let url = format!("/api/companies/{}", id);
    let body = serialize_json(&payload)?;
    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_employees(company_id: i32) -> Result<Vec<UserDto>, ApiError> {
    let url = format!("/api/companies/{}/employees", company_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
