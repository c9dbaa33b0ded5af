use reqwasm::http::{Method, Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::{constant::TOKEN_STORAGE_KEY, model::error::ApiError},
    model::api::ErrorDto,
};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Bearer token saved by the last login, if any.
pub fn stored_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_STORAGE_KEY).ok()?
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

/// Parses a JSON success body, or the `{ error }` body of a failed request.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::local(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from(status, response).await)
    }
}

/// Parses a plain text success body such as the printable invoice.
pub async fn parse_text_response(response: Response) -> Result<String, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .text()
            .await
            .map_err(|e| ApiError::local(format!("Failed to read response: {}", e)))
    } else {
        Err(error_from(status, response).await)
    }
}

async fn error_from(status: u64, response: Response) -> ApiError {
    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}

/// Request with the stored bearer token attached.
fn authorized(request: Request) -> Request {
    match stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

pub fn get(url: &str) -> Request {
    authorized(Request::get(url))
}

pub fn post(url: &str) -> Request {
    authorized(Request::post(url)).header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    authorized(Request::put(url)).header("Content-Type", "application/json")
}

pub fn patch(url: &str) -> Request {
    authorized(Request::new(url).method(Method::PATCH))
}

pub fn delete(url: &str) -> Request {
    authorized(Request::delete(url))
}

pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::local(format!("Failed to send request: {}", e)))
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::local(format!("Failed to serialize request: {}", e)))
}

/// `?key=value&...` with every value percent-encoded; empty values are skipped.
pub fn query(pairs: &[(&str, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs.iter().filter(|(_, value)| !value.is_empty()) {
        serializer.append_pair(key, value);
    }

    match serializer.finish() {
        encoded if encoded.is_empty() => String::new(),
        encoded => format!("?{}", encoded),
    }
}

/// Percent-encodes one path segment.
pub fn path_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
