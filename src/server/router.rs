//! HTTP routing and API documentation.
//!
//! Routes are registered through `utoipa-axum` so the OpenAPI document is assembled from
//! the handlers' `#[utoipa::path]` attributes. Swagger UI serves it at `/api/docs`.

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::any,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{auth, client, company, event, health, invoice, time_entry, user},
        error::{config::ConfigError, AppError},
        state::AppState,
    },
};

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&BearerAuth),
    info(
        title = "Trackify API",
        description = "Session scheduling, time tracking and invoicing for small service companies."
    ),
    tags(
        (name = "auth", description = "Registration, login and joining a company"),
        (name = "user", description = "Profile of the authenticated user"),
        (name = "company", description = "Company directory and settings"),
        (name = "client", description = "Clients billed by a company"),
        (name = "event", description = "Scheduled and completed sessions"),
        (name = "invoice", description = "Invoice generation and lifecycle"),
        (name = "time", description = "Logged hours"),
        (name = "health", description = "Service health")
    ),
)]
struct ApiDoc;

/// Builds the API router with documentation, CORS and request tracing.
///
/// # Arguments
/// - `cors_origin` - Single allowed browser origin; any origin when `None`
///
/// # Returns
/// - `Ok(Router)` - Router awaiting `AppState`
/// - `Err(ConfigError::InvalidEnvVar)` - `cors_origin` is not a valid header value
pub fn router(cors_origin: Option<&str>) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::join_company))
        .routes(routes!(user::get_profile, user::update_profile))
        .routes(routes!(company::get_companies))
        .routes(routes!(company::search_companies))
        .routes(routes!(company::get_company, company::update_company))
        .routes(routes!(company::get_company_employees))
        .routes(routes!(client::get_clients, client::create_client))
        .routes(routes!(client::update_client, client::delete_client))
        .routes(routes!(event::create_event, event::get_events))
        .routes(routes!(event::get_company_events))
        .routes(routes!(event::update_event, event::delete_event))
        .routes(routes!(event::complete_event))
        .routes(routes!(invoice::preview_invoice))
        .routes(routes!(invoice::generate_invoice))
        .routes(routes!(invoice::get_invoice_stats))
        .routes(routes!(invoice::create_invoice, invoice::get_invoices))
        .routes(routes!(invoice::get_invoice, invoice::delete_invoice))
        .routes(routes!(invoice::send_invoice))
        .routes(routes!(invoice::mark_invoice_paid))
        .routes(routes!(invoice::get_invoice_document))
        .routes(routes!(time_entry::get_time_entries, time_entry::create_time_entry))
        .split_for_parts();

    Ok(router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/api/{*path}", any(route_not_found))
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, AppError> {
    let allow_origin = match origin {
        Some(origin) => AllowOrigin::exact(origin.parse::<HeaderValue>().map_err(|e| {
            ConfigError::InvalidEnvVar("CORS_ORIGIN".to_string(), e.to_string())
        })?),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any))
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Route not found".to_string(),
        }),
    )
}
