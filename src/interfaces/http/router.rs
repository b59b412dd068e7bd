//! HTTP router: REST API, pages, static assets and OpenAPI document

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;
use utoipa::OpenApi;

use crate::application::UserService;
use crate::domain::User;
use crate::interfaces::http::common::{ApiMessage, INTERNAL_ERROR_MESSAGE};
use crate::interfaces::http::modules::{health, pages, request_id, users};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            User,
            users::UserPayload,
            ApiMessage,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Users", description = "User records CRUD"),
    ),
    info(
        title = "User Registry API",
        version = "1.0.0",
        description = "REST API for managing user records"
    )
)]
pub struct ApiDoc;

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Body for requests whose handler panicked.
fn panic_response(err: Box<dyn Any + Send + 'static>, expose_detail: bool) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(detail = %detail, "Unhandled error while serving request");

    let body = ApiMessage {
        message: INTERNAL_ERROR_MESSAGE.to_string(),
        error: Some(if expose_detail {
            detail
        } else {
            "Internal error".to_string()
        }),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Create the application router with all routes
pub fn create_router(user_service: UserService, expose_errors: bool) -> Router {
    let user_state = users::UserHandlerState {
        user_service: user_service.clone(),
        expose_errors,
    };
    let health_state = health::HealthState {
        user_service,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(user_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/formulaire", get(pages::creation_form))
        .route("/user/{id}", get(pages::user_detail))
        .route("/js/{*file}", get(pages::static_asset))
        .route("/css/{*file}", get(pages::static_asset));

    Router::new()
        .merge(page_routes)
        .merge(health_routes)
        .route("/api-doc/openapi.json", get(openapi_document))
        .nest("/api/users", user_routes)
        .fallback(pages::not_found)
        // Middleware
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| panic_response(err, expose_errors),
        ))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
}

// ── Tests ──────────────────────────────────────────────────────
