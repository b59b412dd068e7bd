//! Page handlers
//!
//! Views are fixed documents; everything dynamic is fetched from the API by
//! the browser scripts after load.

use axum::{
    extract::Path,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};

use super::assets::{self, find_asset};
use crate::interfaces::http::common::ApiMessage;

pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

pub async fn home() -> Html<&'static str> {
    Html(assets::HOME_PAGE)
}

pub async fn creation_form() -> Html<&'static str> {
    Html(assets::FORM_PAGE)
}

/// The page reads the id from its own URL.
pub async fn user_detail(Path(_id): Path<String>) -> Html<&'static str> {
    Html(assets::USER_DETAIL_PAGE)
}

pub async fn static_asset(uri: Uri) -> Response {
    match find_asset(uri.path()) {
        Some(asset) => (
            [(header::CONTENT_TYPE, asset.content_type)],
            asset.body,
        )
            .into_response(),
        None => not_found(uri).await,
    }
}

/// Fallback for unmatched routes: JSON under `/api`, the HTML page elsewhere.
pub async fn not_found(uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        (
            StatusCode::NOT_FOUND,
            Json(ApiMessage::new(ROUTE_NOT_FOUND_MESSAGE)),
        )
            .into_response()
    } else {
        (StatusCode::NOT_FOUND, Html(assets::NOT_FOUND_PAGE)).into_response()
    }
}
