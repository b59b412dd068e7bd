//! User management API handlers
//!
//! CRUD endpoints over `UserService`. All request validation happens here:
//! required fields and email format in the extractor, email uniqueness and
//! target existence before calling the service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::UserPayload;
use crate::application::UserService;
use crate::domain::User;
use crate::interfaces::http::common::{ApiError, ApiMessage, ValidatedJson};

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const EMAIL_TAKEN_MESSAGE: &str = "A user with this email already exists";
pub const EMAIL_USED_BY_OTHER_MESSAGE: &str = "Another user already uses this email";
pub const USER_DELETED_MESSAGE: &str = "User deleted successfully";
pub const DELETE_FAILED_MESSAGE: &str = "Error while deleting user";

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: UserService,
    /// Attach internal error detail to 500 responses
    pub expose_errors: bool,
}

/// Ids that are not positive integers can never match a record.
fn parse_user_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

/// Whether `email` belongs to a user other than `except`.
async fn email_in_use(service: &UserService, email: &str, except: Option<u64>) -> bool {
    service
        .list_all()
        .await
        .iter()
        .any(|u| u.email == email && Some(u.id) != except)
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 500, description = "Internal error", body = ApiMessage)
    )
)]
pub async fn list_users(State(state): State<UserHandlerState>) -> Json<Vec<User>> {
    Json(state.user_service.list_all().await)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "Not found", body = ApiMessage)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let Some(id) = parse_user_id(&id) else {
        return Err(ApiError::not_found(USER_NOT_FOUND_MESSAGE));
    };

    state
        .user_service
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND_MESSAGE))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing field or invalid email", body = ApiMessage),
        (status = 409, description = "Email already used", body = ApiMessage),
        (status = 500, description = "Persistence failure", body = ApiMessage)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (name, email) = payload.fields();

    if email_in_use(&state.user_service, email, None).await {
        return Err(ApiError::conflict(EMAIL_TAKEN_MESSAGE));
    }

    let user = state
        .user_service
        .create(name, email)
        .await
        .map_err(|e| ApiError::from_domain(e, state.expose_errors))?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Missing field or invalid email", body = ApiMessage),
        (status = 404, description = "Not found", body = ApiMessage),
        (status = 409, description = "Email used by another user", body = ApiMessage),
        (status = 500, description = "Persistence failure", body = ApiMessage)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let (name, email) = payload.fields();

    let Some(id) = parse_user_id(&id) else {
        return Err(ApiError::not_found(USER_NOT_FOUND_MESSAGE));
    };
    if state.user_service.get_by_id(id).await.is_none() {
        return Err(ApiError::not_found(USER_NOT_FOUND_MESSAGE));
    }

    if email_in_use(&state.user_service, email, Some(id)).await {
        return Err(ApiError::conflict(EMAIL_USED_BY_OTHER_MESSAGE));
    }

    state
        .user_service
        .update(id, name, email)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_domain(e, state.expose_errors))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiMessage),
        (status = 404, description = "Not found", body = ApiMessage),
        (status = 500, description = "Deletion failed", body = ApiMessage)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiMessage>, ApiError> {
    let Some(id) = parse_user_id(&id) else {
        return Err(ApiError::not_found(USER_NOT_FOUND_MESSAGE));
    };
    if state.user_service.get_by_id(id).await.is_none() {
        return Err(ApiError::not_found(USER_NOT_FOUND_MESSAGE));
    }

    // The service reports failures only as `false`; no detail to expose.
    if state.user_service.delete(id).await {
        Ok(Json(ApiMessage::new(USER_DELETED_MESSAGE)))
    } else {
        Err(ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            DELETE_FAILED_MESSAGE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_positive_integers_are_ids() {
        assert_eq!(parse_user_id("12"), Some(12));
        assert_eq!(parse_user_id(" 3 "), Some(3));
        assert_eq!(parse_user_id("0"), None);
        assert_eq!(parse_user_id("-1"), None);
        assert_eq!(parse_user_id("abc"), None);
    }
}
