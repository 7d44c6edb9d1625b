//! User registry API handlers
//!
//! Thin wrappers that delegate to `UserService` and wrap the outcome in
//! the standard envelope.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::application::UserService;
use crate::infrastructure::InMemoryUserRepository;
use crate::interfaces::http::common::{ApiError, ApiJson, ApiResponse};

/// User handler state, concrete over the in-memory registry for Axum
/// compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in registry order", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Internal error")
    )
)]
pub async fn list_users(State(state): State<UserHandlerState>) -> ApiResult<Vec<UserDto>> {
    let users = state
        .user_service
        .list_users()
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to list users"))?;

    let items = users.into_iter().map(UserDto::from).collect();
    Ok(Json(ApiResponse::list("users retrieved", items)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> ApiResult<UserDto> {
    let user = state
        .user_service
        .get_user(&id)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to get user"))?;

    Ok(Json(ApiResponse::success("user retrieved", UserDto::from(user))))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Missing field, age out of range, unknown role or bad email")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    let user = state
        .user_service
        .create_user(request.into())
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to create user"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("user created", UserDto::from(user))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "A supplied field is invalid; earlier fields stay applied"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> ApiResult<UserDto> {
    let user = state
        .user_service
        .update_user(&id, request.into())
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to update user"))?;

    Ok(Json(ApiResponse::success("user updated", UserDto::from(user))))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Removed user", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<String>,
) -> ApiResult<UserDto> {
    let user = state
        .user_service
        .delete_user(&id)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to delete user"))?;

    Ok(Json(ApiResponse::success("user deleted", UserDto::from(user))))
}

#[utoipa::path(
    get,
    path = "/api/users/role/{role}",
    tag = "Users",
    params(("role" = String, Path, description = "admin, editor or viewer")),
    responses(
        (status = 200, description = "Users with the role, in registry order", body = ApiResponse<Vec<UserDto>>),
        (status = 400, description = "Unknown role")
    )
)]
pub async fn list_users_by_role(
    State(state): State<UserHandlerState>,
    Path(role): Path<String>,
) -> ApiResult<Vec<UserDto>> {
    let users = state
        .user_service
        .list_users_by_role(&role)
        .await
        .map_err(|e| ApiError::from_domain(e, "failed to filter users"))?;

    let items = users.into_iter().map(UserDto::from).collect();
    Ok(Json(ApiResponse::list(format!("{} users retrieved", role), items)))
}
