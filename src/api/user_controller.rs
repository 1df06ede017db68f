use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Map, Value};

use crate::api::dto::{
    CreateUserRequest, ErrorResponse, ListUsersQuery, UpdateUserRequest, UserListResponse,
};
use crate::api::server_state::ServerState;
use crate::domain::store::{UserDraft, UserListQuery};
use crate::domain::user::User;

#[utoipa::path(get, path = "/api/users",
    tag="users",
    params(
        ("page" = Option<u32>, Query, description = "Page number default 1"),
        ("limit" = Option<u32>, Query, description = "Number of items per page default 5"),
        ("category" = Option<String>, Query, description = "Keep only users of this categoria"),
        ("sortBy" = Option<String>, Query, description = "nombre (default) or fechaDeNacimiento"),
        ("order" = Option<String>, Query, description = "asc (default) or desc"),
    ),
    responses(
        (status = 200, description = "Page of users", content_type = "application/json", body = UserListResponse),
    )
)]
pub async fn list_users(
    State(state): State<ServerState>,
    Query(query): Query<ListUsersQuery>,
) -> impl IntoResponse {
    let query = UserListQuery::from(query);

    match state.user_store.list(&query).await {
        Ok(page) => (StatusCode::OK, Json(UserListResponse::from(page))).into_response(),
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            e.into_response()
        }
    }
}

#[utoipa::path(get, path = "/api/users/{id}",
    tag="users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", content_type = "application/json", body = User),
        (status = 404, description = "User not found", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn get_user(State(state): State<ServerState>, Path(id): Path<u32>) -> impl IntoResponse {
    match state.user_store.get(id).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => {
            tracing::debug!("User not found: {}", id);
            e.into_response()
        }
    }
}

#[utoipa::path(post, path = "/api/users",
    tag="users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", content_type = "application/json", body = User),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity"),
    )
)]
pub async fn create_user(
    State(state): State<ServerState>,
    Json(body): Json<Map<String, Value>>,
) -> impl IntoResponse {
    let request = match CreateUserRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("Rejected user payload: {}", e);
            return e.into_response();
        }
    };

    match state.user_store.create(UserDraft::from(request)).await {
        Ok(user) => {
            tracing::debug!("User created: {}", user.email);
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(e) => {
            tracing::debug!("Failed to create user: {}", e);
            e.into_response()
        }
    }
}

#[utoipa::path(put, path = "/api/users/{id}",
    tag="users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", content_type = "application/json", body = User),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 404, description = "User not found", content_type = "application/json", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity"),
    )
)]
pub async fn update_user(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
    Json(body): Json<Map<String, Value>>,
) -> impl IntoResponse {
    // Unknown ids win over bad payloads
    if let Err(e) = state.user_store.get(id).await {
        tracing::debug!("User not found: {}", id);
        return e.into_response();
    }

    let request = match UpdateUserRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("Rejected user payload: {}", e);
            return e.into_response();
        }
    };

    match state.user_store.update(id, UserDraft::from(request)).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => {
            tracing::debug!("Failed to update user {}: {}", id, e);
            e.into_response()
        }
    }
}

#[utoipa::path(delete, path = "/api/users/{id}",
    tag="users",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn delete_user(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    match state.user_store.delete(id).await {
        Ok(()) => {
            tracing::debug!("User deleted: {}", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::debug!("User not found: {}", id);
            e.into_response()
        }
    }
}
