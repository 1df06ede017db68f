use crate::api::dto::*;
use crate::api::health_controller::*;
use crate::api::server_state::ServerState;
use crate::api::user_controller::*;
use crate::domain::user::{Categoria, User};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn routes(state: ServerState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/", ApiDoc::openapi()))
        .route("/api/health", get(health_action))
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    servers(
        (description="dev", url="http://localhost:5000"),
    ),
    paths(
        open_api_docs,
        health_action,
        list_users,
        get_user,
        create_user,
        update_user,
        delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            User,
            Categoria,
            CreateUserRequest,
            UpdateUserRequest,
            UserListResponse,
        ),
    )
)]
pub struct ApiDoc;

#[utoipa::path(get, path = "/",
    tag="utils",
    responses(
        (status = 200, description = "Open api schema", content_type = "application/json"),
    )
)]
pub async fn open_api_docs() {
    panic!("This is only for documentation")
}
