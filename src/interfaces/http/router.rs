//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{http::StatusCode, middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{handle_panic, ApiError, ApiResponse};
use super::modules::health::{self, HealthState};
use super::modules::request_id::request_id_middleware;
use super::modules::users::{self, CreateUserRequest, UpdateUserRequest, UserDto, UserHandlerState};
use crate::application::UserService;
use crate::infrastructure::InMemoryUserRepository;

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
        users::list_users_by_role,
    ),
    components(
        schemas(
            ApiResponse<UserDto>,
            ApiResponse<Vec<UserDto>>,
            UserDto,
            CreateUserRequest,
            UpdateUserRequest,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Users", description = "In-memory user registry: CRUD and role filter"),
    ),
    info(
        title = "User Registry API",
        version = "1.0.0",
        description = "REST API over an in-memory, file-seeded user registry",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    user_service: Arc<UserService<InMemoryUserRepository>>,
    started_at: Instant,
) -> Router {
    let user_state = UserHandlerState { user_service };

    let user_routes = Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/users/role/{role}", get(users::list_users_by_role))
        .with_state(user_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState::new(started_at));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(user_routes)
        .fallback(route_not_found)
        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "route not found")
}
