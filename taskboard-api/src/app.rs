/// Application state and router builder
///
/// This module defines the shared application state and builds the Axum
/// router with all routes and the authorization gate.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::routes;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use taskboard_shared::auth::middleware::{create_auth_middleware, require_admin};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Config;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses Arc
/// internally for cheap cloning; the configuration is immutable after
/// startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the token signing secret
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                  # Health check (public)
/// ├── /auth/
/// │   ├── POST /register       # Public
/// │   └── POST /login          # Public
/// ├── /employees               # Authenticated
/// │   ├── GET    /
/// │   ├── POST   /
/// │   └── DELETE /:id          # Admin only
/// ├── /tasks                   # Authenticated
/// │   ├── GET    /?status=
/// │   ├── POST   /
/// │   ├── PUT    /:id
/// │   └── DELETE /:id          # Admin only
/// └── /dashboard               # Authenticated
///     └── GET /
/// ```
///
/// # Middleware Stack
///
/// The authentication guard wraps each protected group; the admin guard is
/// layered per-method on the two delete routes, inside authentication, so
/// `authenticate` always runs first.
pub fn build_router(state: AppState) -> Router {
    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Auth routes (public, no auth required)
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    // Employee routes: list/create for any authenticated user, delete for
    // admins only
    let employee_routes = Router::new()
        .route(
            "/",
            get(routes::employees::list_employees).post(routes::employees::create_employee),
        )
        .route(
            "/:id",
            delete(routes::employees::delete_employee)
                .layer(middleware::from_fn(require_admin)),
        )
        .layer(middleware::from_fn(create_auth_middleware(
            state.jwt_secret().to_owned(),
        )));

    // Task routes: delete is the only admin-gated method
    let task_routes = Router::new()
        .route(
            "/",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/:id",
            put(routes::tasks::update_task).merge(
                delete(routes::tasks::delete_task).layer(middleware::from_fn(require_admin)),
            ),
        )
        .layer(middleware::from_fn(create_auth_middleware(
            state.jwt_secret().to_owned(),
        )));

    // Dashboard (authenticated)
    let dashboard_routes = Router::new()
        .route("/", get(routes::dashboard::get_dashboard))
        .layer(middleware::from_fn(create_auth_middleware(
            state.jwt_secret().to_owned(),
        )));

    Router::new()
        .merge(health_routes)
        .nest("/auth", auth_routes)
        .nest("/employees", employee_routes)
        .nest("/tasks", task_routes)
        .nest("/dashboard", dashboard_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // The frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
