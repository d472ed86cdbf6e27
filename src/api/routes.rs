//! Router configuration for the API.
//!
//! Routes are grouped in three tiers: public (register, login, health),
//! authenticated (any valid token) and admin (valid token with the
//! `admin` role).

use std::time::Duration;

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::timeout::TimeoutLayer;

use crate::api::handlers;
use crate::api::middleware::{
    admin_middleware, auth_middleware, logging_middleware, request_id_middleware,
};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Middleware is applied in reverse order of declaration (last added
/// runs first), so request IDs exist before the logging layer runs.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let public_routes = Router::new()
        .route("/users/register", post(handlers::auth::register))
        .route("/users/login", post(handlers::auth::login))
        .route("/health", get(handlers::health::health));

    let authenticated_routes = Router::new()
        .route("/users/topup", patch(handlers::users::top_up))
        .route("/products", get(handlers::products::list_products))
        .route(
            "/transactions",
            post(handlers::transactions::create_transaction),
        )
        .route(
            "/transactions/my-transactions",
            get(handlers::transactions::my_transactions),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let admin_routes = Router::new()
        .route(
            "/categories",
            get(handlers::categories::list_categories)
                .post(handlers::categories::create_category),
        )
        .route(
            "/categories/{categoryId}",
            patch(handlers::categories::update_category),
        )
        .route(
            "/categories/{categoryId}",
            delete(handlers::categories::delete_category),
        )
        .route("/products", post(handlers::products::create_product))
        .route(
            "/products/{productId}",
            put(handlers::products::update_product),
        )
        .route(
            "/products/{productId}",
            delete(handlers::products::delete_product),
        )
        .route(
            "/transactions/user-transactions",
            get(handlers::transactions::all_transactions),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(admin_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
