use std::sync::Arc;

use axum::middleware;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod handlers;

use auth::{authorize, PermissionGate, TokenVerifier};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub verifier: Arc<TokenVerifier>,
}

/// Builds the full route table.
///
/// Every route but `/` carries its own permission gate, attached with
/// `route_layer` so an unsupported method still answers 405 instead of
/// 401. One method-router per path holds the 405 fallback; merging a
/// second one would panic.
pub fn app(state: AppState) -> Router {
    let verifier = state.verifier.clone();
    let require = move |permission: &'static str| {
        middleware::from_fn_with_state(PermissionGate::new(verifier.clone(), permission), authorize)
    };

    Router::new()
        .route("/", get(handlers::root).fallback(handlers::method_not_allowed))
        // Nutritionists
        .route(
            "/nutritionists",
            get(handlers::nutritionists::list)
                .route_layer(require("view:nutritionist"))
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/nutritionists",
            post(handlers::nutritionists::create).route_layer(require("create:nutritionist")),
        )
        .route(
            "/nutritionists",
            patch(handlers::nutritionists::update).route_layer(require("edit:nutritionist")),
        )
        .route(
            "/nutritionists/:id",
            get(handlers::nutritionists::show)
                .route_layer(require("view:nutritionist"))
                .fallback(handlers::method_not_allowed),
        )
        // Clients
        .route(
            "/clients",
            get(handlers::clients::list)
                .route_layer(require("view:client"))
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/clients",
            post(handlers::clients::create).route_layer(require("create:client")),
        )
        .route(
            "/clients",
            patch(handlers::clients::update).route_layer(require("edit:client")),
        )
        .route(
            "/clients/:id",
            get(handlers::clients::show)
                .route_layer(require("view:client"))
                .fallback(handlers::method_not_allowed),
        )
        // Articles
        .route(
            "/articles",
            get(handlers::articles::list)
                .route_layer(require("read:article"))
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/articles",
            post(handlers::articles::create).route_layer(require("create:article")),
        )
        .route(
            "/articles",
            patch(handlers::articles::update).route_layer(require("edit:article")),
        )
        .route(
            "/articles/:id",
            delete(handlers::articles::delete)
                .route_layer(require("delete:article"))
                .fallback(handlers::method_not_allowed),
        )
        // Subscriptions
        .route(
            "/subscriptions",
            post(handlers::subscriptions::create)
                .route_layer(require("subscribe:client"))
                .fallback(handlers::method_not_allowed),
        )
        // Global middleware
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
