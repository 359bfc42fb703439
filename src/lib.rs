pub mod config;
pub mod error;
pub mod state;
pub mod auth;
pub mod db;
pub mod models;
pub mod routes;
pub mod views;
pub mod contact;
pub mod notify;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::auth::SharedSecret;
use crate::config::Config;
use crate::contact::ContactService;
use crate::notify::Notifier;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let notifier = Notifier::from_config(&config);
    build_app_with_notifier(pool, config, notifier)
}

/// Assemble the router around an explicit notifier, so callers can swap the
/// mail transport.
pub fn build_app_with_notifier(pool: PgPool, config: Config, notifier: Notifier) -> Router {
    if config.uses_default_admin_token() {
        tracing::warn!("PORTFOLIO_ADMIN_TOKEN not set, admin listing uses the default token");
    }

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        contacts: ContactService::new(pool, notifier),
        admin_gate: Arc::new(SharedSecret::new(&config.admin_token)),
    });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_size))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                )),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
