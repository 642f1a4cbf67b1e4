//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the chat API endpoints and stitches them with Leptos SSR
//! rendering under a single Axum router. Page routes get session cookies
//! issued on the way in; the browser bundle is served from `/pkg`.

pub mod chat;
pub mod session;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Chat API routes consumed by the browser client.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/query", post(chat::query))
        .route("/reset", post(chat::reset))
        .route("/history/{id}", get(chat::history))
        .route("/new-conversation", get(chat::new_conversation))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full app: API routes + Leptos SSR page + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .layer(middleware::from_fn(session::ensure_session_cookies))
        .with_state(leptos_options.clone());

    // WASM, JS and CSS emitted by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
