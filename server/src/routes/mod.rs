//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches Leptos SSR rendering of the widget, its static assets
//! and the backend proxy under a single Axum router. The widget is rendered at
//! `/` and `/chat.html`; anything the host does not know falls through to
//! [`proxy::forward`].

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Host-owned routes plus the proxy fallback.
pub(crate) fn host_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback(proxy::forward)
        .with_state(state)
}

/// Full host router: SSR widget, `/pkg` assets, health check and proxy.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `[[workspace.metadata.leptos]]`).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(chapterchat_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || chapterchat_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(host_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
