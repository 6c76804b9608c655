pub mod api_error;
pub mod handlers;
pub(crate) mod util;

use axum::Router;
use axum::http::{Method, header};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::error::ConfigError;
use crate::http_client::upstream_client;
use crate::relay::Relay;
use crate::server::util::mask_key;

pub struct AppState {
    pub relay: Relay,
}

pub fn create_app(config: Settings) -> Result<Router, ConfigError> {
    let http = upstream_client(&config.upstream)?;

    match &config.api_key {
        Some(key) => tracing::info!("Upstream credential loaded ({})", mask_key(key)),
        None => tracing::warn!(
            "OPENROUTER_API_KEY is not set; /ask and /humanize will answer 500 until it is configured"
        ),
    }
    tracing::info!(
        model = %config.upstream.model,
        "Relaying completions to {}",
        config.upstream.base_url
    );

    let app_state = AppState {
        relay: Relay::new(&config, http),
    };

    Ok(router(Arc::new(app_state)))
}

pub fn router(app_state: Arc<AppState>) -> Router {
    // 浏览器前端与服务不同源
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    handlers::routes()
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
