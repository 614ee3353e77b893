pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::OpenAiClient};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::{Router, routing::any};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

/// Builds the application router over the given state.
///
/// Both routes accept every method: `/api/check` gates on POST itself so the
/// rejection carries a JSON body, and `/api/test` answers any method.
pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/api/check", any(handlers::scam_check))
        .route("/api/test", any(handlers::config_probe))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm = OpenAiClient::new(&config.llm);

    let app_state = handlers::AppState {
        config: Arc::new(config.clone()),
        llm: Arc::new(llm),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Last-resort conversion of a handler panic into the generic 500 body, so
/// nothing ever escapes to the transport layer unshaped.
fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(types::ErrorResponse {
            error: "Unexpected server error.".to_string(),
            details: None,
        }),
    )
        .into_response()
}
