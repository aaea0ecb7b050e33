use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{field, Span};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::AppState;
use crate::{catalog, offers, users};

pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let api = Router::new()
        .merge(users::router())
        .merge(offers::router())
        .merge(catalog::router())
        .route("/health", get(|| async { "ok" }))
        .fallback(fallback)
        .layer(middleware::from_fn(answer_options))
        .with_state(state)
        .layer(cors);
    with_tracing(api)
}

fn with_tracing(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(request_span)
            .on_response(log_response),
    )
}

/// One span per request, tagged with a fresh id so interleaved logs can be told apart.
fn request_span(req: &Request) -> Span {
    tracing::info_span!(
        "http_request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = %Uuid::new_v4(),
        status = field::Empty,
    )
}

fn log_response(res: &Response, latency: Duration, span: &Span) {
    let status = res.status();
    span.record("status", field::display(status));
    let latency_ms = latency.as_millis() as u64;
    if status.is_server_error() {
        tracing::error!(%status, latency_ms, "request failed");
    } else {
        tracing::debug!(%status, latency_ms, "request finished");
    }
}

/// Credentialed CORS for the one configured frontend origin.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.cors_origin.clone()]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Every OPTIONS request is an empty 200; the CORS layer decorates it.
async fn answer_options(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}

async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    ApiError::not_found("Not found").into_response()
}

pub async fn serve(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
