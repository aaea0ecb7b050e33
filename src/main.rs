mod app;
mod catalog;
mod config;
mod db;
mod error;
mod extract;
mod fields;
mod offers;
mod state;
mod users;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "jobboard=debug,axum=info,tower_http=info";

/// Human-readable logs by default, one JSON object per line with `LOG_FORMAT=json`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => subscriber.with_target(false).json().init(),
        _ => subscriber.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let state = state::AppState::init().await?;
    let config = state.config.clone();
    app::serve(app::build_app(state), &config).await
}
