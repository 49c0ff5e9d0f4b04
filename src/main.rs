use std::sync::Arc;

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classroom_ai::api::router;
use classroom_ai::classroom::ClassroomHttpClient;
use classroom_ai::config::AppConfig;
use classroom_ai::gemini::GeminiHttpClient;
use classroom_ai::gmail::GmailHttpClient;
use classroom_ai::state::AppState;
use classroom_ai::upstream::build_http_client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "classroom_ai=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;
    debug!("Loaded configuration: {:?}", config);

    let http = build_http_client(config.upstream_timeout)?;

    let state = AppState {
        classroom: Arc::new(ClassroomHttpClient::new(http.clone(), config.classroom_api_base.clone())),
        mail: Arc::new(GmailHttpClient::new(http.clone(), config.gmail_api_base.clone())),
        generator: Arc::new(GeminiHttpClient::new(http, config.gemini.clone())),
    };

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
