use medical_summary_service::{AppState, ServiceConfig, create_app};
use std::sync::Arc;
use summary_core::RigBackend;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing; `LOG_FORMAT=pretty` for development, JSON otherwise
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "medical_summary_service=debug,summary_core=debug,tower_http=debug".into()
    });

    match log_format.as_str() {
        "pretty" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!(config = ?config, "Configuration loaded");

    let backend = Arc::new(RigBackend::new(&config.api_key, config.model.clone()));
    let app = create_app(AppState::new(backend, config.completion));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;

    info!("Medical Summary Service starting on {}", addr);
    info!("Health check endpoint: http://{}/api/health", addr);
    info!("Summary endpoint: POST http://{}/api/summarize", addr);
    info!("Chat endpoint: POST http://{}/api/chat", addr);
    info!("Term explanation endpoint: POST http://{}/api/explain-term", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
