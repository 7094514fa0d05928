use axum::http::{header::HeaderValue, Method};
use domain::{AnalysisProvider, TranscriptionProvider};
use log::*;
use sea_orm::DatabaseConnection;
use service::config::Config;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub use error::{Error, Result};

mod controller;
mod error;
mod params;
mod router;

/// Everything a request handler needs: infrastructure from `service` plus the
/// transcription and LLM providers used to process uploaded audio.
#[derive(Clone)]
pub struct AppState {
    pub service_state: service::AppState,
    pub transcriber: Arc<dyn TranscriptionProvider>,
    pub llm: Arc<dyn AnalysisProvider>,
}

impl AppState {
    pub fn new(
        app_config: Config,
        db: &Arc<DatabaseConnection>,
        transcriber: Arc<dyn TranscriptionProvider>,
        llm: Arc<dyn AnalysisProvider>,
    ) -> Self {
        Self {
            service_state: service::AppState::new(app_config, db),
            transcriber,
            llm,
        }
    }

    pub fn db_conn_ref(&self) -> &DatabaseConnection {
        self.service_state.db_conn_ref()
    }

    pub fn config(&self) -> &Config {
        &self.service_state.config
    }
}

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let config = app_state.config().clone();
    let host = config.interface.as_deref().unwrap_or("127.0.0.1");
    let server_url = format!("{host}:{}", config.port);

    info!(
        "Starting meeting summarizer API ({}) on http://{server_url}",
        config.runtime_env()
    );

    if config.is_production() && config.allowed_origins.iter().any(|origin| origin == "*") {
        warn!("Allowing any CORS origin in production");
    }

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(allowed_origins(&config.allowed_origins));

    let app = router::define_routes(app_state).layer(cors_layer);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}

fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}

