use domain::gateway::{gemini::GeminiClient, simulated_transcriber::SimulatedTranscriber};
use log::{error, info, warn};
use service::{config::Config, logging::Logger};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!("Starting meeting summarizer [{}]", config.runtime_env());

    let db = match service::init_database(&config).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::run(&db).await {
        error!("Failed to run database migrations: {e}");
        std::process::exit(1);
    }

    if config.gemini_api_key().is_none() {
        warn!("GEMINI_API_KEY is not set; every meeting analysis will use the fallback result");
    }

    let llm = match GeminiClient::from_config(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to create Gemini client: {e}");
            std::process::exit(1);
        }
    };
    let transcriber = Arc::new(SimulatedTranscriber::from_config(&config));

    let app_state = web::AppState::new(config, &db, transcriber, llm);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped with error: {e}");
        std::process::exit(1);
    }
}
