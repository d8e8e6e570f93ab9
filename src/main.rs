use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use lapprice::domain::laptop::Laptop;
use lapprice::infrastructure::config::AppConfig;
use lapprice::infrastructure::csv::DatasetParser;
use lapprice::infrastructure::llm_clients::{LLMClient, RouterClient};
use lapprice::interfaces::http::{add_log, start_server, AppState, LogEntry};
use lapprice::shared::sample_data::SAMPLE_CSV_DATA;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = AppConfig::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;

    let logs: Arc<Mutex<Vec<LogEntry>>> = Arc::new(Mutex::new(Vec::new()));
    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(RouterClient::new());

    let default_dataset = load_default_dataset(&config);
    info!(records = default_dataset.len(), "default dataset ready");

    let state = Arc::new(AppState::new(
        config.llm.clone(),
        llm_client,
        default_dataset,
    ));

    let server = start_server(&config.server, state, logs.clone())?;
    add_log(
        &logs,
        "INFO",
        "System",
        &format!(
            "Backend initialized and HTTP server started on {}:{}",
            config.server.host, config.server.port
        ),
    );

    server.await
}

/// Resolve the dataset the dashboard starts with: the configured CSV when it
/// reads and parses, otherwise the embedded sample.
fn load_default_dataset(config: &AppConfig) -> Vec<Laptop> {
    let parser = DatasetParser::new();

    if let Some(path) = &config.dataset.csv_path {
        match std::fs::read(path) {
            Ok(bytes) => {
                let laptops = parser.parse(&DatasetParser::decode_bytes(&bytes));
                if !laptops.is_empty() {
                    info!(
                        path = %path.display(),
                        records = laptops.len(),
                        "loaded dataset from configured CSV"
                    );
                    return laptops;
                }
                warn!(
                    path = %path.display(),
                    "configured CSV produced no records; using sample data"
                );
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "could not read configured CSV; using sample data"
                );
            }
        }
    }

    parser.parse(SAMPLE_CSV_DATA)
}
