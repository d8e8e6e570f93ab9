pub mod state;

use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder, Scope};
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::application::use_cases::aggregation;
use crate::domain::aggregates::DashboardStats;
use crate::domain::chat::{ChatRole, ChatTurn};
use crate::domain::laptop::Laptop;
use crate::domain::prediction::{LaptopSpecs, PredictionResult};
use crate::infrastructure::config::ServerConfig;
use crate::shared::currency::format_inr;

pub use state::AppState;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub state: Arc<AppState>,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Serialize)]
struct DatasetSummary {
    records: usize,
    source: &'static str,
}

#[derive(Deserialize)]
struct DatasetQuery {
    company: Option<String>,
    #[serde(rename = "typeName")]
    type_name: Option<String>,
}

impl DatasetQuery {
    fn matches(&self, laptop: &Laptop) -> bool {
        let company_ok = self
            .company
            .as_deref()
            .map(|c| laptop.company == c)
            .unwrap_or(true);
        let type_ok = self
            .type_name
            .as_deref()
            .map(|t| laptop.type_name == t)
            .unwrap_or(true);
        company_ok && type_ok
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    #[serde(flatten)]
    stats: DashboardStats,
    avg_price_display: String,
    most_expensive_display: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictResponse {
    #[serde(flatten)]
    result: PredictionResult,
    price_display: String,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatResponse {
    id: String,
    role: ChatRole,
    text: String,
    timestamp: chrono::DateTime<Utc>,
}

#[post("/dataset")]
async fn upload_dataset(data: web::Data<HttpState>, payload: web::Bytes) -> impl Responder {
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!("Dataset upload received ({} bytes)", payload.len()),
    );

    match data.state.ingest_use_case.execute(&payload) {
        Ok(laptops) => {
            let records = laptops.len();
            *data.state.dataset.write().unwrap() = laptops;
            add_log(
                &data.logs,
                "INFO",
                "HttpApi",
                &format!("Dataset replaced ({} records)", records),
            );
            HttpResponse::Ok().json(DatasetSummary {
                records,
                source: "upload",
            })
        }
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "HttpApi",
                &format!("Dataset upload rejected: {}", e),
            );
            HttpResponse::UnprocessableEntity().body(e.to_string())
        }
    }
}

#[get("/dataset")]
async fn list_dataset(
    data: web::Data<HttpState>,
    query: web::Query<DatasetQuery>,
) -> impl Responder {
    let dataset = data.state.dataset.read().unwrap();
    let filtered: Vec<Laptop> = dataset
        .iter()
        .filter(|laptop| query.matches(laptop))
        .cloned()
        .collect();

    HttpResponse::Ok().json(filtered)
}

#[get("/stats")]
async fn stats(data: web::Data<HttpState>) -> impl Responder {
    let dataset = data.state.dataset.read().unwrap();
    let stats = aggregation::dashboard_stats(&dataset);

    let most_expensive_display = stats
        .most_expensive
        .as_ref()
        .map(|laptop| format_inr(laptop.price));

    HttpResponse::Ok().json(StatsResponse {
        avg_price_display: format_inr(stats.avg_price),
        most_expensive_display,
        stats,
    })
}

#[get("/aggregates/price-by-company")]
async fn price_by_company(data: web::Data<HttpState>) -> impl Responder {
    let dataset = data.state.dataset.read().unwrap();
    HttpResponse::Ok().json(aggregation::average_price_by_company(&dataset))
}

#[get("/aggregates/ram-distribution")]
async fn ram_distribution(data: web::Data<HttpState>) -> impl Responder {
    let dataset = data.state.dataset.read().unwrap();
    HttpResponse::Ok().json(aggregation::ram_distribution(&dataset))
}

#[post("/predict")]
async fn predict(data: web::Data<HttpState>, req: web::Json<LaptopSpecs>) -> impl Responder {
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!(
            "Predicting price (provider={:?} model={})",
            data.state.llm_config.provider, data.state.llm_config.model
        ),
    );

    let dataset = data.state.dataset_snapshot();
    let result = data
        .state
        .predict_use_case
        .execute(&data.state.llm_config, &req, &dataset)
        .await;

    if result.predicted_price <= 0.0 {
        add_log(
            &data.logs,
            "WARN",
            "HttpApi",
            "Prediction returned the fallback result",
        );
    }

    HttpResponse::Ok().json(PredictResponse {
        price_display: format_inr(result.predicted_price),
        result,
    })
}

#[post("/chat")]
async fn chat(data: web::Data<HttpState>, req: web::Json<ChatRequest>) -> impl Responder {
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!(
            "Chat query received ({} history turns, provider={:?})",
            req.history.len(),
            data.state.llm_config.provider
        ),
    );

    let dataset = data.state.dataset_snapshot();
    let text = data
        .state
        .chat_use_case
        .execute(&data.state.llm_config, &req.query, &req.history, &dataset)
        .await;

    HttpResponse::Ok().json(ChatResponse {
        id: Uuid::new_v4().to_string(),
        role: ChatRole::Model,
        text,
        timestamp: Utc::now(),
    })
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap();
    HttpResponse::Ok().json(&*logs)
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap();
    logs.push(entry.clone());
    if logs.len() > 100 {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(upload_dataset)
        .service(list_dataset)
        .service(stats)
        .service(price_by_company)
        .service(ram_distribution)
        .service(predict)
        .service(chat)
        .service(get_logs)
}

pub fn start_server(
    config: &ServerConfig,
    state: Arc<AppState>,
    logs: Arc<Mutex<Vec<LogEntry>>>,
) -> std::io::Result<Server> {
    let data = web::Data::new(HttpState { state, logs });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new().wrap(cors).app_data(data.clone()).service(api_scope())
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}
