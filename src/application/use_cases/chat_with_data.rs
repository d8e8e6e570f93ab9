use std::fmt::Write as _;
use std::sync::Arc;

use tracing::warn;

use crate::domain::chat::ChatTurn;
use crate::domain::laptop::Laptop;
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::llm_clients::LLMClient;
use crate::shared::number_format::compact_number;

// The model only sees a summary plus a handful of rows, not the full dataset.
const MAX_SAMPLE_ROWS: usize = 15;

const EMPTY_REPLY_FALLBACK: &str = "I couldn't generate a response based on the data.";
const ERROR_FALLBACK: &str =
    "I encountered an error processing your request. Please check your API key.";

/// Answer-query capability: free-form Q&A over the loaded dataset. Failures
/// never cross the boundary; the caller always gets a displayable reply.
pub struct ChatWithDataUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
}

impl ChatWithDataUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>) -> Self {
        Self { llm_client }
    }

    pub async fn execute(
        &self,
        config: &LLMConfig,
        query: &str,
        history: &[ChatTurn],
        dataset: &[Laptop],
    ) -> String {
        let system = build_system_instruction(dataset);

        match self
            .llm_client
            .generate(config, &system, history, query)
            .await
        {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => EMPTY_REPLY_FALLBACK.to_string(),
            Err(err) => {
                warn!(error = %err, "chat request failed");
                ERROR_FALLBACK.to_string()
            }
        }
    }
}

fn build_system_instruction(dataset: &[Laptop]) -> String {
    let mut system = String::new();
    writeln!(system, "You are a data analyst for a laptop pricing dashboard.").ok();
    writeln!(system, "You have access to a dataset of laptops.").ok();
    writeln!(system, "Answer questions based on the data provided below.").ok();
    writeln!(system, "Be concise, professional, and data-driven.").ok();
    writeln!(system).ok();
    writeln!(system, "Data Context Summary:").ok();
    write!(system, "{}", build_data_context(dataset)).ok();
    system
}

/// Summarized context: totals, the column legend, a row sample and the price
/// extremes. Summarizing keeps large datasets inside the context window.
fn build_data_context(dataset: &[Laptop]) -> String {
    let sample = &dataset[..dataset.len().min(MAX_SAMPLE_ROWS)];
    let sample_json = serde_json::to_string(sample).unwrap_or_default();

    let max_price = dataset.iter().map(|l| l.price).fold(0.0_f64, f64::max);
    let min_price = dataset
        .iter()
        .map(|l| l.price)
        .fold(f64::INFINITY, f64::min);
    let min_price = if min_price.is_finite() { min_price } else { 0.0 };

    let mut context = String::new();
    writeln!(context, "Dataset Overview:").ok();
    writeln!(context, "- Total Records: {}", dataset.len()).ok();
    writeln!(
        context,
        "- Columns: Company, TypeName, Inches, Ram (GB), OpSys, Weight (kg), Price (INR)"
    )
    .ok();
    writeln!(context).ok();
    writeln!(context, "Sample Rows:").ok();
    writeln!(context, "{}", sample_json).ok();
    writeln!(context).ok();
    writeln!(context, "Stats:").ok();
    writeln!(context, "- Expensive: {}", compact_number(max_price)).ok();
    writeln!(context, "- Cheap: {}", compact_number(min_price)).ok();
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{AppError, Result};
    use async_trait::async_trait;

    struct StubClient {
        response: Result<String>,
        captured_system: std::sync::Mutex<Option<String>>,
    }

    impl StubClient {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                captured_system: std::sync::Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(AppError::LLMError("unreachable host".to_string())),
                captured_system: std::sync::Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl LLMClient for StubClient {
        async fn generate(
            &self,
            _config: &LLMConfig,
            system: &str,
            _history: &[ChatTurn],
            _user: &str,
        ) -> Result<String> {
            *self.captured_system.lock().unwrap() = Some(system.to_string());
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(AppError::LLMError(msg)) => Err(AppError::LLMError(msg.clone())),
                Err(_) => Err(AppError::Internal("stub".to_string())),
            }
        }

        async fn generate_structured(
            &self,
            _config: &LLMConfig,
            _prompt: &str,
            _schema: &serde_json::Value,
        ) -> Result<String> {
            unreachable!("chat uses the free-form call")
        }
    }

    fn laptop(company: &str, price: f64) -> Laptop {
        Laptop {
            id: 1,
            company: company.to_string(),
            type_name: "Notebook".to_string(),
            inches: 15.6,
            screen_resolution: String::new(),
            cpu: String::new(),
            ram: 8.0,
            memory: String::new(),
            gpu: String::new(),
            op_sys: "Windows 10".to_string(),
            weight: 2.0,
            price,
        }
    }

    #[tokio::test]
    async fn test_reply_passthrough() {
        let client = Arc::new(StubClient::ok("Dell offers the best value."));
        let use_case = ChatWithDataUseCase::new(client);

        let reply = use_case
            .execute(&LLMConfig::default(), "Which brand is cheapest?", &[], &[])
            .await;
        assert_eq!(reply, "Dell offers the best value.");
    }

    #[tokio::test]
    async fn test_empty_reply_gets_fallback() {
        let client = Arc::new(StubClient::ok("   "));
        let use_case = ChatWithDataUseCase::new(client);

        let reply = use_case
            .execute(&LLMConfig::default(), "Anything?", &[], &[])
            .await;
        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_provider_failure_gets_sentinel() {
        let client = Arc::new(StubClient::failing());
        let use_case = ChatWithDataUseCase::new(client);

        let reply = use_case
            .execute(&LLMConfig::default(), "Anything?", &[], &[])
            .await;
        assert_eq!(reply, ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn test_system_instruction_carries_data_context() {
        let client = Arc::new(StubClient::ok("ok"));
        let use_case = ChatWithDataUseCase::new(client.clone());
        let dataset = vec![laptop("Dell", 500.0), laptop("Razer", 324954.72)];

        use_case
            .execute(&LLMConfig::default(), "q", &[], &dataset)
            .await;

        let system = client.captured_system.lock().unwrap().clone().unwrap();
        assert!(system.contains("data analyst for a laptop pricing dashboard"));
        assert!(system.contains("Total Records: 2"));
        assert!(system.contains("\"company\":\"Dell\""));
        assert!(system.contains("Expensive: 324954.72"));
        assert!(system.contains("Cheap: 500"));
    }

    #[test]
    fn test_sample_rows_are_capped() {
        let dataset: Vec<Laptop> = (0..40).map(|i| laptop("Dell", 100.0 + i as f64)).collect();
        let context = build_data_context(&dataset);

        let parsed: serde_json::Value = {
            let start = context.find('[').unwrap();
            let end = context.rfind(']').unwrap();
            serde_json::from_str(&context[start..=end]).unwrap()
        };
        assert_eq!(parsed.as_array().unwrap().len(), MAX_SAMPLE_ROWS);
    }
}
