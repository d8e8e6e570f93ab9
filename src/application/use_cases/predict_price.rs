use std::fmt::Write as _;
use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::laptop::Laptop;
use crate::domain::llm_config::LLMConfig;
use crate::domain::prediction::{LaptopSpecs, PredictionResult};
use crate::infrastructure::llm_clients::LLMClient;
use crate::infrastructure::response::strip_code_fences;
use crate::shared::number_format::compact_number;

// Keep the reference sample small enough for the model's context window.
const MAX_REFERENCE_ROWS: usize = 40;

const FALLBACK_REASONING: &str =
    "Error generating prediction. Please ensure the API key is configured and valid.";
const DEFAULT_REASONING: &str = "Could not generate reasoning.";

/// Estimate-price capability. Infallible at its boundary: every failure mode
/// (transport, malformed response, unparsable JSON) collapses into the
/// sentinel zero-price result.
pub struct PredictPriceUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
}

impl PredictPriceUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>) -> Self {
        Self { llm_client }
    }

    pub async fn execute(
        &self,
        config: &LLMConfig,
        specs: &LaptopSpecs,
        dataset: &[Laptop],
    ) -> PredictionResult {
        let prompt = build_prompt(specs, dataset);
        let schema = prediction_schema();

        match self
            .llm_client
            .generate_structured(config, &prompt, &schema)
            .await
        {
            Ok(raw) => parse_prediction(&raw),
            Err(err) => {
                warn!(error = %err, "price prediction failed");
                fallback()
            }
        }
    }
}

fn fallback() -> PredictionResult {
    PredictionResult {
        predicted_price: 0.0,
        reasoning: FALLBACK_REASONING.to_string(),
    }
}

fn prediction_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "predictedPrice": { "type": "NUMBER" },
            "reasoning": { "type": "STRING" },
        },
        "required": ["predictedPrice", "reasoning"],
    })
}

fn parse_prediction(raw: &str) -> PredictionResult {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<serde_json::Value>(&cleaned) {
        Ok(value) => PredictionResult {
            predicted_price: value
                .get("predictedPrice")
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
            reasoning: value
                .get("reasoning")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_REASONING)
                .to_string(),
        },
        Err(err) => {
            warn!(error = %err, "prediction response was not valid JSON");
            fallback()
        }
    }
}

fn build_prompt(specs: &LaptopSpecs, dataset: &[Laptop]) -> String {
    let sample_text = dataset
        .iter()
        .take(MAX_REFERENCE_ROWS)
        .map(|l| {
            format!(
                "{} {}: {}GB RAM, {}, {}, {} -> ₹{}",
                l.company,
                l.type_name,
                compact_number(l.ram),
                l.cpu,
                l.memory,
                l.gpu,
                l.price.round() as i64
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let text_or_unknown = |value: &Option<String>| -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v.clone(),
            _ => "Unknown".to_string(),
        }
    };

    let mut prompt = String::new();
    writeln!(prompt, "You are an expert laptop pricing estimator.").ok();
    writeln!(
        prompt,
        "Using the provided reference data trends, estimate the price for a laptop with the following specifications."
    )
    .ok();
    writeln!(prompt).ok();
    writeln!(prompt, "Reference Data Sample:").ok();
    writeln!(prompt, "{}", sample_text).ok();
    writeln!(prompt).ok();
    writeln!(prompt, "Target Specifications:").ok();
    writeln!(prompt, "Company: {}", text_or_unknown(&specs.company)).ok();
    writeln!(prompt, "Type: {}", text_or_unknown(&specs.type_name)).ok();
    match specs.ram {
        Some(ram) if ram > 0.0 => writeln!(prompt, "Ram: {}GB", compact_number(ram)).ok(),
        _ => writeln!(prompt, "Ram: Unknown").ok(),
    };
    writeln!(prompt, "CPU: {}", text_or_unknown(&specs.cpu)).ok();
    writeln!(prompt, "GPU: {}", text_or_unknown(&specs.gpu)).ok();
    writeln!(prompt, "Storage: {}", text_or_unknown(&specs.memory)).ok();
    writeln!(prompt, "OS: {}", text_or_unknown(&specs.op_sys)).ok();
    match specs.weight {
        Some(weight) if weight > 0.0 => {
            writeln!(prompt, "Weight: {}kg", compact_number(weight)).ok()
        }
        _ => writeln!(prompt, "Weight: Unknown").ok(),
    };
    writeln!(prompt).ok();
    writeln!(prompt, "Return a JSON object with:").ok();
    writeln!(prompt, "- predictedPrice: number (in INR)").ok();
    writeln!(
        prompt,
        "- reasoning: string (brief explanation comparing to similar models in data)"
    )
    .ok();

    prompt
}
