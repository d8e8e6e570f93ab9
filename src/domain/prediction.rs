use serde::{Deserialize, Serialize};

/// Target specifications for a price estimate. Every field is optional;
/// unset fields are rendered as "Unknown" in the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaptopSpecs {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub ram: Option<f64>,
    #[serde(default)]
    pub cpu: Option<String>,
    #[serde(default)]
    pub gpu: Option<String>,
    #[serde(default)]
    pub memory: Option<String>,
    #[serde(default)]
    pub op_sys: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Outcome of the estimate-price capability. Never an error across the
/// boundary: failures surface as price 0 with an apologetic reasoning string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub predicted_price: f64,
    pub reasoning: String,
}
