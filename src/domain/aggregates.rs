use serde::{Deserialize, Serialize};

use super::laptop::Laptop;

/// One bucket of a grouping operation: a label, a value, and for groupings
/// where it matters, the bucket's member count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedData {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl AggregatedData {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            count: None,
        }
    }

    pub fn with_count(label: impl Into<String>, value: f64, count: usize) -> Self {
        Self {
            label: label.into(),
            value,
            count: Some(count),
        }
    }
}

/// Headline numbers for the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_laptops: usize,
    pub avg_price: f64,
    pub most_popular_brand: String,
    pub most_expensive: Option<Laptop>,
}

impl DashboardStats {
    /// Stats for an empty dataset: zero counts and the "not available" brand.
    pub fn empty() -> Self {
        Self {
            total_laptops: 0,
            avg_price: 0.0,
            most_popular_brand: "N/A".to_string(),
            most_expensive: None,
        }
    }
}
