// ============================================================
// LAPTOP RECORD
// ============================================================
// One normalized laptop listing produced by ingestion

use serde::{Deserialize, Serialize};

/// A single laptop listing from the dataset.
///
/// `id` is the 1-based line index the record had in the source text. Rows
/// dropped during ingestion leave gaps; ids are never renumbered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laptop {
    pub id: usize,
    pub company: String,
    pub type_name: String,
    pub inches: f64,
    pub screen_resolution: String,
    pub cpu: String,
    /// Memory amount in gigabytes, parsed from mixed-unit text ("8GB" -> 8).
    pub ram: f64,
    /// Storage descriptor, free text ("256GB SSD").
    pub memory: String,
    pub gpu: String,
    pub op_sys: String,
    /// Weight in kilograms, parsed from mixed-unit text ("1.37kg" -> 1.37).
    pub weight: f64,
    /// Listing price, currency symbols and grouping stripped. Always > 0 for
    /// retained records.
    pub price: f64,
}
