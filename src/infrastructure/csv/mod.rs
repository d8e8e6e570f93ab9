// ============================================================
// CSV INGESTION
// ============================================================
// Header-sniffing CSV parsing for laptop datasets

pub mod dataset_parser;
pub mod field_rules;

pub use dataset_parser::DatasetParser;
pub use field_rules::{Field, HeaderMap, FIELD_RULES};
