use tracing::info;

use crate::domain::error::{AppError, Result};
use crate::domain::laptop::Laptop;
use crate::infrastructure::csv::DatasetParser;

/// Turns an uploaded CSV payload into laptop records.
///
/// The parser itself never fails; this use case adds the one policy decision
/// the upload flow needs: a payload that yields zero records is rejected so
/// the caller can keep its current dataset.
pub struct IngestDatasetUseCase {
    parser: DatasetParser,
}

impl IngestDatasetUseCase {
    pub fn new() -> Self {
        Self {
            parser: DatasetParser::new(),
        }
    }

    pub fn execute(&self, payload: &[u8]) -> Result<Vec<Laptop>> {
        let text = DatasetParser::decode_bytes(payload);
        let laptops = self.parser.parse(&text);

        if laptops.is_empty() {
            return Err(AppError::ValidationError(
                "CSV parsing failed. Ensure proper headers like \"Company\", \"Price\", \"Ram\", etc."
                    .to_string(),
            ));
        }

        info!(records = laptops.len(), "dataset ingested");
        Ok(laptops)
    }
}

impl Default for IngestDatasetUseCase {
    fn default() -> Self {
        Self::new()
    }
}
