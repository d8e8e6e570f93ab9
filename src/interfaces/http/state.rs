use std::sync::{Arc, RwLock};

use crate::application::{ChatWithDataUseCase, IngestDatasetUseCase, PredictPriceUseCase};
use crate::domain::laptop::Laptop;
use crate::domain::llm_config::LLMConfig;
use crate::infrastructure::llm_clients::LLMClient;

/// Shared backend state. The dataset is the only mutable piece: uploads
/// replace it wholesale, everything else reads a snapshot.
pub struct AppState {
    pub dataset: RwLock<Vec<Laptop>>,
    pub llm_config: LLMConfig,
    pub ingest_use_case: IngestDatasetUseCase,
    pub predict_use_case: PredictPriceUseCase,
    pub chat_use_case: ChatWithDataUseCase,
}

impl AppState {
    /// `default_dataset` is injected rather than read from a constant here,
    /// so startup and tests choose their own fixture.
    pub fn new(
        llm_config: LLMConfig,
        llm_client: Arc<dyn LLMClient + Send + Sync>,
        default_dataset: Vec<Laptop>,
    ) -> Self {
        Self {
            dataset: RwLock::new(default_dataset),
            llm_config,
            ingest_use_case: IngestDatasetUseCase::new(),
            predict_use_case: PredictPriceUseCase::new(llm_client.clone()),
            chat_use_case: ChatWithDataUseCase::new(llm_client),
        }
    }

    /// Snapshot of the current dataset, taken so no lock is held across
    /// provider calls.
    pub fn dataset_snapshot(&self) -> Vec<Laptop> {
        self.dataset.read().unwrap().clone()
    }
}
