pub mod use_cases;

pub use use_cases::chat_with_data::ChatWithDataUseCase;
pub use use_cases::ingest_dataset::IngestDatasetUseCase;
pub use use_cases::predict_price::PredictPriceUseCase;
