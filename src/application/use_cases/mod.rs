pub mod aggregation;
pub mod chat_with_data;
pub mod ingest_dataset;
pub mod predict_price;
