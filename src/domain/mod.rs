pub mod aggregates;
pub mod chat;
pub mod error;
pub mod laptop;
pub mod llm_config;
pub mod prediction;
