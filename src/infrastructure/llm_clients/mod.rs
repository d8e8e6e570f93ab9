pub mod gemini;
pub mod openai;

use crate::domain::chat::ChatTurn;
use crate::domain::error::Result;
use crate::domain::llm_config::{LLMConfig, LLMProvider};
use async_trait::async_trait;
use gemini::GeminiClient;
use openai::OpenAIClient;

/// Transport to the external model provider. The call may fail; callers at
/// the capability layer substitute sentinel fallbacks instead of propagating.
#[async_trait]
pub trait LLMClient {
    /// Free-form completion: optional system instruction, replayed turn
    /// history, and the current user query.
    async fn generate(
        &self,
        config: &LLMConfig,
        system: &str,
        history: &[ChatTurn],
        user: &str,
    ) -> Result<String>;

    /// Completion constrained to a JSON document matching `schema`.
    async fn generate_structured(
        &self,
        config: &LLMConfig,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String>;
}

pub struct RouterClient {
    gemini: GeminiClient,
    openai: OpenAIClient,
}

impl RouterClient {
    pub fn new() -> Self {
        Self {
            gemini: GeminiClient::new(),
            openai: OpenAIClient::new(),
        }
    }
}

impl Default for RouterClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for RouterClient {
    async fn generate(
        &self,
        config: &LLMConfig,
        system: &str,
        history: &[ChatTurn],
        user: &str,
    ) -> Result<String> {
        match config.provider {
            LLMProvider::Gemini => self.gemini.generate(config, system, history, user).await,
            LLMProvider::OpenAI => self.openai.generate(config, system, history, user).await,
        }
    }

    async fn generate_structured(
        &self,
        config: &LLMConfig,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String> {
        match config.provider {
            LLMProvider::Gemini => self.gemini.generate_structured(config, prompt, schema).await,
            LLMProvider::OpenAI => self.openai.generate_structured(config, prompt, schema).await,
        }
    }
}
