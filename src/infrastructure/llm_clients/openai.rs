use super::LLMClient;
use crate::domain::chat::{ChatRole, ChatTurn};
use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;
use serde_json::json;

/// Client for OpenAI-compatible chat-completions endpoints.
pub struct OpenAIClient {
    client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn api_key(config: &LLMConfig) -> Result<String> {
        config
            .api_key
            .clone()
            .ok_or_else(|| AppError::LLMError("Missing API key for OpenAI provider".to_string()))
    }

    fn endpoint(config: &LLMConfig) -> String {
        format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        )
    }

    fn messages(system: &str, history: &[ChatTurn], user: &str) -> Vec<serde_json::Value> {
        let mut messages = Vec::new();
        if !system.trim().is_empty() {
            messages.push(json!({ "role": "system", "content": system }));
        }
        for turn in history {
            let role = match turn.role {
                ChatRole::User => "user",
                ChatRole::Model => "assistant",
            };
            messages.push(json!({ "role": role, "content": turn.text }));
        }
        messages.push(json!({ "role": "user", "content": user }));
        messages
    }

    async fn call(&self, config: &LLMConfig, body: serde_json::Value) -> Result<String> {
        let api_key = Self::api_key(config)?;
        let url = Self::endpoint(config);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LLMError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::LLMError(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::LLMError(format!("Failed to parse JSON: {}", e)))?;

        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::LLMError("Invalid response format".to_string()))
    }
}

impl Default for OpenAIClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for OpenAIClient {
    async fn generate(
        &self,
        config: &LLMConfig,
        system: &str,
        history: &[ChatTurn],
        user: &str,
    ) -> Result<String> {
        let body = json!({
            "model": config.model,
            "messages": Self::messages(system, history, user),
            "max_tokens": config.max_tokens,
            "temperature": config.temperature,
        });

        self.call(config, body).await
    }

    async fn generate_structured(
        &self,
        config: &LLMConfig,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String> {
        // No responseSchema equivalent on this API surface: request JSON
        // output and carry the schema in the prompt itself.
        let prompt = format!(
            "{}\n\nRespond with a single JSON object matching this schema:\n{}",
            prompt, schema
        );
        let body = json!({
            "model": config.model,
            "messages": Self::messages("", &[], &prompt),
            "max_tokens": config.max_tokens,
            "temperature": config.temperature,
            "response_format": { "type": "json_object" },
        });

        self.call(config, body).await
    }
}
