// OpenAI-compatible chat-completion client.
use crate::generator::traits::Generator;
use crate::model::{ChatMessage, GeneratorError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, model: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }
}

#[async_trait::async_trait]
impl Generator for OpenAiGenerator {
    async fn generate(&self, history: &[ChatMessage]) -> Result<String, GeneratorError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": history,
        });

        let response = match timeout(
            Duration::from_secs(30),
            self.client
                .post(COMPLETIONS_URL)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send(),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                warn!("completion request failed: {:?}", e);
                return Err(GeneratorError::ApiError(e.to_string()));
            }
            Err(_) => {
                warn!("completion request timed out");
                return Err(GeneratorError::Timeout);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_else(|_| "unknown".into());
            warn!("completion API responded [{}]: {}", status, detail);
            return Err(GeneratorError::ApiError(format!("{status}: {detail}")));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::ApiError(e.to_string()))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(GeneratorError::EmptyCompletion)?;

        info!("completion received ({} chars)", reply.len());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_construction_succeeds_with_defaults() {
        assert!(OpenAiGenerator::new("sk-test".into(), "gpt-3.5-turbo".into()).is_ok());
    }

    #[test]
    fn completion_wire_format_parses() {
        let raw = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "We stock all-season tires." } }
            ]
        }"#;
        let parsed: CompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content,
            "We stock all-season tires."
        );
    }

    #[test]
    fn history_serializes_with_roles() {
        let history = [
            ChatMessage::user("tires for nissan pathfinder"),
            ChatMessage::assistant("Found 2 matching tires:"),
        ];
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json[0]["role"], "user");
        assert_eq!(json[1]["role"], "assistant");
    }
}
