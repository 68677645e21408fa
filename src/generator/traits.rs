use crate::model::{ChatMessage, GeneratorError};

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, history: &[ChatMessage]) -> Result<String, GeneratorError>;
}
