//! Client modules for external API interactions

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

use crate::core::models::OutboundMessage;
use crate::errors::NotifyError;

pub mod llm_client;
pub mod twilio_client;

pub use llm_client::LlmClient;
pub use twilio_client::TwilioClient;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Produces candidate completions for a prompt.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns every candidate text, in provider order.
    async fn complete(&self, prompt: &str) -> Result<Vec<String>, NotifyError>;
}

/// Hands a single SMS to the messaging provider.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Returns the provider-assigned message identifier.
    async fn send(&self, message: &OutboundMessage) -> Result<String, NotifyError>;
}
