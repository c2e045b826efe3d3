//! Lambda entrypoint: build clients from config and run one dispatch.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::helpers;
use crate::clients::{CompletionProvider, LlmClient, MessageSender, TwilioClient};
use crate::core::config::{AppConfig, DeliveryPolicy};
use crate::dispatcher::NotificationDispatcher;
use crate::errors::NotifyError;

pub use self::function_handler as handler;

/// Lambda handler. The event payload is accepted but never read.
///
/// # Errors
///
/// Returns an error when configuration is invalid, the completion fails, or
/// (legacy policy only) the first message cannot be sent.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_org_id.clone(),
        config.openai_model.clone(),
    );
    let twilio = TwilioClient::new(
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
    );

    handle(&config, &llm, &twilio).await.map_err(|e| {
        error!("Invocation failed: {}", e);
        Error::from(e)
    })
}

/// Runs one invocation against the given upstream clients and builds the response.
///
/// # Errors
///
/// Propagates whatever [`NotificationDispatcher::dispatch`] fails with.
pub async fn handle(
    config: &AppConfig,
    completions: &dyn CompletionProvider,
    sender: &dyn MessageSender,
) -> Result<Value, NotifyError> {
    info!(policy = ?config.delivery_policy, "Dispatching quote");

    let report = NotificationDispatcher::new(completions, sender)
        .dispatch(config)
        .await?;

    info!(sent = report.sent_sids().len(), "Dispatch finished");

    Ok(match config.delivery_policy {
        DeliveryPolicy::Legacy => helpers::ok_hello(),
        DeliveryPolicy::Independent => helpers::dispatch_response(&report),
    })
}
