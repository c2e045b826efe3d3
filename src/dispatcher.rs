//! Quote generation and SMS fan-out for a single invocation.

use tracing::{error, info};

use crate::clients::{CompletionProvider, MessageSender};
use crate::core::config::{AppConfig, DeliveryPolicy};
use crate::core::models::{
    DeliveryStatus, DispatchReport, OutboundMessage, QUOTE_PROMPT, RecipientOutcome,
};
use crate::errors::NotifyError;

/// Requests one completion and texts it to the configured recipients.
pub struct NotificationDispatcher<'a> {
    completions: &'a dyn CompletionProvider,
    sender: &'a dyn MessageSender,
}

impl<'a> NotificationDispatcher<'a> {
    #[must_use]
    pub fn new(completions: &'a dyn CompletionProvider, sender: &'a dyn MessageSender) -> Self {
        Self {
            completions,
            sender,
        }
    }

    /// # Errors
    ///
    /// Fails when the completion call fails or yields no candidates. Under
    /// [`DeliveryPolicy::Legacy`] a failure of the first send is also returned.
    pub async fn dispatch(&self, config: &AppConfig) -> Result<DispatchReport, NotifyError> {
        let quote = self.fetch_quote().await?;

        let deliveries = match config.delivery_policy {
            DeliveryPolicy::Legacy => self.send_legacy(config, &quote).await?,
            DeliveryPolicy::Independent => self.send_independent(config, &quote).await,
        };

        Ok(DispatchReport {
            completion: quote,
            deliveries,
        })
    }

    async fn fetch_quote(&self) -> Result<String, NotifyError> {
        let choices = self.completions.complete(QUOTE_PROMPT).await?;
        info!("Received {} completion choice(s)", choices.len());

        let quote = choices
            .into_iter()
            .next()
            .ok_or(NotifyError::EmptyCompletion)?;

        #[cfg(feature = "debug-logs")]
        info!("Completion text:\n{}", quote);

        Ok(quote)
    }

    fn message_for(config: &AppConfig, body: &str, to: &str) -> OutboundMessage {
        OutboundMessage {
            body: body.to_string(),
            from: config.twilio_from_number.clone(),
            to: to.to_string(),
        }
    }

    // First send propagates, second send is logged and swallowed.
    async fn send_legacy(
        &self,
        config: &AppConfig,
        quote: &str,
    ) -> Result<Vec<RecipientOutcome>, NotifyError> {
        let [(first_slot, first), (second_slot, second)] = config
            .recipient_slots()
            .map(|(slot, to)| (slot, to.unwrap_or_default()));
        let mut outcomes = Vec::with_capacity(2);

        let sid = self
            .sender
            .send(&Self::message_for(config, quote, first))
            .await?;
        info!(recipient = %first, sid = %sid, "Message sent");
        outcomes.push(RecipientOutcome {
            slot: first_slot,
            recipient: first.to_string(),
            status: DeliveryStatus::Sent { sid },
        });

        let status = match self
            .sender
            .send(&Self::message_for(config, quote, second))
            .await
        {
            Ok(sid) => {
                info!(recipient = %second, sid = %sid, "Message sent");
                DeliveryStatus::Sent { sid }
            }
            Err(e) => {
                error!(recipient = %second, "{}", e);
                DeliveryStatus::Failed {
                    error: e.to_string(),
                }
            }
        };
        outcomes.push(RecipientOutcome {
            slot: second_slot,
            recipient: second.to_string(),
            status,
        });

        Ok(outcomes)
    }

    async fn send_independent(&self, config: &AppConfig, quote: &str) -> Vec<RecipientOutcome> {
        let mut outcomes = Vec::with_capacity(2);

        for (slot, recipient) in config.recipient_slots() {
            let Some(to) = recipient else {
                info!(slot, "Recipient not configured, skipping");
                outcomes.push(RecipientOutcome {
                    slot,
                    recipient: String::new(),
                    status: DeliveryStatus::Skipped,
                });
                continue;
            };

            let status = match self.sender.send(&Self::message_for(config, quote, to)).await {
                Ok(sid) => {
                    info!(recipient = %to, sid = %sid, "Message sent");
                    DeliveryStatus::Sent { sid }
                }
                Err(e) => {
                    error!(recipient = %to, "Failed to send message: {}", e);
                    DeliveryStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };

            outcomes.push(RecipientOutcome {
                slot,
                recipient: to.to_string(),
                status,
            });
        }

        outcomes
    }
}
