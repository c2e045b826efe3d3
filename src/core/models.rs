use serde::Serialize;

pub const DEFAULT_COMPLETION_MODEL: &str = "text-davinci-003";
pub const QUOTE_PROMPT: &str = "Give a quote to rizz up my girlfriend";
pub const QUOTE_TEMPERATURE: f32 = 0.5;
pub const QUOTE_MAX_TOKENS: i32 = 100;

/// One SMS to be handed to the messaging provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub body: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent { sid: String },
    Failed { error: String },
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipientOutcome {
    /// Variable the recipient number is read from.
    pub slot: &'static str,
    pub recipient: String,
    #[serde(flatten)]
    pub status: DeliveryStatus,
}

impl RecipientOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self.status, DeliveryStatus::Failed { .. })
    }
}

/// Result of one invocation of the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub completion: String,
    pub deliveries: Vec<RecipientOutcome>,
}

impl DispatchReport {
    #[must_use]
    pub fn any_failed(&self) -> bool {
        self.deliveries.iter().any(RecipientOutcome::is_failure)
    }

    /// Identifiers of every message the provider accepted.
    #[must_use]
    pub fn sent_sids(&self) -> Vec<&str> {
        self.deliveries
            .iter()
            .filter_map(|d| match &d.status {
                DeliveryStatus::Sent { sid } => Some(sid.as_str()),
                _ => None,
            })
            .collect()
    }
}
