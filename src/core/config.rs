use std::env;

use crate::errors::NotifyError;

/// How the dispatcher treats a failed send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryPolicy {
    /// First send failure aborts the invocation, second send failure is only logged.
    #[default]
    Legacy,
    /// Every recipient gets its own error boundary; outcomes are reported.
    Independent,
}

impl DeliveryPolicy {
    pub fn parse(raw: &str) -> Result<Self, NotifyError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "legacy" => Ok(Self::Legacy),
            "independent" => Ok(Self::Independent),
            other => Err(NotifyError::ConfigError(format!(
                "DELIVERY_POLICY: unknown policy '{other}'"
            ))),
        }
    }
}

pub const RECIPIENT_VARS: [&str; 2] = ["TWILIO_TO_PHONE_NUMBER_ONE", "TWILIO_TO_PHONE_NUMBER_TWO"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_from_number: String,
    pub twilio_to_number_one: Option<String>,
    pub twilio_to_number_two: Option<String>,
    pub delivery_policy: DeliveryPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, NotifyError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves configuration against an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| NotifyError::ConfigError(format!("{key}: not set")))
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_org_id: optional("OPENAI_ORG_ID"),
            openai_model: optional("OPENAI_MODEL"),
            twilio_account_sid: required("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: required("TWILIO_AUTH_TOKEN")?,
            twilio_from_number: required("TWILIO_FROM_PHONE_NUMBER")?,
            twilio_to_number_one: optional(RECIPIENT_VARS[0]),
            twilio_to_number_two: optional(RECIPIENT_VARS[1]),
            delivery_policy: lookup("DELIVERY_POLICY")
                .map(|raw| DeliveryPolicy::parse(&raw))
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Recipients in send order.
    #[must_use]
    pub fn recipients(&self) -> [Option<&str>; 2] {
        [
            self.twilio_to_number_one.as_deref(),
            self.twilio_to_number_two.as_deref(),
        ]
    }

    /// Recipients in send order, paired with the variable each one is read from.
    #[must_use]
    pub fn recipient_slots(&self) -> [(&'static str, Option<&str>); 2] {
        let [one, two] = self.recipients();
        [(RECIPIENT_VARS[0], one), (RECIPIENT_VARS[1], two)]
    }
}
