//! Twilio Programmable Messaging client

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{HTTP_CLIENT, MessageSender};
use crate::core::models::OutboundMessage;
use crate::errors::NotifyError;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SmsRequest<'a> {
    body: &'a str,
    from: &'a str,
    to: &'a str,
}

#[derive(Debug, Deserialize)]
struct SmsResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioErrorResponse {
    code: Option<i64>,
    message: String,
}

/// Human-readable message for a failed Messages call.
#[must_use]
pub fn twilio_error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<TwilioErrorResponse>(body) {
        Ok(TwilioErrorResponse {
            code: Some(code),
            message,
        }) => format!("{message} (code {code})"),
        Ok(TwilioErrorResponse { message, .. }) => message,
        Err(_) => format!("{status}: {body}"),
    }
}

/// Decodes a Messages response into the message `sid`.
///
/// # Errors
///
/// Returns a `TwilioError` for non-2xx statuses or a body without `sid`.
pub fn parse_message_sid(status: StatusCode, body: &str) -> Result<String, NotifyError> {
    if !status.is_success() {
        return Err(NotifyError::TwilioError(twilio_error_message(status, body)));
    }

    serde_json::from_str::<SmsResponse>(body)
        .map(|parsed| parsed.sid)
        .map_err(|e| NotifyError::TwilioError(format!("Failed to parse Twilio response: {e}")))
}

pub struct TwilioClient {
    account_sid: String,
    auth_token: String,
}

impl TwilioClient {
    #[must_use]
    pub fn new(account_sid: String, auth_token: String) -> Self {
        Self {
            account_sid,
            auth_token,
        }
    }

    #[must_use]
    pub fn messages_url(&self) -> String {
        format!(
            "{TWILIO_API_BASE}/Accounts/{}/Messages.json",
            self.account_sid
        )
    }
}

#[async_trait]
impl MessageSender for TwilioClient {
    async fn send(&self, message: &OutboundMessage) -> Result<String, NotifyError> {
        let form = SmsRequest {
            body: &message.body,
            from: &message.from,
            to: &message.to,
        };

        let response = HTTP_CLIENT
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(|e| NotifyError::HttpError(format!("Twilio API request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::HttpError(format!("Failed to read Twilio response: {e}")))?;

        parse_message_sid(status, &body)
    }
}
