use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to access Twilio API: {0}")]
    TwilioError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Completion response contained no choices")]
    EmptyCompletion,
}

impl From<reqwest::Error> for NotifyError {
    fn from(error: reqwest::Error) -> Self {
        NotifyError::HttpError(error.to_string())
    }
}
