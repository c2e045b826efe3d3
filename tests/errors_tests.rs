use hilly_rizz::errors::NotifyError;
use std::error::Error;

#[test]
fn test_notify_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = NotifyError::EmptyCompletion;
    assert_error(&error);
}

#[test]
fn test_notify_error_display() {
    let error = NotifyError::TwilioError("The 'To' number  is not a valid phone number.".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access Twilio API: The 'To' number  is not a valid phone number."
    );

    let error = NotifyError::OpenAIError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = NotifyError::ConfigError("OPENAI_API_KEY: not set".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: OPENAI_API_KEY: not set"
    );

    assert_eq!(
        format!("{}", NotifyError::EmptyCompletion),
        "Completion response contained no choices"
    );
}

#[test]
fn test_notify_error_into_lambda_error() {
    let err: lambda_runtime::Error = NotifyError::HttpError("timed out".to_string()).into();
    assert!(err.to_string().contains("timed out"));

    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> NotifyError {
        NotifyError::from(err)
    }
}
