/// Hilly Rizz - a Lambda that texts an AI-written quote to two phone numbers.
///
/// Each invocation asks the `OpenAI` completions API for a short quote and
/// sends it as an SMS through Twilio to the two configured recipients.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for the `OpenAI` and Twilio HTTP APIs
/// - openai-api-rs for the completion request shape
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use hilly_rizz::clients::{LlmClient, TwilioClient};
/// use hilly_rizz::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     hilly_rizz::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let llm = LlmClient::new(config.openai_api_key.clone(), None, None);
///     let twilio = TwilioClient::new(
///         config.twilio_account_sid.clone(),
///         config.twilio_auth_token.clone(),
///     );
///
///     let response = hilly_rizz::api::handler::handle(&config, &llm, &twilio).await?;
///     println!("{response}");
///     Ok(())
/// }
/// ```
pub mod api;
pub mod clients;
pub mod core;
pub mod dispatcher;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Safe to call more than once; later calls are no-ops.
///
/// # Example
///
/// ```
/// hilly_rizz::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
