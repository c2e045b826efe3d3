//! Response builders for the invocation result.

use serde_json::{Value, json};

use crate::core::models::DispatchReport;

pub const ACK_MESSAGE: &str = "hello world";

/// Returns the fixed 200 acknowledgement.
#[must_use]
pub fn ok_hello() -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "message": ACK_MESSAGE }).to_string()
    })
}

/// Returns the acknowledgement with one entry per recipient.
///
/// Any failed send turns the status code into 502.
#[must_use]
pub fn dispatch_response(report: &DispatchReport) -> Value {
    let status_code = if report.any_failed() { 502 } else { 200 };
    json!({
        "statusCode": status_code,
        "body": json!({
            "message": ACK_MESSAGE,
            "deliveries": report.deliveries,
        })
        .to_string()
    })
}
