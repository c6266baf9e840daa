use serenity::http::{ErrorResponse, HttpError};

/// Code Serenity assigns when Discord's error body could not be decoded as JSON.
const UNDECODED_BODY_CODE: isize = -1;

/// Formats an unsuccessful Discord REST response for users and logs.
///
/// Prefers Discord's own error code and message, falling back to the HTTP status when
/// the response carried no usable JSON body.
///
/// # Returns
/// - `"API Error {code}: {message}"` - Discord returned a JSON error
/// - `"HTTP Error {status}: {reason}"` - Otherwise
pub fn format_rest_error(response: &ErrorResponse) -> String {
    describe(
        response.error.code,
        &response.error.message,
        response.status_code.as_u16(),
        response.status_code.canonical_reason(),
    )
}

/// Formats any Serenity error, using `format_rest_error` for REST failures.
pub fn format_error(error: &serenity::Error) -> String {
    match error {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            format_rest_error(response)
        }
        other => other.to_string(),
    }
}

fn describe(code: isize, message: &str, status: u16, reason: Option<&str>) -> String {
    if code != UNDECODED_BODY_CODE && !message.is_empty() {
        return format!("API Error {}: {}", code, message);
    }

    format!("HTTP Error {}: {}", status, reason.unwrap_or("Unknown"))
}
