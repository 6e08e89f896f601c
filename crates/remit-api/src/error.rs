//! Mapping of HTTP failures into [`AppError`].

use reqwest::StatusCode;
use serde_json::Value;

use remit_core::error::{AppError, ErrorKind};

/// Fallback message when the server body carries no `detail`.
const GENERIC_FAILURE: &str = "Request failed";

/// Build an error from a non-success response.
///
/// The back office reports failures as `{"detail": "..."}`; that text is
/// what the screens show. FastAPI-style validation lists are flattened.
pub fn from_status(status: StatusCode, body: &str) -> AppError {
    let message = detail_message(body).unwrap_or_else(|| {
        format!(
            "{GENERIC_FAILURE} ({})",
            status.canonical_reason().unwrap_or(status.as_str())
        )
    });

    let kind = match status {
        StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
        StatusCode::FORBIDDEN => ErrorKind::Authorization,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY | StatusCode::CONFLICT => {
            ErrorKind::Validation
        }
        _ => ErrorKind::Transport,
    };

    AppError::new(kind, message)
}

/// Map a client-side `reqwest` failure (connect, timeout, decode).
pub fn from_reqwest(err: reqwest::Error) -> AppError {
    let kind = if err.is_decode() {
        ErrorKind::Serialization
    } else {
        ErrorKind::Transport
    };
    AppError::with_source(kind, format!("HTTP request failed: {err}"), err)
}

fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_is_surfaced() {
        let err = from_status(StatusCode::UNAUTHORIZED, r#"{"detail":"Identifiants invalides"}"#);
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, "Identifiants invalides");
    }

    #[test]
    fn test_validation_list_is_flattened() {
        let body = r#"{"detail":[{"msg":"field required"},{"msg":"value is not a valid float"}]}"#;
        let err = from_status(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "field required; value is not a valid float");
    }

    #[test]
    fn test_plain_body_falls_back() {
        let err = from_status(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(err.message, "Request failed (Bad Gateway)");
    }
}
