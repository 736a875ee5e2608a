use thiserror::Error;

/// Everything a request can fail with. All variants surface to callers as a
/// single displayable message (the hook boundary recovers, never panics).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The fetch itself rejected (DNS, CORS, offline).
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status; the message comes from the response body when present.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// 2xx response whose body did not parse as the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Pull the server-provided `message` field out of an error body, falling
/// back to `fallback` when the body has none (or is not JSON at all).
pub fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").cloned())
        .and_then(|message| message.as_str().map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let message = error_message_from_body(r#"{"message":"Pet not found"}"#, "Something went wrong");
        assert_eq!(message, "Pet not found");
    }

    #[test]
    fn missing_or_empty_message_falls_back() {
        assert_eq!(
            error_message_from_body(r#"{"error":"nope"}"#, "Something went wrong"),
            "Something went wrong"
        );
        assert_eq!(
            error_message_from_body(r#"{"message":""}"#, "Something went wrong"),
            "Something went wrong"
        );
    }

    #[test]
    fn non_json_body_falls_back() {
        assert_eq!(
            error_message_from_body("<html>502 Bad Gateway</html>", "Failed to fetch data"),
            "Failed to fetch data"
        );
    }

    #[test]
    fn server_error_displays_its_message_only() {
        let error = RequestError::Server { status: 403, message: "Admins only".to_string() };
        assert_eq!(error.to_string(), "Admins only");
    }
}
