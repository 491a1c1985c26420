//! Alpaca API response types.
//!
//! Account data is passed through as raw JSON, so only the error body is
//! modelled here.

use serde::Deserialize;

/// Error body returned by Alpaca on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct AlpacaErrorResponse {
    /// Numeric error code, when present.
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    /// Error message.
    pub message: String,
}

impl AlpacaErrorResponse {
    /// Error code rendered as a string.
    pub fn code_string(&self) -> Option<String> {
        self.code.as_ref().map(|code| match code {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_code() {
        let body = r#"{"code": 40410000, "message": "position does not exist"}"#;
        let parsed: AlpacaErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code_string().as_deref(), Some("40410000"));
        assert_eq!(parsed.message, "position does not exist");
    }

    #[test]
    fn parses_missing_code() {
        let parsed: AlpacaErrorResponse =
            serde_json::from_str(r#"{"message": "forbidden"}"#).unwrap();
        assert!(parsed.code_string().is_none());
    }
}
