//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenOutcome;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// URL to shorten. A missing scheme is treated as `https://`.
    #[validate(
        required(message = "URL is required"),
        length(max = 2048, message = "URL must be at most 2048 characters")
    )]
    pub long_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub long_url: String,
    pub short_url: String,
    pub is_new: bool,
    pub message: &'static str,
}

impl ShortenResponse {
    pub fn new(outcome: ShortenOutcome, short_url: String) -> Self {
        let message = if outcome.is_new {
            "URL shortened successfully"
        } else {
            "URL was already shortened"
        };

        Self {
            short_code: outcome.record.short_code,
            long_url: outcome.record.long_url,
            short_url,
            is_new: outcome.is_new,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_fails_validation() {
        let req: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_too_long_url_fails_validation() {
        let req = ShortenRequest {
            long_url: Some(format!("https://example.com/{}", "a".repeat(2048))),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        let req = ShortenRequest {
            long_url: Some(format!("https://example.com/{}", "é".repeat(1500))),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_camel_case_field() {
        let req: ShortenRequest =
            serde_json::from_str(r#"{"longUrl": "https://example.com"}"#).unwrap();
        assert_eq!(req.long_url.as_deref(), Some("https://example.com"));
        assert!(req.validate().is_ok());
    }
}
