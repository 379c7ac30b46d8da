//! Lookup error categorization.
//!
//! This module maps lookup errors onto the `LookupFailure` categories used for
//! statistics.

use super::types::{LookupError, LookupFailure};

/// Categorizes a `LookupError` into a `LookupFailure`.
pub fn categorize_lookup_error(error: &LookupError) -> LookupFailure {
    match error {
        LookupError::Disabled => LookupFailure::Disabled,
        // Rejected when the client is built, never per request
        LookupError::InvalidUrl(_) => LookupFailure::Other,
        LookupError::Status { status } => categorize_status(*status),
        LookupError::Decode(_) => LookupFailure::Decode,
        LookupError::Http(e) => categorize_reqwest_error(e),
    }
}

fn categorize_status(status: u16) -> LookupFailure {
    match status {
        401 | 403 => LookupFailure::Unauthorized,
        404 => LookupFailure::NotFound,
        429 => LookupFailure::RateLimited,
        500..=599 => LookupFailure::ServerError,
        _ => LookupFailure::HttpStatus,
    }
}

fn categorize_reqwest_error(error: &reqwest::Error) -> LookupFailure {
    if error.is_timeout() {
        LookupFailure::Timeout
    } else if error.is_connect() {
        LookupFailure::Connect
    } else if error.is_decode() {
        LookupFailure::Decode
    } else {
        LookupFailure::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categories() {
        assert_eq!(
            categorize_lookup_error(&LookupError::Status { status: 401 }),
            LookupFailure::Unauthorized
        );
        assert_eq!(
            categorize_lookup_error(&LookupError::Status { status: 403 }),
            LookupFailure::Unauthorized
        );
        assert_eq!(
            categorize_lookup_error(&LookupError::Status { status: 404 }),
            LookupFailure::NotFound
        );
        assert_eq!(
            categorize_lookup_error(&LookupError::Status { status: 429 }),
            LookupFailure::RateLimited
        );
        assert_eq!(
            categorize_lookup_error(&LookupError::Status { status: 503 }),
            LookupFailure::ServerError
        );
        assert_eq!(
            categorize_lookup_error(&LookupError::Status { status: 418 }),
            LookupFailure::HttpStatus
        );
    }

    #[test]
    fn test_disabled_and_decode() {
        assert_eq!(
            categorize_lookup_error(&LookupError::Disabled),
            LookupFailure::Disabled
        );
        let decode = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_eq!(
            categorize_lookup_error(&LookupError::Decode(decode)),
            LookupFailure::Decode
        );
    }

    #[test]
    fn test_invalid_url_counts_as_other() {
        let err = url::Url::parse("not a url").unwrap_err();
        assert_eq!(
            categorize_lookup_error(&LookupError::InvalidUrl(err)),
            LookupFailure::Other
        );
    }

    #[tokio::test]
    async fn test_connect_failure() {
        // Port 9 on localhost has nothing listening in test environments
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .expect_err("nothing should be listening");
        let failure = categorize_lookup_error(&LookupError::Http(err));
        assert!(
            matches!(failure, LookupFailure::Connect | LookupFailure::Other),
            "unexpected category {:?}",
            failure
        );
    }
}
