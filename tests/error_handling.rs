use portfolio_feed::error::{FeedError, Result};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = FeedError::Api {
        status: 404,
        message: "Not Found".to_string(),
    };
    assert_eq!(format!("{}", error), "GitHub API error: 404 — Not Found");

    let error = FeedError::Api {
        status: 500,
        message: "server on fire".to_string(),
    };
    assert_eq!(format!("{}", error), "GitHub API error: 500 — server on fire");
}

#[test]
fn test_api_error_has_no_source() {
    let error = FeedError::Api {
        status: 403,
        message: "rate limited".to_string(),
    };
    assert!(error.source().is_none());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: FeedError = io_error.into();
    assert!(matches!(error, FeedError::Io(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error: FeedError = json_error.into();
    assert!(matches!(error, FeedError::Json(_)));
    assert!(error.source().is_some());
}

#[test]
fn test_result_type() {
    fn returns_result() -> Result<String> {
        Ok("success".to_string())
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");

    fn returns_error() -> Result<String> {
        Err(FeedError::Api {
            status: 502,
            message: "Bad Gateway".to_string(),
        })
    }

    assert!(returns_error().is_err());
}
