//
//  cloudinary-admin
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared by every Admin operation:
//!
//! - [`ApiError`] - Unified error type, keyed by HTTP status
//! - [`ApiResponse`] - The JSON object returned by the service
//! - [`RateLimit`] - Admin API quota parsed from response headers
//! - Cursor pagination helpers (re-exported from [`pagination`])
//!
//! # Example
//!
//! ```rust
//! use cloudinary_admin::api::common::ApiError;
//!
//! fn describe(result: Result<(), ApiError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(ApiError::NotFound(message)) => format!("missing: {message}"),
//!         Err(e) => format!("failed: {e}"),
//!     }
//! }
//!
//! let err = ApiError::from_status(404, "Resource not found - sample".to_string());
//! assert_eq!(describe(Err(err)), "missing: Resource not found - sample");
//! ```

use std::ops::Deref;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Admin API operations.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `BadRequest` | Malformed or invalid parameters | 400 |
/// | `AuthorizationRequired` | Missing or invalid credentials | 401 |
/// | `NotAllowed` | Credentials lack permission | 403 |
/// | `NotFound` | Resource does not exist | 404 |
/// | `AlreadyExists` | Resource being created already exists | 409 |
/// | `RateLimited` | Admin API quota exhausted | 420 |
/// | `GeneralError` | Server-side failure | 500 |
/// | `UnexpectedStatus` | Any other non-success status | other |
/// | `Network` | Transport failure | N/A |
/// | `InvalidResponse` | Body was not a JSON object | N/A |
/// | `Config` | Missing cloud name or credentials | N/A |
///
/// The status-keyed variants carry the service's message text verbatim, so
/// their `Display` output is exactly what the service said.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request was malformed or contained invalid parameters.
    #[error("{0}")]
    BadRequest(String),

    /// Authentication credentials were missing or rejected.
    #[error("{0}")]
    AuthorizationRequired(String),

    /// The credentials are valid but not allowed to perform the operation.
    #[error("{0}")]
    NotAllowed(String),

    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The resource being created already exists.
    #[error("{0}")]
    AlreadyExists(String),

    /// The account exceeded its Admin API rate limit.
    #[error("{0}")]
    RateLimited(String),

    /// The service failed internally.
    #[error("{0}")]
    GeneralError(String),

    /// A non-success status outside the known table.
    #[error("Server returned unexpected status code - {status} - {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be parsed as a JSON object.
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The client is missing a cloud name, credentials or a valid base URL.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Maps an HTTP status and message onto the matching variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::BadRequest(message),
            401 => Self::AuthorizationRequired(message),
            403 => Self::NotAllowed(message),
            404 => Self::NotFound(message),
            409 => Self::AlreadyExists(message),
            420 => Self::RateLimited(message),
            500 => Self::GeneralError(message),
            status => Self::UnexpectedStatus {
                status,
                body: message,
            },
        }
    }

    /// The HTTP status behind this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthorizationRequired(_) => Some(401),
            Self::NotAllowed(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::AlreadyExists(_) => Some(409),
            Self::RateLimited(_) => Some(420),
            Self::GeneralError(_) => Some(500),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidResponse(_) | Self::Config(_) => None,
        }
    }

    /// Short name of the failure kind, e.g. `"Not Found"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "Bad Request",
            Self::AuthorizationRequired(_) => "Authorization Required",
            Self::NotAllowed(_) => "Not Allowed",
            Self::NotFound(_) => "Not Found",
            Self::AlreadyExists(_) => "Already Exists",
            Self::RateLimited(_) => "Rate Limited",
            Self::GeneralError(_) => "General Error",
            Self::UnexpectedStatus { .. } => "Unexpected Status",
            Self::Network(_) => "Network Error",
            Self::InvalidResponse(_) => "Invalid Response",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Extracts the human-readable message from an Admin API error body.
///
/// The service reports errors as `{"error": {"message": "..."}}`. A bare
/// `{"message": "..."}` is also accepted; anything else is returned as-is.
pub fn error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    body.to_string()
}

/// Admin API quota reported alongside a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimit {
    /// Calls allowed in the current window.
    pub limit: u64,
    /// Calls left in the current window.
    pub remaining: u64,
    /// When the window resets, if the service said so.
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    pub const LIMIT_HEADER: &'static str = "x-featureratelimit-limit";
    pub const REMAINING_HEADER: &'static str = "x-featureratelimit-remaining";
    pub const RESET_HEADER: &'static str = "x-featureratelimit-reset";

    /// Parses the three rate-limit header values.
    ///
    /// Returns `None` unless both the limit and the remaining count are
    /// present and numeric. The reset time is an RFC 2822 date.
    pub fn parse(limit: Option<&str>, remaining: Option<&str>, reset: Option<&str>) -> Option<Self> {
        let limit = limit?.trim().parse().ok()?;
        let remaining = remaining?.trim().parse().ok()?;
        let reset = reset
            .and_then(|r| DateTime::parse_from_rfc2822(r.trim()).ok())
            .map(|r| r.with_timezone(&Utc));
        Some(Self {
            limit,
            remaining,
            reset,
        })
    }

    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
        Self::parse(
            header(Self::LIMIT_HEADER),
            header(Self::REMAINING_HEADER),
            header(Self::RESET_HEADER),
        )
    }
}

/// A snapshot of the JSON object returned by one Admin API call.
///
/// `ApiResponse` dereferences to the underlying `serde_json::Map`, so fields
/// are read with `get`, indexing, or the list helpers below.
///
/// # Example
///
/// ```rust
/// use cloudinary_admin::ApiResponse;
/// use serde_json::json;
///
/// let page = ApiResponse::from_value(json!({
///     "resources": [{"public_id": "sample"}],
///     "next_cursor": "8edbc61040178db60b0973ca9494bf3a"
/// }))
/// .unwrap();
///
/// assert_eq!(page.list("resources").len(), 1);
/// assert_eq!(page.next_cursor(), Some("8edbc61040178db60b0973ca9494bf3a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    body: Map<String, Value>,
    rate_limit: Option<RateLimit>,
}

impl ApiResponse {
    pub fn new(body: Map<String, Value>) -> Self {
        Self {
            body,
            rate_limit: None,
        }
    }

    /// Wraps a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponse`] if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        Ok(Self::new(serde_json::from_value(value)?))
    }

    pub fn with_rate_limit(mut self, rate_limit: Option<RateLimit>) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    pub fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// The pagination cursor of a list response, absent on the last page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.body.get("next_cursor").and_then(Value::as_str)
    }

    /// The array stored under `key`, or an empty slice.
    pub fn list(&self, key: &str) -> &[Value] {
        self.body
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.body
    }
}

impl Deref for ApiResponse {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

impl Serialize for ApiResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_table() {
        let cases = [
            (400, "Bad Request"),
            (401, "Authorization Required"),
            (403, "Not Allowed"),
            (404, "Not Found"),
            (409, "Already Exists"),
            (420, "Rate Limited"),
            (500, "General Error"),
            (502, "Unexpected Status"),
        ];
        for (status, kind) in cases {
            let err = ApiError::from_status(status, "message".to_string());
            assert_eq!(err.kind(), kind);
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn test_error_displays_remote_message() {
        let err = ApiError::from_status(400, "Illegal value for parameter ocr".to_string());
        assert_eq!(err.to_string(), "Illegal value for parameter ocr");
    }

    #[test]
    fn test_error_message_formats() {
        assert_eq!(
            error_message(r#"{"error": {"message": "Resource not found - x"}}"#),
            "Resource not found - x"
        );
        assert_eq!(error_message(r#"{"message": "plain"}"#), "plain");
        assert_eq!(error_message("<html>gateway</html>"), "<html>gateway</html>");
    }

    #[test]
    fn test_rate_limit_parse() {
        let limit = RateLimit::parse(Some("500"), Some("499"), Some("Wed, 21 Oct 2015 07:28:00 GMT"))
            .unwrap();
        assert_eq!(limit.limit, 500);
        assert_eq!(limit.remaining, 499);
        assert_eq!(limit.reset.unwrap().to_rfc3339(), "2015-10-21T07:28:00+00:00");

        assert!(RateLimit::parse(None, Some("1"), None).is_none());
        assert!(RateLimit::parse(Some("x"), Some("1"), None).is_none());
    }

    #[test]
    fn test_response_accessors() {
        let response = ApiResponse::from_value(json!({"status": "ok"})).unwrap();
        assert_eq!(response.get("status"), Some(&json!("ok")));
        assert_eq!(response.next_cursor(), None);
        assert!(response.list("resources").is_empty());
        assert!(ApiResponse::from_value(json!([1, 2])).is_err());
    }
}
