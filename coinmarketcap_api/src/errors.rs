//! Error types for the API client.

use std::fmt;

use serde_json::Value;

use crate::types::Status;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL and path did not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// The server answered with a non-success status and a body that is not JSON.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not valid JSON, or the payload did not match the expected type.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    /// The body parsed as JSON but carried no status block in any known envelope shape.
    #[error("Response from {url} has no status block")]
    MissingStatus { url: String, body: String },
    /// The provider reported a positive `error_code`.
    #[error(transparent)]
    Api(Box<ApiError>),
}

impl Error {
    /// Returns the provider error kind when this is an [`Error::Api`].
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api(e) => Some(e.kind),
            _ => None,
        }
    }

    /// Returns the provider error when this is an [`Error::Api`].
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// True for any of the minute, daily, monthly or IP rate limit kinds.
    pub fn is_rate_limited(&self) -> bool {
        self.api_kind()
            .is_some_and(|k| k.category() == ErrorCategory::RateLimit)
    }

    /// True for the invalid, missing, required, disabled and not-authorized key kinds.
    pub fn is_auth_error(&self) -> bool {
        self.api_kind()
            .is_some_and(|k| k.category() == ErrorCategory::Authentication)
    }
}

impl From<ApiError> for Error {
    fn from(e: ApiError) -> Self {
        Error::Api(Box::new(e))
    }
}

/// Coarse grouping of [`ApiErrorKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    Payment,
    RateLimit,
    Request,
}

/// The closed set of provider error kinds, keyed by `status.error_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 1001
    InvalidApiKey,
    /// 1002
    MissingApiKey,
    /// 1003
    PlanRequiresPayment,
    /// 1004
    PlanPaymentExpired,
    /// 1005
    ApiKeyRequired,
    /// 1006
    PlanNotAuthorized,
    /// 1007
    ApiKeyDisabled,
    /// 1008
    MinuteRateLimitReached,
    /// 1009
    DailyRateLimitReached,
    /// 1010
    MonthlyRateLimitReached,
    /// 1011
    IpRateLimitReached,
    /// Any other positive code.
    GenericRequestError,
}

impl ApiErrorKind {
    /// Maps a provider `error_code` to its kind. Unknown codes fall back to
    /// [`ApiErrorKind::GenericRequestError`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1001 => ApiErrorKind::InvalidApiKey,
            1002 => ApiErrorKind::MissingApiKey,
            1003 => ApiErrorKind::PlanRequiresPayment,
            1004 => ApiErrorKind::PlanPaymentExpired,
            1005 => ApiErrorKind::ApiKeyRequired,
            1006 => ApiErrorKind::PlanNotAuthorized,
            1007 => ApiErrorKind::ApiKeyDisabled,
            1008 => ApiErrorKind::MinuteRateLimitReached,
            1009 => ApiErrorKind::DailyRateLimitReached,
            1010 => ApiErrorKind::MonthlyRateLimitReached,
            1011 => ApiErrorKind::IpRateLimitReached,
            _ => ApiErrorKind::GenericRequestError,
        }
    }

    /// The code this kind is registered under, or `None` for the generic fallback.
    pub fn code(&self) -> Option<i64> {
        match self {
            ApiErrorKind::InvalidApiKey => Some(1001),
            ApiErrorKind::MissingApiKey => Some(1002),
            ApiErrorKind::PlanRequiresPayment => Some(1003),
            ApiErrorKind::PlanPaymentExpired => Some(1004),
            ApiErrorKind::ApiKeyRequired => Some(1005),
            ApiErrorKind::PlanNotAuthorized => Some(1006),
            ApiErrorKind::ApiKeyDisabled => Some(1007),
            ApiErrorKind::MinuteRateLimitReached => Some(1008),
            ApiErrorKind::DailyRateLimitReached => Some(1009),
            ApiErrorKind::MonthlyRateLimitReached => Some(1010),
            ApiErrorKind::IpRateLimitReached => Some(1011),
            ApiErrorKind::GenericRequestError => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiErrorKind::InvalidApiKey
            | ApiErrorKind::MissingApiKey
            | ApiErrorKind::ApiKeyRequired
            | ApiErrorKind::PlanNotAuthorized
            | ApiErrorKind::ApiKeyDisabled => ErrorCategory::Authentication,
            ApiErrorKind::PlanRequiresPayment | ApiErrorKind::PlanPaymentExpired => {
                ErrorCategory::Payment
            }
            ApiErrorKind::MinuteRateLimitReached
            | ApiErrorKind::DailyRateLimitReached
            | ApiErrorKind::MonthlyRateLimitReached
            | ApiErrorKind::IpRateLimitReached => ErrorCategory::RateLimit,
            ApiErrorKind::GenericRequestError => ErrorCategory::Request,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ApiErrorKind::InvalidApiKey => "Invalid API key",
                ApiErrorKind::MissingApiKey => "Missing API key",
                ApiErrorKind::PlanRequiresPayment => "Plan requires payment",
                ApiErrorKind::PlanPaymentExpired => "Plan payment expired",
                ApiErrorKind::ApiKeyRequired => "API key required",
                ApiErrorKind::PlanNotAuthorized => "Plan not authorized",
                ApiErrorKind::ApiKeyDisabled => "API key disabled",
                ApiErrorKind::MinuteRateLimitReached => "Minute rate limit reached",
                ApiErrorKind::DailyRateLimitReached => "Daily rate limit reached",
                ApiErrorKind::MonthlyRateLimitReached => "Monthly rate limit reached",
                ApiErrorKind::IpRateLimitReached => "IP rate limit reached",
                ApiErrorKind::GenericRequestError => "Request error",
            }
        )
    }
}

/// An error reported by the provider through the response status block.
///
/// Carries the full [`Status`] of the failed call together with whatever
/// `data` payload came back alongside it (usually `null`).
#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Status,
    pub data: Value,
}

impl ApiError {
    /// Builds the error for a status whose `error_code` is positive.
    pub fn new(status: Status, data: Value) -> Self {
        let kind = ApiErrorKind::from_code(status.error_code.unwrap_or_default());
        Self { kind, status, data }
    }

    /// Builds a [`ApiErrorKind::GenericRequestError`] for a status block
    /// that could not be read, whatever its `error_code`.
    pub fn generic(status: Status, data: Value) -> Self {
        Self {
            kind: ApiErrorKind::GenericRequestError,
            status,
            data,
        }
    }

    pub fn code(&self) -> i64 {
        self.status.error_code.unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.status.error_message.as_deref().unwrap_or_default()
    }

    pub fn credit_count(&self) -> Option<i64> {
        self.status.credit_count
    }

    pub fn elapsed(&self) -> Option<i64> {
        self.status.elapsed
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.status.timestamp.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.status.notice.as_deref()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.kind, self.code())?;
        if !self.message().is_empty() {
            write!(f, ": {}", self.message())?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: i64, message: &str) -> Status {
        Status {
            error_code: Some(code),
            error_message: Some(message.to_string()),
            credit_count: Some(0),
            ..Default::default()
        }
    }

    #[test]
    fn every_registered_code_maps_back_to_itself() {
        for code in 1001..=1011 {
            let kind = ApiErrorKind::from_code(code);
            assert_ne!(kind, ApiErrorKind::GenericRequestError);
            assert_eq!(kind.code(), Some(code));
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_generic() {
        for code in [1, 400, 500, 1000, 1012, 9999] {
            assert_eq!(
                ApiErrorKind::from_code(code),
                ApiErrorKind::GenericRequestError
            );
        }
        assert_eq!(ApiErrorKind::GenericRequestError.code(), None);
    }

    #[test]
    fn categories() {
        assert_eq!(
            ApiErrorKind::from_code(1001).category(),
            ErrorCategory::Authentication
        );
        assert_eq!(
            ApiErrorKind::from_code(1004).category(),
            ErrorCategory::Payment
        );
        assert_eq!(
            ApiErrorKind::from_code(1011).category(),
            ErrorCategory::RateLimit
        );
        assert_eq!(
            ApiErrorKind::from_code(42).category(),
            ErrorCategory::Request
        );
    }

    #[test]
    fn api_error_display_includes_message_and_code() {
        let err = ApiError::new(
            status(1008, "You've exceeded your API Key's HTTP request rate limit."),
            Value::Null,
        );
        let text = err.to_string();
        assert!(text.contains("Minute rate limit reached"));
        assert!(text.contains("1008"));
        assert!(text.contains("rate limit"));
    }

    #[test]
    fn error_helpers() {
        let err: Error = ApiError::new(status(1009, "daily"), Value::Null).into();
        assert!(err.is_rate_limited());
        assert!(!err.is_auth_error());
        assert_eq!(err.api_kind(), Some(ApiErrorKind::DailyRateLimitReached));

        let err: Error = ApiError::new(status(1002, "missing"), Value::Null).into();
        assert!(err.is_auth_error());

        let err = Error::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(err.api_kind(), None);
        assert!(err.to_string().contains("502"));
    }
}
