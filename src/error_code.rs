//! Error classes this crate assigns to unsuccessful HTTP exchanges.
//!
//! The API reports failures as an HTTP status plus a numeric `status.code`
//! in the body. The classes here are derived from the HTTP status only and
//! give callers a stable, coarse identifier to log and match on. The code
//! strings are local to this crate; the API never sends them.
//!
//! | Code  | Category    | Classes                                   |
//! |-------|-------------|-------------------------------------------|
//! | E1xxx | client      | request rejected, fix before resending    |
//! | E2xxx | rate        | rate limit or account quota               |
//! | E3xxx | server      | service failure or timeout                |
//! | E4xxx | operational | state conflict                            |
//! | E9999 | unknown     | status without a mapping                  |
//!
//! ## Example
//!
//! ```rust
//! use classify_lib_rust::error_code::StandardErrorCode;
//!
//! let code = StandardErrorCode::from_http_status(429);
//! assert_eq!(code.code(), "E2001");
//! assert!(code.retryable());
//! assert_eq!(code.category(), "rate");
//! ```

use std::fmt;

/// Canonical error class for an unsuccessful HTTP exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardErrorCode {
    /// E1001: Malformed request, invalid parameters, or missing required fields
    InvalidRequest,
    /// E1002: Invalid, expired, or missing API key
    Authentication,
    /// E1003: Valid key but insufficient scopes
    PermissionDenied,
    /// E1004: Requested model, input, or concept does not exist
    NotFound,
    /// E1005: Payload size limit exceeded (e.g. oversized base64 image)
    RequestTooLarge,
    /// E2001: Request rate limit exceeded
    RateLimited,
    /// E2002: Account usage quota or billing limit reached
    QuotaExhausted,
    /// E3001: Internal server error
    ServerError,
    /// E3002: Service temporarily unavailable
    Overloaded,
    /// E3003: Request timed out before response received
    Timeout,
    /// E4001: State conflict (e.g. duplicate input id)
    Conflict,
    /// E9999: Error could not be classified
    Unknown,
}

impl StandardErrorCode {
    /// Crate-local identifier (e.g., `"E1001"`), also used by `Display`.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "E1001",
            Self::Authentication => "E1002",
            Self::PermissionDenied => "E1003",
            Self::NotFound => "E1004",
            Self::RequestTooLarge => "E1005",
            Self::RateLimited => "E2001",
            Self::QuotaExhausted => "E2002",
            Self::ServerError => "E3001",
            Self::Overloaded => "E3002",
            Self::Timeout => "E3003",
            Self::Conflict => "E4001",
            Self::Unknown => "E9999",
        }
    }

    /// Returns the standard name (e.g., `"invalid_request"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RequestTooLarge => "request_too_large",
            Self::RateLimited => "rate_limited",
            Self::QuotaExhausted => "quota_exhausted",
            Self::ServerError => "server_error",
            Self::Overloaded => "overloaded",
            Self::Timeout => "timeout",
            Self::Conflict => "conflict",
            Self::Unknown => "unknown",
        }
    }

    /// Returns whether repeating the request may succeed.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::Overloaded | Self::Timeout | Self::Conflict
        )
    }

    /// Returns the category: `"client"`, `"rate"`, `"server"`, `"operational"`, or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRequest
            | Self::Authentication
            | Self::PermissionDenied
            | Self::NotFound
            | Self::RequestTooLarge => "client",
            Self::RateLimited | Self::QuotaExhausted => "rate",
            Self::ServerError | Self::Overloaded | Self::Timeout => "server",
            Self::Conflict => "operational",
            Self::Unknown => "unknown",
        }
    }

    /// Maps an HTTP status code to the most likely `StandardErrorCode`.
    ///
    /// Status codes without a standard mapping return `StandardErrorCode::Unknown`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::Authentication,
            402 => Self::QuotaExhausted,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            408 => Self::Timeout,
            409 => Self::Conflict,
            413 => Self::RequestTooLarge,
            429 => Self::RateLimited,
            500 | 502 => Self::ServerError,
            503 => Self::Overloaded,
            504 => Self::Timeout,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for StandardErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
