//! Result of executing one API request.

use crate::types::{ApiStatus, StatusOrigin};
use crate::{Error, ErrorContext, Result};

/// Outcome of one execution: API status, HTTP code, raw body and typed result.
///
/// `http_code` is `0` and `raw_body` is `None` when no usable response was
/// obtained (see [`ApiStatus::network_error`]).
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: ApiStatus,
    http_code: u16,
    raw_body: Option<String>,
    result: Option<T>,
}

/// The three branches a finished execution can land in.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    /// An HTTP response arrived but did not yield a result.
    Unsuccessful { http_code: u16, status: ApiStatus },
    /// No response, or the body was not a JSON object.
    NetworkError(Error),
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(
        status: ApiStatus,
        http_code: u16,
        raw_body: Option<String>,
        result: Option<T>,
    ) -> Self {
        Self {
            status,
            http_code,
            raw_body,
            result,
        }
    }

    pub(crate) fn network_error(details: Option<String>) -> Self {
        let status = match details {
            Some(d) => ApiStatus::network_error().with_details(d),
            None => ApiStatus::network_error(),
        };
        Self::new(status, 0, None, None)
    }

    pub fn status(&self) -> &ApiStatus {
        &self.status
    }

    pub fn http_code(&self) -> u16 {
        self.http_code
    }

    pub fn raw_body(&self) -> Option<&str> {
        self.raw_body.as_deref()
    }

    pub fn is_successful(&self) -> bool {
        (200..300).contains(&self.http_code) && self.result.is_some()
    }

    pub fn is_network_error(&self) -> bool {
        self.status.is_network_error()
    }

    pub fn or_none(&self) -> Option<&T> {
        self.result.as_ref()
    }

    fn failure(&self) -> Error {
        match self.status.origin() {
            StatusOrigin::Network => Error::network(self.status.message()),
            StatusOrigin::Unmarshal => Error::unmarshal_with_context(
                self.status.message(),
                ErrorContext::new().with_source("response"),
            ),
            StatusOrigin::Remote | StatusOrigin::Http => {
                Error::remote(self.http_code, self.status.message())
            }
        }
    }

    /// The typed result, or the error describing why there is none.
    pub fn get(&self) -> Result<&T> {
        match &self.result {
            Some(r) => Ok(r),
            None => Err(self.failure()),
        }
    }

    pub fn into_result(self) -> Result<T> {
        match self.result {
            Some(r) => Ok(r),
            None => Err(self.failure()),
        }
    }

    pub fn into_outcome(self) -> Outcome<T> {
        if self.status.is_network_error() {
            return Outcome::NetworkError(self.failure());
        }
        match self.result {
            Some(r) if (200..300).contains(&self.http_code) => Outcome::Success(r),
            _ => Outcome::Unsuccessful {
                http_code: self.http_code,
                status: self.status,
            },
        }
    }

    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            status: self.status,
            http_code: self.http_code,
            raw_body: self.raw_body,
            result: self.result.map(f),
        }
    }
}
