//! Mapping of a raw HTTP exchange onto an [`ApiResponse`].

use crate::response::ApiResponse;
use crate::transport::{RawResponse, TransportError};
use crate::types::ApiStatus;
use crate::unmarshal::JsonUnmarshaler;
use serde_json::Value;
use tracing::{debug, warn};

/// Outcome of a send attempt that never produced a status line.
pub(crate) fn send_failed<T>(err: &TransportError, request_id: &str) -> ApiResponse<T> {
    warn!(request_id, error = %err, "request failed before a response was received");
    ApiResponse::network_error(Some(err.to_string()))
}

/// Classify a completed exchange.
///
/// - unreadable body, non-JSON body, or a JSON root that is not an object:
///   network error, HTTP code 0, no body kept
/// - otherwise the status is taken from `root.status` (or synthesized from
///   the HTTP code) and, for 2xx codes only, the unmarshaler produces the result
pub(crate) fn classify<T>(
    raw: RawResponse,
    unmarshaler: &dyn JsonUnmarshaler<T>,
    request_id: &str,
) -> ApiResponse<T> {
    let code = raw.status;
    let body = match raw.body {
        Ok(body) => body,
        Err(err) => {
            warn!(request_id, http_code = code, error = %err, "failed to read response body");
            return ApiResponse::network_error(Some(err.to_string()));
        }
    };

    let root: Value = match serde_json::from_str(&body) {
        Ok(v @ Value::Object(_)) => v,
        Ok(_) => {
            warn!(request_id, http_code = code, "response body is not a JSON object");
            return ApiResponse::network_error(Some("response body is not a JSON object".into()));
        }
        Err(err) => {
            warn!(request_id, http_code = code, error = %err, "response body is not valid JSON");
            return ApiResponse::network_error(Some(format!("invalid JSON body: {}", err)));
        }
    };

    let status = root
        .get("status")
        .filter(|s| s.is_object())
        .and_then(|s| serde_json::from_value::<ApiStatus>(s.clone()).ok())
        .unwrap_or_else(|| ApiStatus::from_http(code));

    if !(200..300).contains(&code) {
        debug!(request_id, http_code = code, status_code = status.code, "unsuccessful response");
        return ApiResponse::new(status, code, Some(body), None);
    }

    match unmarshaler.from_json(&root) {
        Ok(result) => {
            debug!(request_id, http_code = code, status_code = status.code, "successful response");
            ApiResponse::new(status, code, Some(body), Some(result))
        }
        Err(err) => {
            warn!(request_id, http_code = code, error = %err, "could not unmarshal successful response");
            ApiResponse::new(
                ApiStatus::unmarshal_error(err.to_string()),
                code,
                Some(body),
                None,
            )
        }
    }
}
