//! RFC 7807 Problem Details record and interop helpers (pure data, no HTTP
//! framework dependencies)

use crate::extract;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Content type for Problem Details as per RFC 7807.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Title reported when the payload carries no usable problem information.
pub const DEFAULT_TITLE: &str = "Server Error";

/// Status reported when the payload carries no usable status code.
pub const DEFAULT_STATUS: u16 = 500;

/// Returns `true` if a `Content-Type` header value identifies an RFC 7807
/// payload.
///
/// Media-type parameters (e.g. `; charset=utf-8`) and ASCII case are ignored.
#[must_use]
pub fn is_problem_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(APPLICATION_PROBLEM_JSON))
}

/// RFC 7807 Problem Details extracted from a failed HTTP response.
///
/// `title` and `status` are always populated; every other member is `Some`
/// only when the source payload exposed it with the correct runtime type.
/// The record owns its data — it is a snapshot of the payload at extraction
/// time, not a view into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct ProblemDetails {
    /// A short, human-readable summary of the problem type.
    #[serde(default = "default_title")]
    pub title: String,
    /// The HTTP status code reported by the payload.
    #[serde(default = "default_status")]
    pub status: u16,
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_url: Option<String>,
    /// A human-readable explanation specific to this occurrence of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Trace id correlating this occurrence with server-side logs.
    #[serde(rename = "traceId", default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// A URI reference that identifies the specific occurrence of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Validation failures keyed by field name.
    ///
    /// Carried as an opaque mapping: entry values are passed through as-is,
    /// with no validation of their internal shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Map<String, Value>>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_status() -> u16 {
    DEFAULT_STATUS
}

impl ProblemDetails {
    /// Normalize a decoded response body into a `ProblemDetails` record.
    ///
    /// Total over the whole `Value` domain: nulls, scalars, arrays and
    /// malformed objects all produce a record carrying the documented
    /// defaults instead of an error.
    pub fn from_response(body: &Value) -> Self {
        extract::normalize(body, None)
    }

    /// Like [`from_response`](Self::from_response), with a caller-supplied
    /// title used when the payload carries neither `title` nor `statusText`.
    ///
    /// Typically the message of the transport error that accompanied the
    /// failed call.
    pub fn from_response_with_fallback(body: &Value, fallback_title: impl Into<String>) -> Self {
        let fallback = fallback_title.into();
        extract::normalize(body, Some(&fallback))
    }

    /// The extracted status as an `http::StatusCode`.
    ///
    /// Payload status codes outside the valid HTTP range collapse to
    /// `500 Internal Server Error`.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_response_reads_well_formed_payload() {
        let body = json!({
            "type": "https://errors.example.com/user.validation",
            "title": "Validation Failed",
            "status": 422,
            "detail": "One or more fields failed validation",
            "traceId": "00-abc-01",
            "instance": "/users/123",
        });

        let problem = ProblemDetails::from_response(&body);
        assert_eq!(problem.title, "Validation Failed");
        assert_eq!(problem.status, 422);
        assert_eq!(
            problem.type_url.as_deref(),
            Some("https://errors.example.com/user.validation")
        );
        assert_eq!(
            problem.detail.as_deref(),
            Some("One or more fields failed validation")
        );
        assert_eq!(problem.trace_id.as_deref(), Some("00-abc-01"));
        assert_eq!(problem.instance.as_deref(), Some("/users/123"));
        assert!(problem.errors.is_none());
    }

    #[test]
    fn status_code_maps_known_status() {
        let problem = ProblemDetails::from_response(&json!({ "status": 404 }));
        assert_eq!(problem.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn status_code_collapses_non_http_status() {
        // 42 fits u16, so extraction keeps it, but it is not a valid HTTP code
        let problem = ProblemDetails::from_response(&json!({ "status": 42 }));
        assert_eq!(problem.status, 42);
        assert_eq!(problem.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn serializes_without_absent_members() {
        let problem = ProblemDetails::from_response(&Value::Null);
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json, json!({ "title": DEFAULT_TITLE, "status": 500 }));
    }

    #[test]
    fn serializes_wire_names_for_type_and_trace_id() {
        let problem = ProblemDetails::from_response(&json!({
            "type": "about:blank",
            "traceId": "00-def-01",
        }));
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["traceId"], "00-def-01");
    }

    #[test]
    fn deserializes_with_defaults_for_missing_title_and_status() {
        let problem: ProblemDetails =
            serde_json::from_value(json!({ "detail": "boom" })).unwrap();
        assert_eq!(problem.title, DEFAULT_TITLE);
        assert_eq!(problem.status, DEFAULT_STATUS);
        assert_eq!(problem.detail.as_deref(), Some("boom"));
    }

    #[test]
    fn problem_json_media_type_detection() {
        assert!(is_problem_json("application/problem+json"));
        assert!(is_problem_json("Application/Problem+JSON"));
        assert!(is_problem_json("application/problem+json; charset=utf-8"));
        assert!(!is_problem_json("application/json"));
        assert!(!is_problem_json("text/plain"));
        assert!(!is_problem_json(""));
    }
}
