//! Client-side RFC 7807 Problem Details extraction (pure data model, no HTTP
//! framework dependencies)
//!
//! Servers that follow RFC 7807 report failures as `application/problem+json`
//! bodies, but real-world error payloads are frequently partial, mistyped, or
//! not problem details at all. This crate normalizes whatever a failed call
//! actually returned into a fully-populated [`ProblemDetails`] record:
//! - every member is read through a type guard, so a present-but-mistyped
//!   member is treated exactly like an absent one;
//! - `title` and `status` always come back populated (`"Server Error"` / 500
//!   when the payload carries nothing usable);
//! - extraction is total — no input value can make it fail.
//!
//! The input boundary is `serde_json::Value`: the caller (an HTTP client such
//! as `modkit-http`) detects the failure status and decodes the body; this
//! crate's contract begins once it receives some decoded value, however
//! malformed.
//!
//! # Example
//!
//! ```
//! use problem_details::ProblemDetails;
//! use serde_json::json;
//!
//! let body = json!({
//!     "title": "Unprocessable Entity",
//!     "status": 422,
//!     "errors": { "email": ["Email is already in use"] },
//! });
//!
//! let problem = ProblemDetails::from_response(&body);
//! assert_eq!(problem.title, "Unprocessable Entity");
//! assert_eq!(problem.status, 422);
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod extract;
pub mod problem;

pub use problem::{
    APPLICATION_PROBLEM_JSON, DEFAULT_STATUS, DEFAULT_TITLE, ProblemDetails, is_problem_json,
};

use serde_json::Value;

/// Normalize a decoded response body into a [`ProblemDetails`] record.
///
/// This is the free-function form of [`ProblemDetails::from_response`]. The
/// optional `fallback_title` is used when the payload itself carries neither
/// a `title` nor a `statusText` member.
pub fn extract(body: &Value, fallback_title: Option<&str>) -> ProblemDetails {
    extract::normalize(body, fallback_title)
}
