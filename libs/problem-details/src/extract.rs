//! Field-by-field extraction with defaulting.
//!
//! One resolver per RFC 7807 member, each applying the same guard: the
//! payload must be a JSON object exposing the member with the expected
//! runtime type, otherwise the member's default wins. A present-but-mistyped
//! member is indistinguishable from an absent one. Resolvers are independent
//! of each other; only the title resolver consults a second source.

use crate::problem::{DEFAULT_STATUS, DEFAULT_TITLE, ProblemDetails};
use serde_json::{Map, Value};
use tracing::debug;

/// Assemble a record from a single payload snapshot.
///
/// Total over the whole `Value` domain; cannot panic.
pub(crate) fn normalize(body: &Value, fallback_title: Option<&str>) -> ProblemDetails {
    ProblemDetails {
        title: title(body, fallback_title),
        status: status(body),
        type_url: string_member(body, "type"),
        detail: string_member(body, "detail"),
        trace_id: string_member(body, "traceId"),
        instance: string_member(body, "instance"),
        errors: errors(body),
    }
}

/// `title`, then `statusText` as a secondary source, then the caller's
/// fallback, then [`DEFAULT_TITLE`].
fn title(body: &Value, fallback: Option<&str>) -> String {
    string_member(body, "title")
        .or_else(|| string_member(body, "statusText"))
        .unwrap_or_else(|| fallback.unwrap_or(DEFAULT_TITLE).to_owned())
}

/// `status` if it is an integral JSON number that fits `u16`, else
/// [`DEFAULT_STATUS`]. Numeric strings are mistyped, not coerced.
fn status(body: &Value) -> u16 {
    match body.get("status") {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|raw| u16::try_from(raw).ok())
            .unwrap_or_else(|| {
                debug!(member = "status", value = %n, "ignoring unusable status number");
                DEFAULT_STATUS
            }),
        Some(other) if !other.is_null() => {
            debug!(member = "status", "ignoring mistyped member");
            DEFAULT_STATUS
        }
        _ => DEFAULT_STATUS,
    }
}

/// A named string member, or `None` when absent, null, or mistyped.
fn string_member(body: &Value, member: &'static str) -> Option<String> {
    match body.get(member) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) if !other.is_null() => {
            debug!(member, "ignoring mistyped member");
            None
        }
        _ => None,
    }
}

/// The `errors` mapping, cloned as-is. Entry values are deliberately not
/// validated; anything other than a JSON object is mistyped.
fn errors(body: &Value) -> Option<Map<String, Value>> {
    match body.get("errors") {
        Some(Value::Object(map)) => Some(map.clone()),
        Some(other) if !other.is_null() => {
            debug!(member = "errors", "ignoring mistyped member");
            None
        }
        _ => None,
    }
}
