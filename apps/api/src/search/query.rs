//! Query normalization: untrusted JSON in, canonical `SearchQuery` out.
//!
//! Total over every JSON value. Missing keys, nulls and wrong types all land on
//! defaults; nothing here can fail.

use serde_json::{Map, Number, Value};

use crate::models::query::{DEFAULT_LIMIT, DEFAULT_PAGE, DEFAULT_SORT_BY};
use crate::models::SearchQuery;

/// Builds the canonical query from a parsed request body.
///
/// Text fields are coerced with [`coerce_text`] and trimmed; `limit`, `page`
/// and `sortBy` fall back to their defaults when nothing usable remains.
/// Flags use plain truthiness, so the client is expected to send JSON booleans.
/// A body that is not an object normalizes like `{}`.
pub fn normalize_query(body: &Value) -> SearchQuery {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let text = |key: &str| coerce_text(fields.get(key));
    let text_or = |key: &str, default: &str| {
        let value = text(key);
        if value.is_empty() {
            default.to_string()
        } else {
            value
        }
    };

    SearchQuery {
        keyword: text("keyword"),
        location: text("location"),
        date_since_posted: text("dateSincePosted"),
        job_type: text("jobType"),
        remote_filter: text("remoteFilter"),
        salary: text("salary"),
        experience_level: text("experienceLevel"),
        limit: text_or("limit", DEFAULT_LIMIT),
        page: text_or("page", DEFAULT_PAGE),
        sort_by: text_or("sortBy", DEFAULT_SORT_BY),
        has_verification: is_truthy(fields.get("has_verification")),
        under_ten_applicants: is_truthy(fields.get("under_10_applicants")),
    }
}

/// Renders a scalar as trimmed text. Falsy values, arrays and objects read as "".
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) if !is_zero(n) => number_text(n),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Whole-valued floats render without a fraction, so `50.0` reads as "50".
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => !is_zero(n),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn is_zero(n: &Number) -> bool {
    n.as_f64().is_some_and(|f| f == 0.0)
}
