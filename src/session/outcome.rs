//! Classification of a response into success-with-body, success-without-
//! an-actionable-body, or failure.
//!
//! A body is "not actionable" when it is empty or a JSON falsy value
//! (`null`, `false`, `0`, `""`); the backend answers with such bodies when
//! the resource exists but has nothing to hand out yet.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::api::FetchError;
use crate::net::types::HttpResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// 2xx with a decodable body.
    Body(T),
    /// 2xx whose body carries nothing to act on.
    Empty,
    /// Non-2xx status.
    Failure(u16),
}

/// Classify `resp`, decoding the body as `T` when it is actionable.
///
/// # Errors
///
/// Returns `FetchError::Decode` when a 2xx body is neither falsy nor valid
/// JSON for `T`.
pub fn classify<T: DeserializeOwned>(resp: &HttpResponse) -> Result<Outcome<T>, FetchError> {
    if !resp.ok() {
        return Ok(Outcome::Failure(resp.status));
    }
    let text = resp.body.trim();
    if text.is_empty() {
        return Ok(Outcome::Empty);
    }
    let value: Value = serde_json::from_str(text).map_err(|e| FetchError::Decode(e.to_string()))?;
    if is_falsy(&value) {
        return Ok(Outcome::Empty);
    }
    serde_json::from_value(value)
        .map(Outcome::Body)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
