//! The result-contract sanitizer.
//!
//! Coerces a loosely-shaped result fragment into the bounded, well-typed
//! shape the client contract promises, correcting violations silently.
//! Numeric leaves are clamped to `[0.0, 1.0]` and rounded to 3 decimals —
//! the range the source contract fixed for probability/confidence fields
//! and applies uniformly to every numeric leaf. Recursion stops at a fixed
//! depth to guard against unbounded structures; anything deeper passes
//! through unchanged.

use serde_json::{Map, Number, Value};

use varanno_core::models::AnalysisResult;

use crate::errors::ContractError;

/// Levels of nesting the sanitizer descends into.
pub const MAX_DEPTH: usize = 3;

const REQUIRED_LIST_KEYS: [&str; 3] = ["variants", "traits", "notes"];
const OPTIONAL_OBJECT_KEYS: [&str; 2] = ["protein", "pgs"];

///
/// Sanitize a result fragment.
///
/// Total over any JSON object: required list keys are coerced to `[]`,
/// optional object keys to `null`, numeric leaves clamped and rounded,
/// non-finite numbers nulled, unknown keys preserved. The only error is a
/// non-object top-level value. Idempotent.
///
pub fn sanitize(raw: &Value) -> Result<Value, ContractError> {
    let Value::Object(fragment) = raw else {
        return Err(ContractError::NotAnObject(json_type(raw)));
    };

    let mut fragment = fragment.clone();
    for key in REQUIRED_LIST_KEYS {
        if !matches!(fragment.get(key), Some(Value::Array(_))) {
            fragment.insert(key.to_string(), Value::Array(Vec::new()));
        }
    }
    for key in OPTIONAL_OBJECT_KEYS {
        let wrong_type = matches!(
            fragment.get(key),
            Some(value) if !matches!(value, Value::Object(_) | Value::Null)
        );
        if wrong_type {
            fragment.insert(key.to_string(), Value::Null);
        }
    }

    Ok(sanitize_object(&fragment, MAX_DEPTH))
}

///
/// Serialize a typed [AnalysisResult] and sanitize it into the shape
/// handed to the transport layer.
///
pub fn finalize(result: &AnalysisResult) -> Result<Value, ContractError> {
    sanitize(&serde_json::to_value(result)?)
}

fn sanitize_object(map: &Map<String, Value>, depth: usize) -> Value {
    if depth == 0 {
        return Value::Object(map.clone());
    }
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        let clean = match value {
            Value::Number(n) => clamp_unit(n),
            Value::Object(inner) => sanitize_object(inner, depth - 1),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::Object(inner) => sanitize_object(inner, depth - 1),
                        Value::Number(n) => clamp_unit(n),
                        other => other.clone(),
                    })
                    .collect(),
            ),
            other => other.clone(),
        };
        out.insert(key.clone(), clean);
    }
    Value::Object(out)
}

/// Clamp a numeric leaf to `[0.0, 1.0]`, rounded to 3 decimals; non-finite
/// values become null.
fn clamp_unit(n: &Number) -> Value {
    let Some(x) = n.as_f64() else {
        return Value::Null;
    };
    if !x.is_finite() {
        return Value::Null;
    }
    let clamped = (x.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
    Number::from_f64(clamped).map_or(Value::Null, Value::Number)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
