use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::models::optimization::{
    FieldCompleteness, OptimizationResult, ResultSet, UNKNOWN_LABEL,
};

/// Outcome of normalizing one optimizer payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub results: ResultSet,
    /// Set when the payload was not an array at all.
    pub malformed: bool,
}

/// Turns an untrusted optimizer payload into display-safe rows.
pub struct ResultReconciler;

impl ResultReconciler {
    /// One row per array element, whatever shape the element has.
    pub fn normalize(raw: &Value) -> Reconciliation {
        let Some(items) = raw.as_array() else {
            warn!(
                payload_type = json_type(raw),
                "Optimizer payload is not an array"
            );
            return Reconciliation {
                results: ResultSet::empty(),
                malformed: true,
            };
        };

        let results = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item.as_object() {
                Some(fields) => normalize_row(fields),
                None => {
                    warn!(
                        index,
                        row_type = json_type(item),
                        "Result row is not an object"
                    );
                    OptimizationResult::default()
                }
            })
            .collect();

        Reconciliation {
            results,
            malformed: false,
        }
    }
}

fn normalize_row(fields: &Map<String, Value>) -> OptimizationResult {
    let (file, file_present) = label(fields, "file");
    let (original_size, original_size_present) = label(fields, "original_size");
    let (optimized_size, optimized_size_present) = label(fields, "optimized_size");
    let (original_bytes, original_bytes_present) = count(fields, "original_bytes");
    let (optimized_bytes, optimized_bytes_present) = count(fields, "optimized_bytes");
    let (bytes_saved, bytes_saved_present) = count(fields, "bytes_saved");

    OptimizationResult {
        file,
        original_size,
        optimized_size,
        original_bytes,
        optimized_bytes,
        bytes_saved,
        completeness: FieldCompleteness {
            file: file_present,
            original_size: original_size_present,
            optimized_size: optimized_size_present,
            original_bytes: original_bytes_present,
            optimized_bytes: optimized_bytes_present,
            bytes_saved: bytes_saved_present,
        },
    }
}

fn label(fields: &Map<String, Value>, key: &str) -> (String, bool) {
    match fields.get(key).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => (s.to_string(), true),
        _ => (UNKNOWN_LABEL.to_string(), false),
    }
}

fn count(fields: &Map<String, Value>, key: &str) -> (i64, bool) {
    match fields.get(key).and_then(integer) {
        Some(n) => (n, true),
        None => (0, false),
    }
}

// Integral floats such as 400.0 are accepted; fractions and overflow are not.
fn integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    let f = number.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
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
