//! Form field coercion and request payload assembly
//!
//! A submission arrives as an ordered list of (name, value) text pairs. Five
//! designated fields carry numbers and are coerced before serialization;
//! everything else is passed through as text. The record is rebuilt from
//! scratch on every submission - nothing survives a cycle.

use serde_json::{json, Map, Number, Value};

/// Field names whose values are sent as JSON numbers.
pub const NUMERIC_FIELDS: [&str; 5] = [
    "age",
    "hypertension",
    "heart_disease",
    "avg_glucose_level",
    "bmi",
];

/// One submission's coerced field mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord(Map<String, Value>);

impl InputRecord {
    /// Build a record from raw form fields, coercing the numeric ones.
    ///
    /// Coercion reads the longest leading float, ignoring trailing text, so
    /// `"36.6abc"` yields `36.6`. Text with no leading number serializes as
    /// JSON `null`; there is no further validation.
    pub fn from_fields(fields: &[(String, String)]) -> Self {
        let mut record = Map::new();
        for (name, value) in fields {
            let coerced = if NUMERIC_FIELDS.contains(&name.as_str()) {
                parse_float_prefix(value)
                    .and_then(Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            } else {
                Value::String(value.clone())
            };
            record.insert(name.clone(), coerced);
        }
        Self(record)
    }

    /// Wrap the record as the sole element of the `inputs` envelope.
    pub fn into_payload(self) -> Value {
        json!({ "inputs": [Value::Object(self.0)] })
    }

    /// Look up a coerced field value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

/// Parse the longest leading float from `text`: optional sign, digits with
/// at most one decimal point, optional exponent. `None` when no digit leads.
fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let b = s.as_bytes();
    let mut end = 0;

    if matches!(b.first(), Some(&b'+') | Some(&b'-')) {
        end += 1;
    }
    let mantissa_start = end;
    while b.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if b.get(end) == Some(&b'.') {
        end += 1;
        while b.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    if !b[mantissa_start..end].iter().any(u8::is_ascii_digit) {
        return None;
    }

    // Exponent counts only when it carries digits of its own.
    if matches!(b.get(end), Some(&b'e') | Some(&b'E')) {
        let mut exp_end = end + 1;
        if matches!(b.get(exp_end), Some(&b'+') | Some(&b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while b.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
