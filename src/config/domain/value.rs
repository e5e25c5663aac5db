//! Field types and values, and conversion from document text.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::ConversionError;

/// The declared semantic type of a configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `true` or `false`.
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// 64-bit float.
    Float,
    /// Free text.
    String,
    /// Ordered sequence of the element type.
    List(Box<FieldType>),
    /// The inner type, or no value at all.
    Optional(Box<FieldType>),
}

impl FieldType {
    /// Converts document text into a value of this type.
    ///
    /// Booleans accept `true/false`, `yes/no`, `on/off` and `1/0` in any
    /// case. Sequences accept a JSON array or a comma-separated list.
    /// Optional types accept `none` or `null` for "no value".
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the text is not a valid
    /// representation of this type.
    ///
    /// # Examples
    ///
    /// ```
    /// use prapti::config::domain::{FieldType, FieldValue};
    ///
    /// let list = FieldType::List(Box::new(FieldType::Int));
    /// assert_eq!(
    ///     list.parse("[6, 0, 1]").expect("valid list"),
    ///     FieldValue::List(vec![FieldValue::Int(6), FieldValue::Int(0), FieldValue::Int(1)]),
    /// );
    /// assert!(FieldType::Bool.parse("maybe").is_err());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<FieldValue, ConversionError> {
        let text = raw.trim();
        match self {
            Self::Optional(inner) => {
                if text.eq_ignore_ascii_case("none") || text.eq_ignore_ascii_case("null") {
                    Ok(FieldValue::None)
                } else {
                    inner.parse(raw)
                }
            }
            Self::Bool => parse_bool(text)
                .map(FieldValue::Bool)
                .ok_or_else(|| ConversionError::new(self, text, "expected true or false")),
            Self::Int => text
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|error| ConversionError::new(self, text, error.to_string())),
            Self::Float => text
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|error| ConversionError::new(self, text, error.to_string())),
            Self::String => Ok(FieldValue::String(text.to_owned())),
            Self::List(element) => {
                if text.starts_with('[') {
                    let parsed: Value = serde_json::from_str(text)
                        .map_err(|error| ConversionError::new(self, text, error.to_string()))?;
                    self.from_json(&parsed)
                } else {
                    text.split(',')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(|item| element.parse(item))
                        .collect::<Result<Vec<_>, _>>()
                        .map(FieldValue::List)
                }
            }
        }
    }

    /// Converts a JSON value into a value of this type.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the JSON value has the wrong shape.
    pub fn from_json(&self, value: &Value) -> Result<FieldValue, ConversionError> {
        let mismatch = || ConversionError::new(self, value.to_string(), "unexpected JSON value");
        match (self, value) {
            (Self::Optional(_), Value::Null) => Ok(FieldValue::None),
            (Self::Optional(inner), _) => inner.from_json(value),
            (Self::Bool, Value::Bool(flag)) => Ok(FieldValue::Bool(*flag)),
            (Self::Int, Value::Number(number)) => {
                number.as_i64().map(FieldValue::Int).ok_or_else(mismatch)
            }
            (Self::Float, Value::Number(number)) => {
                number.as_f64().map(FieldValue::Float).ok_or_else(mismatch)
            }
            (Self::String, Value::String(text)) => Ok(FieldValue::String(text.clone())),
            (Self::List(element), Value::Array(items)) => items
                .iter()
                .map(|item| element.from_json(item))
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::List),
            (_, Value::String(text)) => self.parse(text),
            _ => Err(mismatch()),
        }
    }

    /// Converts a value of another field into this type.
    ///
    /// Integers widen to floats; floats narrow to integers only when they
    /// have no fractional part.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the value cannot be represented.
    pub fn coerce(&self, value: &FieldValue) -> Result<FieldValue, ConversionError> {
        let mismatch = || ConversionError::new(self, value.to_string(), "incompatible value");
        match (self, value) {
            (Self::Optional(_), FieldValue::None) => Ok(FieldValue::None),
            (Self::Optional(inner), _) => inner.coerce(value),
            (Self::Bool, FieldValue::Bool(_))
            | (Self::Int, FieldValue::Int(_))
            | (Self::Float, FieldValue::Float(_))
            | (Self::String, FieldValue::String(_)) => Ok(value.clone()),
            (Self::Float, FieldValue::Int(number)) => Ok(FieldValue::Float(int_to_float(*number))),
            (Self::Int, FieldValue::Float(number)) => {
                float_to_int(*number).map(FieldValue::Int).ok_or_else(mismatch)
            }
            (Self::List(element), FieldValue::List(items)) => items
                .iter()
                .map(|item| element.coerce(item))
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::List),
            _ => Err(mismatch()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::String => f.write_str("str"),
            Self::List(element) => write!(f, "list[{element}]"),
            Self::Optional(inner) => write!(f, "{inner}|None"),
        }
    }
}

/// A configuration value.
///
/// Serialises to the natural JSON form: `None` becomes `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value (only valid for optional fields).
    None,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence.
    List(Vec<FieldValue>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Int(number) => write!(f, "{number}"),
            Self::Float(number) => write!(f, "{number}"),
            Self::String(text) => write!(f, "{text:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "configuration integers are small; precision loss above 2^53 is acceptable"
)]
fn int_to_float(number: i64) -> f64 {
    number as f64
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is checked to be integral and within range before casting"
)]
fn float_to_int(number: f64) -> Option<i64> {
    const LIMIT: f64 = 9_007_199_254_740_992.0;
    if number.fract() == 0.0 && number.abs() <= LIMIT {
        Some(number as i64)
    } else {
        None
    }
}
