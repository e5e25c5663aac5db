//! Bridge between Rust field types and [`FieldValue`].

use super::{FieldType, FieldValue};

/// A Rust type that can back a configuration field.
///
/// Implemented for `bool`, `i64`, `f64`, `String`, and for `Vec<T>` and
/// `Option<T>` of those.
pub trait FieldKind: Clone + Send + Sync + 'static {
    /// Returns the declared type used to parse document text.
    fn field_type() -> FieldType;

    /// Extracts a typed value, returning `None` on a shape mismatch.
    fn from_field_value(value: FieldValue) -> Option<Self>;

    /// Converts the typed value into a [`FieldValue`].
    fn to_field_value(&self) -> FieldValue;
}

impl FieldKind for bool {
    fn field_type() -> FieldType {
        FieldType::Bool
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Bool(flag) => Some(flag),
            _ => None,
        }
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }
}

impl FieldKind for i64 {
    fn field_type() -> FieldType {
        FieldType::Int
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(number) => Some(number),
            _ => None,
        }
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(*self)
    }
}

impl FieldKind for f64 {
    fn field_type() -> FieldType {
        FieldType::Float
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(number) => Some(number),
            _ => None,
        }
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl FieldKind for String {
    fn field_type() -> FieldType {
        FieldType::String
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::String(text) => Some(text),
            _ => None,
        }
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl<T: FieldKind> FieldKind for Vec<T> {
    fn field_type() -> FieldType {
        FieldType::List(Box::new(T::field_type()))
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::List(items) => items.into_iter().map(T::from_field_value).collect(),
            _ => None,
        }
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::List(self.iter().map(FieldKind::to_field_value).collect())
    }
}

impl<T: FieldKind> FieldKind for Option<T> {
    fn field_type() -> FieldType {
        FieldType::Optional(Box::new(T::field_type()))
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::None => Some(None),
            other => T::from_field_value(other).map(Some),
        }
    }

    fn to_field_value(&self) -> FieldValue {
        self.as_ref().map_or(FieldValue::None, FieldKind::to_field_value)
    }
}
