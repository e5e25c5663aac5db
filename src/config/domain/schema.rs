//! Statically declared configuration records and their field tables.

use std::fmt;

use super::{ConversionError, FieldKind, FieldType, FieldValue};

/// A configuration record owned by the core, a plugin or a responder.
///
/// Each record declares its fields once through [`Configuration::fields`].
/// The table maps field names to typed getters and setters so that
/// assignment is a table lookup rather than runtime attribute discovery.
///
/// # Examples
///
/// ```
/// use prapti::config::domain::{Configuration, FieldTable, FieldValue};
///
/// #[derive(Debug, Clone, Default)]
/// struct EchoConfiguration {
///     prefix: String,
///     repeat: i64,
/// }
///
/// impl Configuration for EchoConfiguration {
///     fn fields() -> FieldTable<Self> {
///         FieldTable::<Self>::new()
///             .field("prefix", |config| &config.prefix, |config| &mut config.prefix)
///             .field("repeat", |config| &config.repeat, |config| &mut config.repeat)
///     }
/// }
///
/// let table = EchoConfiguration::fields();
/// let mut config = EchoConfiguration::default();
/// table.set(&mut config, "repeat", FieldValue::Int(3)).expect("int field");
/// assert_eq!(config.repeat, 3);
/// ```
pub trait Configuration: Clone + fmt::Debug + Send + Sync + 'static {
    /// Builds the field table for this record type.
    fn fields() -> FieldTable<Self>;
}

type Getter<C> = Box<dyn Fn(&C) -> FieldValue + Send + Sync>;
type Setter<C> = Box<dyn Fn(&mut C, FieldValue) -> bool + Send + Sync>;

struct FieldAccessor<C> {
    name: &'static str,
    field_type: FieldType,
    get: Getter<C>,
    set: Setter<C>,
}

/// Name-indexed accessors for the fields of a [`Configuration`].
pub struct FieldTable<C> {
    fields: Vec<FieldAccessor<C>>,
}

impl<C: 'static> FieldTable<C> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declares a field backed by a struct member.
    #[must_use]
    pub fn field<T: FieldKind>(
        mut self,
        name: &'static str,
        get: fn(&C) -> &T,
        get_mut: fn(&mut C) -> &mut T,
    ) -> Self {
        self.fields.push(FieldAccessor {
            name,
            field_type: T::field_type(),
            get: Box::new(move |config: &C| get(config).to_field_value()),
            set: Box::new(move |config: &mut C, value: FieldValue| {
                T::from_field_value(value).is_some_and(|typed| {
                    *get_mut(config) = typed;
                    true
                })
            }),
        });
        self
    }

    /// Iterates over the declared field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    /// Returns `true` when a field with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.accessor(name).is_some()
    }

    /// Returns the declared type of a field.
    #[must_use]
    pub fn field_type(&self, name: &str) -> Option<&FieldType> {
        self.accessor(name).map(|field| &field.field_type)
    }

    /// Reads a field.
    #[must_use]
    pub fn get(&self, config: &C, name: &str) -> Option<FieldValue> {
        self.accessor(name).map(|field| (field.get)(config))
    }

    /// Writes a field. The value is coerced to the field type first.
    ///
    /// Returns `Ok(false)` when no field has this name.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the value does not fit the field.
    pub fn set(&self, config: &mut C, name: &str, value: FieldValue) -> Result<bool, ConversionError> {
        let Some(field) = self.accessor(name) else {
            return Ok(false);
        };
        let coerced = field.field_type.coerce(&value)?;
        if (field.set)(config, coerced) {
            Ok(true)
        } else {
            Err(ConversionError::new(
                &field.field_type,
                value.to_string(),
                "value does not match the field",
            ))
        }
    }

    fn accessor(&self, name: &str) -> Option<&FieldAccessor<C>> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl<C: 'static> Default for FieldTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for FieldTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.fields
                    .iter()
                    .map(|field| (field.name, field.field_type.to_string())),
            )
            .finish()
    }
}
