//! Namespaced configuration sections with explicit-assignment tracking.

use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;

use super::{Configuration, ConversionError, FieldTable, FieldType, FieldValue, VarBinding};

/// A type-erased configuration namespace stored in the root tree.
///
/// Besides the current values, a section remembers which fields have been
/// explicitly assigned. The flag is set by any successful assignment, even
/// one that writes the default value back, and is what late-bound
/// references consult.
pub trait ConfigSection: fmt::Debug + Send + Sync {
    /// Returns the field names in declaration order.
    fn field_names(&self) -> Vec<&'static str>;

    /// Returns the declared type of a field.
    fn field_type(&self, field: &str) -> Option<&FieldType>;

    /// Reads a field.
    fn get(&self, field: &str) -> Option<FieldValue>;

    /// Writes a field and marks it explicitly assigned.
    ///
    /// Returns `Ok(false)` when the field does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the value does not fit the field; the
    /// field and its assignment flag are left unchanged.
    fn assign(&mut self, field: &str, value: FieldValue) -> Result<bool, ConversionError>;

    /// Returns `true` when the field has been explicitly assigned.
    fn is_assigned(&self, field: &str) -> bool;

    /// Returns the late-bound references declared for this section.
    fn var_bindings(&self) -> &[VarBinding];

    /// Returns the section as [`Any`] for typed access.
    fn as_any(&self) -> &dyn Any;
}

/// A [`ConfigSection`] holding a concrete [`Configuration`] record.
///
/// # Examples
///
/// ```
/// use prapti::config::domain::{
///     ConfigSection, CoreConfiguration, FieldValue, TypedSection,
/// };
///
/// let mut section = TypedSection::new(CoreConfiguration::default());
/// assert!(!section.is_assigned("dry_run"));
///
/// section.assign("dry_run", FieldValue::Bool(false)).expect("bool field");
/// assert!(section.is_assigned("dry_run"));
/// ```
pub struct TypedSection<C: Configuration> {
    value: C,
    table: FieldTable<C>,
    assigned: BTreeSet<String>,
    bindings: Vec<VarBinding>,
}

impl<C: Configuration> TypedSection<C> {
    /// Wraps a record, building its field table.
    #[must_use]
    pub fn new(value: C) -> Self {
        Self {
            value,
            table: C::fields(),
            assigned: BTreeSet::new(),
            bindings: Vec::new(),
        }
    }

    /// Declares late-bound references for fields of this record.
    #[must_use]
    pub fn with_var_bindings(mut self, bindings: impl IntoIterator<Item = VarBinding>) -> Self {
        self.bindings.extend(bindings);
        self
    }

    /// Boxes the section for storage in the root tree.
    #[must_use]
    pub fn boxed(self) -> Box<dyn ConfigSection> {
        Box::new(self)
    }

    /// Returns the stored record as locally assigned.
    #[must_use]
    pub const fn value(&self) -> &C {
        &self.value
    }
}

impl<C: Configuration> ConfigSection for TypedSection<C> {
    fn field_names(&self) -> Vec<&'static str> {
        self.table.names().collect()
    }

    fn field_type(&self, field: &str) -> Option<&FieldType> {
        self.table.field_type(field)
    }

    fn get(&self, field: &str) -> Option<FieldValue> {
        self.table.get(&self.value, field)
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> Result<bool, ConversionError> {
        let found = self.table.set(&mut self.value, field, value)?;
        if found {
            self.assigned.insert(field.to_owned());
        }
        Ok(found)
    }

    fn is_assigned(&self, field: &str) -> bool {
        self.assigned.contains(field)
    }

    fn var_bindings(&self) -> &[VarBinding] {
        &self.bindings
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<C: Configuration> fmt::Debug for TypedSection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedSection")
            .field("value", &self.value)
            .field("assigned", &self.assigned)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}
