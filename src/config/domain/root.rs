//! The root of the configuration tree.

use std::collections::BTreeMap;

use super::{
    CORE_NAMESPACE, ConfigError, ConfigSection, Configuration, CoreConfiguration, FieldValue,
    TypedSection, resolve_var_refs,
};
use crate::diagnostics::DiagnosticsSink;

/// The result of a successful assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedField {
    /// Fully qualified path of the assigned field.
    pub path: String,
    /// The converted value now stored in the field.
    pub value: FieldValue,
}

/// Hierarchical settings store for one run.
///
/// The core namespace `prapti` always exists. Other namespaces are registered
/// by plugins and responders. Paths are dotted: the longest registered
/// namespace prefix selects the section and the rest names the field. An
/// unqualified name is looked up in the core namespace first, then across all
/// other namespaces, and is ambiguous if several namespaces declare it.
#[derive(Debug)]
pub struct RootConfiguration {
    core: TypedSection<CoreConfiguration>,
    sections: BTreeMap<String, Box<dyn ConfigSection>>,
}

impl RootConfiguration {
    /// Creates a tree holding only the default core namespace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: TypedSection::new(CoreConfiguration::default()),
            sections: BTreeMap::new(),
        }
    }

    /// Returns the core settings as currently assigned.
    #[must_use]
    pub const fn core(&self) -> &CoreConfiguration {
        self.core.value()
    }

    /// Registers a section under a namespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateNamespace`] when the namespace is the
    /// core namespace or is already registered.
    pub fn register_section(
        &mut self,
        namespace: impl Into<String>,
        section: Box<dyn ConfigSection>,
    ) -> Result<(), ConfigError> {
        let key = namespace.into();
        if key == CORE_NAMESPACE || self.sections.contains_key(&key) {
            return Err(ConfigError::DuplicateNamespace(key));
        }
        tracing::debug!(namespace = %key, "registered configuration namespace");
        self.sections.insert(key, section);
        Ok(())
    }

    /// Registers a record without late-bound references.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateNamespace`] when the namespace exists.
    pub fn register<C: Configuration>(
        &mut self,
        namespace: impl Into<String>,
        config: C,
    ) -> Result<(), ConfigError> {
        self.register_section(namespace, TypedSection::new(config).boxed())
    }

    /// Returns `true` when the namespace exists.
    #[must_use]
    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.section(namespace).is_some()
    }

    /// Iterates over all namespaces, core first.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        std::iter::once(CORE_NAMESPACE).chain(self.sections.keys().map(String::as_str))
    }

    /// Returns a section by namespace.
    #[must_use]
    pub fn section(&self, namespace: &str) -> Option<&dyn ConfigSection> {
        if namespace == CORE_NAMESPACE {
            return Some(&self.core);
        }
        self.sections.get(namespace).map(AsRef::as_ref)
    }

    /// Returns a section as its concrete record type.
    #[must_use]
    pub fn typed_section<C: Configuration>(&self, namespace: &str) -> Option<&TypedSection<C>> {
        self.section(namespace)?
            .as_any()
            .downcast_ref::<TypedSection<C>>()
    }

    /// Returns a copy of a section's record with its late-bound references
    /// applied against the current tree.
    ///
    /// Returns `None` when the namespace does not exist or holds a different
    /// record type.
    #[must_use]
    pub fn resolve<C: Configuration>(&self, namespace: &str, log: &dyn DiagnosticsSink) -> Option<C> {
        let section = self.typed_section::<C>(namespace)?;
        Some(resolve_var_refs(
            section.value(),
            section.var_bindings(),
            self,
            log,
        ))
    }

    /// Reads a field by path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<FieldValue> {
        let (namespace, field) = self.locate(path).ok()?;
        self.section(&namespace)?.get(&field)
    }

    /// Returns `true` when the field at `path` has been explicitly assigned.
    #[must_use]
    pub fn is_assigned(&self, path: &str) -> bool {
        self.locate(path).is_ok_and(|(namespace, field)| {
            self.section(&namespace)
                .is_some_and(|section| section.is_assigned(&field))
        })
    }

    /// Assigns a field from document text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FieldNotFound`] or
    /// [`ConfigError::AmbiguousField`] when the path does not select exactly
    /// one field, and [`ConfigError::Conversion`] when the text does not
    /// convert to the field type. On error the tree is unchanged.
    pub fn assign(&mut self, path: &str, rhs: &str) -> Result<AssignedField, ConfigError> {
        let (namespace, field) = self.locate(path)?;
        let field_type = self
            .section(&namespace)
            .and_then(|section| section.field_type(&field))
            .cloned()
            .ok_or_else(|| ConfigError::FieldNotFound(path.to_owned()))?;
        let value = field_type
            .parse(rhs)
            .map_err(|source| ConfigError::Conversion {
                path: qualify(&namespace, &field),
                source,
            })?;
        self.store(&namespace, &field, value)
    }

    /// Assigns an already-typed value.
    ///
    /// # Errors
    ///
    /// As for [`RootConfiguration::assign`].
    pub fn assign_value(&mut self, path: &str, value: FieldValue) -> Result<AssignedField, ConfigError> {
        let (namespace, field) = self.locate(path)?;
        self.store(&namespace, &field, value)
    }

    /// Reads a field only if it has been explicitly assigned.
    pub(crate) fn lookup_assigned(&self, path: &str) -> Result<Option<FieldValue>, ConfigError> {
        let (namespace, field) = self.locate(path)?;
        let section = self
            .section(&namespace)
            .ok_or_else(|| ConfigError::FieldNotFound(path.to_owned()))?;
        if section.is_assigned(&field) {
            Ok(section.get(&field))
        } else {
            Ok(None)
        }
    }

    fn store(
        &mut self,
        namespace: &str,
        field: &str,
        value: FieldValue,
    ) -> Result<AssignedField, ConfigError> {
        let path = qualify(namespace, field);
        let section = self
            .section_mut(namespace)
            .ok_or_else(|| ConfigError::FieldNotFound(path.clone()))?;
        match section.assign(field, value) {
            Ok(true) => {}
            Ok(false) => return Err(ConfigError::FieldNotFound(path)),
            Err(source) => return Err(ConfigError::Conversion { path, source }),
        }
        let value = section
            .get(field)
            .ok_or_else(|| ConfigError::FieldNotFound(path.clone()))?;
        tracing::debug!(path = %path, value = %value, "assigned configuration field");
        Ok(AssignedField { path, value })
    }

    fn section_mut(&mut self, namespace: &str) -> Option<&mut (dyn ConfigSection + 'static)> {
        if namespace == CORE_NAMESPACE {
            return Some(&mut self.core);
        }
        self.sections.get_mut(namespace).map(AsMut::as_mut)
    }

    fn locate(&self, path: &str) -> Result<(String, String), ConfigError> {
        let not_found = || ConfigError::FieldNotFound(path.to_owned());

        let mut prefix = path;
        while let Some((namespace, _)) = prefix.rsplit_once('.') {
            if let Some(section) = self.section(namespace) {
                let field = path
                    .strip_prefix(namespace)
                    .and_then(|rest| rest.strip_prefix('.'))
                    .unwrap_or_default();
                return section
                    .field_type(field)
                    .map(|_| (namespace.to_owned(), field.to_owned()))
                    .ok_or_else(not_found);
            }
            prefix = namespace;
        }
        if path.is_empty() || path.contains('.') {
            return Err(not_found());
        }

        if self.core.field_type(path).is_some() {
            return Ok((CORE_NAMESPACE.to_owned(), path.to_owned()));
        }
        let candidates: Vec<&String> = self
            .sections
            .iter()
            .filter(|(_, section)| section.field_type(path).is_some())
            .map(|(namespace, _)| namespace)
            .collect();
        match candidates.as_slice() {
            [] => Err(not_found()),
            [namespace] => Ok(((*namespace).clone(), path.to_owned())),
            _ => Err(ConfigError::AmbiguousField {
                name: path.to_owned(),
                alternatives: candidates
                    .iter()
                    .map(|namespace| qualify(namespace, path))
                    .collect(),
            }),
        }
    }
}

impl Default for RootConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

fn qualify(namespace: &str, field: &str) -> String {
    format!("{namespace}.{field}")
}
