//! Manual renames and property overrides keyed by source type.

use std::collections::HashMap;

use crate::model::{Attribute, TargetType};
use crate::schema::TypeId;

/// Replacement for one property of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyOverride {
    /// Source field name the override applies to.
    pub name: String,
    /// Replaces the mapped property type when set.
    pub ty: Option<TargetType>,
    /// Appended after the attributes the walker synthesizes.
    pub attributes: Vec<Attribute>,
}

impl PropertyOverride {
    /// An override that changes nothing yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            attributes: Vec::new(),
        }
    }

    /// Replace the property type.
    pub fn with_type(mut self, ty: TargetType) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Everything overridden for one source type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeOverride {
    /// Model name replacing the declared one.
    pub name: Option<String>,
    /// Property overrides, at most one per name.
    pub properties: Vec<PropertyOverride>,
}

/// The disambiguation table.
#[derive(Debug, Clone, Default)]
pub struct Disambiguations {
    entries: HashMap<TypeId, TypeOverride>,
}

impl Disambiguations {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of source types with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no type has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rename the model generated for `ty`. Later calls win.
    pub fn rename(&mut self, ty: TypeId, name: impl Into<String>) -> &mut Self {
        self.entries.entry(ty).or_default().name = Some(name.into());
        self
    }

    /// Add a property override for `ty`, replacing one with the same name.
    pub fn override_property(&mut self, ty: TypeId, property: PropertyOverride) -> &mut Self {
        let entry = self.entries.entry(ty).or_default();
        if let Some(existing) = entry
            .properties
            .iter_mut()
            .find(|prop| prop.name == property.name)
        {
            *existing = property;
        } else {
            entry.properties.push(property);
        }
        self
    }

    /// Entry for `ty`.
    pub fn get(&self, ty: TypeId) -> Option<&TypeOverride> {
        self.entries.get(&ty)
    }

    /// Replacement name for `ty`, if any.
    pub fn name_for(&self, ty: TypeId) -> Option<&str> {
        self.entries.get(&ty)?.name.as_deref()
    }

    /// Override for property `name` of `ty`, if any.
    pub fn property_for(&self, ty: TypeId, name: &str) -> Option<&PropertyOverride> {
        self.entries
            .get(&ty)?
            .properties
            .iter()
            .find(|prop| prop.name == name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::NamedType;
    use crate::schema::Schema;

    #[test]
    fn test_rename_and_lookup() {
        let mut schema = Schema::new();
        let summary = schema.declare_struct("container", "Summary");
        let other = schema.declare_struct("container", "Port");
        let mut table = Disambiguations::new();
        table.rename(summary, "ContainerListResponse");

        assert_eq!(table.name_for(summary), Some("ContainerListResponse"));
        assert_eq!(table.name_for(other), None);
    }

    #[test]
    fn test_property_override_replaces_same_name() {
        let mut schema = Schema::new();
        let status = schema.declare_struct("swarm", "TaskStatus");
        let mut table = Disambiguations::new();
        table
            .override_property(
                status,
                PropertyOverride::new("State").with_type(TargetType::model("string")),
            )
            .override_property(
                status,
                PropertyOverride::new("State").with_type(TargetType::model("TaskState")),
            );

        let entry = table.get(status).unwrap();
        assert_eq!(entry.properties.len(), 1);
        assert_eq!(
            table.property_for(status, "State").unwrap().ty,
            Some(TargetType::Named(NamedType::local("TaskState")))
        );
        assert!(table.property_for(status, "Err").is_none());
        assert_eq!(entry.name, None);
    }
}
