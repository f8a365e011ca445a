//! Source type to target type mapping.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{NamedType, TargetType};
use crate::registry::ModelSet;
use crate::schema::{Kind, Schema, TypeId};

/// Target name of the zero-size marker type.
pub const EMPTY_STRUCT: &str = "EmptyStruct";

/// Lookup tables consulted when mapping a source type to a target reference.
///
/// Terminal types win over the built-in kind table, which wins over the
/// structural rules.
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    builtins: HashMap<Kind, NamedType>,
    terminals: HashMap<TypeId, TargetType>,
    marker: Option<TypeId>,
}

impl TypeMap {
    /// Empty tables; every scalar kind is unsupported until registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in C# spellings for the primitive kinds.
    pub fn csharp() -> Self {
        let mut map = Self::new();
        for (kind, name) in [
            (Kind::Bool, "bool"),
            (Kind::Int, "long"),
            (Kind::Int8, "sbyte"),
            (Kind::Int16, "short"),
            (Kind::Int32, "int"),
            (Kind::Int64, "long"),
            (Kind::Uint, "ulong"),
            (Kind::Uint8, "byte"),
            (Kind::Uint16, "ushort"),
            (Kind::Uint32, "uint"),
            (Kind::Uint64, "ulong"),
            (Kind::Float32, "float"),
            (Kind::Float64, "double"),
        ] {
            map.builtins.insert(kind, NamedType::value("", name));
        }
        map.builtins.insert(Kind::String, NamedType::local("string"));
        map
    }

    /// Map `ty` to `target` without ever walking it.
    pub fn with_terminal(mut self, ty: TypeId, target: TargetType) -> Self {
        self.terminals.insert(ty, target);
        self
    }

    /// Designate the zero-size marker type. Maps with marker values become
    /// sets and the marker itself is terminal.
    pub fn with_marker(mut self, marker: TypeId) -> Self {
        self.marker = Some(marker);
        self.terminals.insert(marker, TargetType::model(EMPTY_STRUCT));
        self
    }

    /// Whether `ty` maps through the terminal table and is never walked.
    pub fn is_terminal(&self, ty: TypeId) -> bool {
        self.terminals.contains_key(&ty)
    }

    /// Map a source type to its target reference.
    ///
    /// Pointers map to their pointee; callers decide optionality. Structs map
    /// to their registered model name, or their declared name when not yet
    /// registered.
    pub fn map(&self, schema: &Schema, models: &ModelSet, ty: TypeId) -> Result<TargetType> {
        if let Some(target) = self.terminals.get(&ty) {
            return Ok(target.clone());
        }

        let descriptor = &schema[ty];
        if let Some(named) = self.builtins.get(&descriptor.kind()) {
            return Ok(TargetType::Named(named.clone()));
        }

        let elem = |schema: &Schema| {
            descriptor.elem().ok_or_else(|| Error::UnsupportedKind {
                ty: schema.display(ty),
                kind: descriptor.kind().to_string(),
            })
        };

        match descriptor.kind() {
            Kind::Array => Ok(TargetType::Array(Box::new(
                self.map(schema, models, elem(schema)?)?,
            ))),
            Kind::Slice => Ok(TargetType::List(Box::new(
                self.map(schema, models, elem(schema)?)?,
            ))),
            Kind::Map => {
                let key = descriptor.key().ok_or_else(|| Error::UnsupportedKind {
                    ty: schema.display(ty),
                    kind: descriptor.kind().to_string(),
                })?;
                let value = elem(schema)?;
                let key = Box::new(self.map(schema, models, key)?);
                if self.marker == Some(value) {
                    Ok(TargetType::Set(key))
                } else {
                    Ok(TargetType::Dictionary {
                        key,
                        value: Box::new(self.map(schema, models, value)?),
                    })
                }
            }
            Kind::Pointer => self.map(schema, models, elem(schema)?),
            Kind::Struct => {
                if let Some(model) = models.get(ty) {
                    return Ok(TargetType::model(model.name.clone()));
                }
                descriptor
                    .name()
                    .map(TargetType::model)
                    .ok_or_else(|| Error::UnnamedType {
                        path: schema.display(ty),
                    })
            }
            Kind::Interface => Ok(TargetType::Object),
            kind => Err(Error::UnsupportedKind {
                ty: schema.display(ty),
                kind: kind.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::Model;
    use crate::render::Emit;

    fn render(map: &TypeMap, schema: &Schema, models: &ModelSet, ty: TypeId) -> String {
        map.map(schema, models, ty).unwrap().emit()
    }

    #[test]
    fn test_builtin_kinds() {
        let mut schema = Schema::new();
        let map = TypeMap::csharp();
        let models = ModelSet::new();
        for (kind, expected) in [
            (Kind::Bool, "bool"),
            (Kind::Int, "long"),
            (Kind::Int8, "sbyte"),
            (Kind::Int32, "int"),
            (Kind::Uint16, "ushort"),
            (Kind::Uint64, "ulong"),
            (Kind::Float32, "float"),
            (Kind::String, "string"),
        ] {
            let ty = schema.primitive(kind);
            assert_eq!(render(&map, &schema, &models, ty), expected);
        }
    }

    #[test]
    fn test_named_scalar_maps_through_kind() {
        let mut schema = Schema::new();
        let port = schema.named_scalar("nat", "Port", Kind::String);
        let mode = schema.named_scalar("os", "FileMode", Kind::Uint32);
        let map = TypeMap::csharp();
        let models = ModelSet::new();
        assert_eq!(render(&map, &schema, &models, port), "string");
        let target = map.map(&schema, &models, mode).unwrap();
        assert!(target.is_value_type());
        assert_eq!(target.emit(), "uint");
    }

    #[test]
    fn test_collections() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let marker = schema.anonymous_struct(Vec::new());
        let list = schema.slice(string);
        let byte = schema.primitive(Kind::Uint8);
        let arr = schema.array(byte, 32);
        let dict = schema.map(string, list);
        let set = schema.map(string, marker);
        let ptr = schema.pointer(list);
        let map = TypeMap::csharp().with_marker(marker);
        let models = ModelSet::new();

        assert_eq!(render(&map, &schema, &models, list), "IList<string>");
        assert_eq!(render(&map, &schema, &models, arr), "byte[]");
        assert_eq!(
            render(&map, &schema, &models, dict),
            "IDictionary<string, IList<string>>"
        );
        assert_eq!(
            render(&map, &schema, &models, set),
            "IDictionary<string, EmptyStruct>"
        );
        assert_eq!(render(&map, &schema, &models, ptr), "IList<string>");
    }

    #[test]
    fn test_terminal_wins_over_kind() {
        let mut schema = Schema::new();
        let duration = schema.named_scalar("time", "Duration", Kind::Int64);
        let map = TypeMap::csharp()
            .with_terminal(duration, TargetType::named(NamedType::value("System", "TimeSpan")));
        let models = ModelSet::new();
        assert!(map.is_terminal(duration));
        assert_eq!(render(&map, &schema, &models, duration), "TimeSpan");
    }

    #[test]
    fn test_struct_uses_registered_name() {
        let mut schema = Schema::new();
        let inspect = schema.declare_struct("network", "Inspect");
        let other = schema.declare_struct("network", "Summary");
        let mut models = ModelSet::new();
        models.insert(inspect, Model::new("NetworkResponse", "network.Inspect"));
        let map = TypeMap::csharp();

        assert_eq!(render(&map, &schema, &models, inspect), "NetworkResponse");
        assert_eq!(render(&map, &schema, &models, other), "Summary");
    }

    #[test]
    fn test_interface_is_object() {
        let mut schema = Schema::new();
        let any = schema.primitive(Kind::Interface);
        let string = schema.primitive(Kind::String);
        let opts = schema.map(string, any);
        let map = TypeMap::csharp();
        let models = ModelSet::new();
        assert_eq!(
            render(&map, &schema, &models, opts),
            "IDictionary<string, object>"
        );
    }

    #[test]
    fn test_unsupported_kinds() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let chan = schema.chan(string);
        let complex = schema.primitive(Kind::Complex128);
        let map = TypeMap::csharp();
        let models = ModelSet::new();

        let err = map.map(&schema, &models, chan).unwrap_err();
        assert!(matches!(err, Error::UnsupportedKind { ref kind, .. } if kind == "chan"));
        let err = map.map(&schema, &models, complex).unwrap_err();
        assert!(matches!(err, Error::UnsupportedKind { ref ty, .. } if ty == "complex128"));
    }

    #[test]
    fn test_anonymous_struct_without_model_is_unnamed() {
        let mut schema = Schema::new();
        let anon = schema.anonymous_struct(Vec::new());
        let map = TypeMap::csharp();
        let models = ModelSet::new();
        assert!(matches!(
            map.map(&schema, &models, anon),
            Err(Error::UnnamedType { .. })
        ));
    }
}
