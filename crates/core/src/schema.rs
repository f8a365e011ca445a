//! Statically enumerated source type descriptors.
//!
//! The walker never inspects live values. Instead every API shape is declared
//! up front in a [`Schema`]: an arena of [`TypeDescriptor`]s addressed by
//! [`TypeId`] handles. Named types and anonymous struct declarations get a
//! fresh identity each time they are declared, while unnamed composite types
//! (pointers, slices, arrays, maps, channels over an existing element) are
//! interned so the same shape over the same element is the same identity.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

/// Stable identity of a type inside a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind of a source type, mirroring the source runtime's reflection kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`
    Bool,
    /// `int`, 64 bits wide
    Int,
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `uint`, 64 bits wide
    Uint,
    /// `uint8` / `byte`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `float32`
    Float32,
    /// `float64`
    Float64,
    /// `complex64`
    Complex64,
    /// `complex128`
    Complex128,
    /// `string`
    String,
    /// Named or anonymous struct.
    Struct,
    /// `*T`
    Pointer,
    /// `[]T`
    Slice,
    /// `[N]T`
    Array,
    /// `map[K]V`
    Map,
    /// Any interface, `interface{}` included.
    Interface,
    /// Function value.
    Func,
    /// `chan T`
    Chan,
    /// `uintptr`
    Uintptr,
    /// `unsafe.Pointer`
    UnsafePointer,
}

impl Kind {
    /// Source-language spelling of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Complex64 => "complex64",
            Kind::Complex128 => "complex128",
            Kind::String => "string",
            Kind::Struct => "struct",
            Kind::Pointer => "ptr",
            Kind::Slice => "slice",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Interface => "interface",
            Kind::Func => "func",
            Kind::Chan => "chan",
            Kind::Uintptr => "uintptr",
            Kind::UnsafePointer => "unsafe.Pointer",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw struct tag in `key:"value" key2:"value2"` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTag(String);

impl StructTag {
    /// Wrap a raw tag string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Look up the value for `key`. Malformed tags yield `None` for every key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut rest = self.0.as_str();
        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                return None;
            }

            let colon = rest.find(':')?;
            let name = &rest[..colon];
            if name.is_empty() || name.contains(|c: char| c == '"' || c.is_control() || c == ' ') {
                return None;
            }

            let quoted = rest[colon + 1..].strip_prefix('"')?;
            let end = closing_quote(quoted)?;
            let value = &quoted[..end];
            rest = &quoted[end + 1..];

            if name == key {
                return Some(value);
            }
        }
    }

    /// Serialization name from the `json` tag, if the tag names one.
    pub fn json_name(&self) -> Option<&str> {
        self.get("json")
            .and_then(|value| value.split(',').next())
            .filter(|name| !name.is_empty() && *name != "-")
    }

    /// Whether the `json` tag drops the field from serialization.
    pub fn json_omitted(&self) -> bool {
        self.get("json")
            .and_then(|value| value.split(',').next())
            .is_some_and(|name| name == "-")
    }
}

fn closing_quote(value: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in value.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some(i),
            _ => escaped = false,
        }
    }
    None
}

/// One field of a struct type.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: TypeId,
    embedded: bool,
    tag: StructTag,
}

impl Field {
    /// A named field of type `ty`.
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            embedded: false,
            tag: StructTag::default(),
        }
    }

    /// An embedded field; `name` is the embedded type's declared name.
    pub fn embedded(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            embedded: true,
            ..Self::new(name, ty)
        }
    }

    /// Attach a raw struct tag.
    pub fn tag(mut self, raw: &str) -> Self {
        self.tag = StructTag::new(raw);
        self
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared field type.
    pub fn ty(&self) -> TypeId {
        self.ty
    }

    /// Whether the field is embedded rather than named.
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// The field's struct tag, empty when none was attached.
    pub fn struct_tag(&self) -> &StructTag {
        &self.tag
    }
}

/// Descriptor of one source type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    kind: Kind,
    package: Option<String>,
    name: Option<String>,
    elem: Option<TypeId>,
    key: Option<TypeId>,
    len: usize,
    fields: Vec<Field>,
}

impl TypeDescriptor {
    fn unnamed(kind: Kind) -> Self {
        Self {
            kind,
            package: None,
            name: None,
            elem: None,
            key: None,
            len: 0,
            fields: Vec::new(),
        }
    }

    /// Kind of the type.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Declared name, `None` for unnamed and anonymous types.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Declaring package of named types.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Element type of pointers, slices, arrays, maps (the value) and channels.
    pub fn elem(&self) -> Option<TypeId> {
        self.elem
    }

    /// Key type of maps.
    pub fn key(&self) -> Option<TypeId> {
        self.key
    }

    /// Fields of struct types, in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Shape {
    Scalar(Kind),
    Pointer(TypeId),
    Slice(TypeId),
    Array(TypeId, usize),
    Map(TypeId, TypeId),
    Chan(TypeId),
}

/// Arena of type descriptors.
#[derive(Debug, Default)]
pub struct Schema {
    types: Vec<TypeDescriptor>,
    shapes: HashMap<Shape, TypeId>,
    named: HashMap<String, TypeId>,
}

impl Schema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no type was declared.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn push(&mut self, descriptor: TypeDescriptor) -> TypeId {
        let id = TypeId(u32::try_from(self.types.len()).unwrap_or(u32::MAX));
        self.types.push(descriptor);
        id
    }

    fn intern(&mut self, shape: Shape) -> TypeId {
        if let Some(id) = self.shapes.get(&shape) {
            return *id;
        }
        let descriptor = match shape {
            Shape::Scalar(kind) => TypeDescriptor::unnamed(kind),
            Shape::Pointer(elem) => TypeDescriptor {
                elem: Some(elem),
                ..TypeDescriptor::unnamed(Kind::Pointer)
            },
            Shape::Slice(elem) => TypeDescriptor {
                elem: Some(elem),
                ..TypeDescriptor::unnamed(Kind::Slice)
            },
            Shape::Array(elem, len) => TypeDescriptor {
                elem: Some(elem),
                len,
                ..TypeDescriptor::unnamed(Kind::Array)
            },
            Shape::Map(key, value) => TypeDescriptor {
                key: Some(key),
                elem: Some(value),
                ..TypeDescriptor::unnamed(Kind::Map)
            },
            Shape::Chan(elem) => TypeDescriptor {
                elem: Some(elem),
                ..TypeDescriptor::unnamed(Kind::Chan)
            },
        };
        let id = self.push(descriptor);
        self.shapes.insert(shape, id);
        id
    }

    fn declare(&mut self, package: &str, name: &str, descriptor: TypeDescriptor) -> TypeId {
        let qualified = qualify(package, name);
        if let Some(id) = self.named.get(&qualified) {
            return *id;
        }
        let id = self.push(TypeDescriptor {
            package: Some(package.to_owned()),
            name: Some(name.to_owned()),
            ..descriptor
        });
        self.named.insert(qualified, id);
        id
    }

    /// The unnamed type of a scalar kind (`string`, `int64`, `interface {}`, ...).
    pub fn primitive(&mut self, kind: Kind) -> TypeId {
        self.intern(Shape::Scalar(kind))
    }

    /// `*elem`
    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        self.intern(Shape::Pointer(elem))
    }

    /// `[]elem`
    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.intern(Shape::Slice(elem))
    }

    /// `[len]elem`
    pub fn array(&mut self, elem: TypeId, len: usize) -> TypeId {
        self.intern(Shape::Array(elem, len))
    }

    /// `map[key]value`
    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.intern(Shape::Map(key, value))
    }

    /// `chan elem`
    pub fn chan(&mut self, elem: TypeId) -> TypeId {
        self.intern(Shape::Chan(elem))
    }

    /// Declare a named scalar type such as `type Port string`.
    ///
    /// Declaring the same qualified name twice returns the first identity.
    pub fn named_scalar(&mut self, package: &str, name: &str, kind: Kind) -> TypeId {
        self.declare(package, name, TypeDescriptor::unnamed(kind))
    }

    /// Declare a named collection type such as `type StrSlice []string`.
    pub fn named_slice(&mut self, package: &str, name: &str, elem: TypeId) -> TypeId {
        self.declare(
            package,
            name,
            TypeDescriptor {
                elem: Some(elem),
                ..TypeDescriptor::unnamed(Kind::Slice)
            },
        )
    }

    /// Declare a named map type such as `type PortMap map[Port][]PortBinding`.
    pub fn named_map(&mut self, package: &str, name: &str, key: TypeId, value: TypeId) -> TypeId {
        self.declare(
            package,
            name,
            TypeDescriptor {
                key: Some(key),
                elem: Some(value),
                ..TypeDescriptor::unnamed(Kind::Map)
            },
        )
    }

    /// Declare a named struct without fields so it can be referenced before
    /// [`Schema::define_fields`] fills it in.
    pub fn declare_struct(&mut self, package: &str, name: &str) -> TypeId {
        self.declare(package, name, TypeDescriptor::unnamed(Kind::Struct))
    }

    /// Declare a named struct together with its fields.
    pub fn named_struct(&mut self, package: &str, name: &str, fields: Vec<Field>) -> TypeId {
        let id = self.declare_struct(package, name);
        self.define_fields(id, fields);
        id
    }

    /// Declare an anonymous struct. Every call yields a distinct identity.
    pub fn anonymous_struct(&mut self, fields: Vec<Field>) -> TypeId {
        self.push(TypeDescriptor {
            fields,
            ..TypeDescriptor::unnamed(Kind::Struct)
        })
    }

    /// Replace the field list of a struct type.
    pub fn define_fields(&mut self, id: TypeId, fields: Vec<Field>) {
        if let Some(descriptor) = self.types.get_mut(id.index()) {
            debug_assert_eq!(descriptor.kind, Kind::Struct);
            descriptor.fields = fields;
        }
    }

    /// Look up a named type by its `package.Name` spelling.
    pub fn lookup(&self, qualified: &str) -> Option<TypeId> {
        self.named.get(qualified).copied()
    }

    /// Descriptor for `id`, `None` for a handle from another schema.
    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get(id.index())
    }

    /// Every declared type in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor)> {
        self.types.iter().enumerate().map(|(index, descriptor)| {
            (TypeId(u32::try_from(index).unwrap_or(u32::MAX)), descriptor)
        })
    }

    /// Strip pointers until a non-pointer type is reached.
    pub fn deref(&self, mut id: TypeId) -> TypeId {
        while self[id].kind == Kind::Pointer {
            match self[id].elem {
                Some(elem) => id = elem,
                None => break,
            }
        }
        id
    }

    /// Strip pointers and containers (slice, array, map value, chan) down to
    /// the innermost element type.
    pub fn ultimate(&self, mut id: TypeId) -> TypeId {
        loop {
            let descriptor = &self[id];
            match (descriptor.kind, descriptor.elem) {
                (
                    Kind::Pointer | Kind::Slice | Kind::Array | Kind::Map | Kind::Chan,
                    Some(elem),
                ) => id = elem,
                _ => return id,
            }
        }
    }

    /// Source-language spelling of a type, e.g. `*container.Config` or
    /// `map[string][]string`.
    pub fn display(&self, id: TypeId) -> String {
        let descriptor = &self[id];
        if let (Some(package), Some(name)) = (descriptor.package(), descriptor.name()) {
            return qualify(package, name);
        }
        let elem = |schema: &Self| {
            descriptor
                .elem
                .map_or_else(|| "?".to_owned(), |elem| schema.display(elem))
        };
        match descriptor.kind {
            Kind::Pointer => format!("*{}", elem(self)),
            Kind::Slice => format!("[]{}", elem(self)),
            Kind::Array => format!("[{}]{}", descriptor.len, elem(self)),
            Kind::Chan => format!("chan {}", elem(self)),
            Kind::Map => {
                let key = descriptor
                    .key
                    .map_or_else(|| "?".to_owned(), |key| self.display(key));
                format!("map[{key}]{}", elem(self))
            }
            Kind::Interface => "interface {}".to_owned(),
            Kind::Func => "func()".to_owned(),
            Kind::Struct if descriptor.fields.is_empty() => "struct {}".to_owned(),
            Kind::Struct => {
                let fields: Vec<_> = descriptor
                    .fields
                    .iter()
                    .map(|field| format!("{} {}", field.name, self.display(field.ty)))
                    .collect();
                format!("struct {{ {} }}", fields.join("; "))
            }
            kind => kind.as_str().to_owned(),
        }
    }
}

impl Index<TypeId> for Schema {
    type Output = TypeDescriptor;

    fn index(&self, id: TypeId) -> &TypeDescriptor {
        &self.types[id.index()]
    }
}

fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_owned()
    } else {
        format!("{package}.{name}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_tag_lookup() {
        let tag = StructTag::new(r#"json:"Id,omitempty" rest:"query,t,required""#);
        assert_eq!(tag.get("json"), Some("Id,omitempty"));
        assert_eq!(tag.get("rest"), Some("query,t,required"));
        assert_eq!(tag.get("yaml"), None);
        assert_eq!(tag.json_name(), Some("Id"));
        assert!(!tag.json_omitted());
    }

    #[test]
    fn test_struct_tag_omit_and_empty_name() {
        assert!(StructTag::new(r#"json:"-""#).json_omitted());
        assert_eq!(StructTag::new(r#"json:",omitempty""#).json_name(), None);
        assert_eq!(StructTag::new("").json_name(), None);
    }

    #[test]
    fn test_struct_tag_escaped_quote() {
        let tag = StructTag::new(r#"doc:"say \"hi\"" json:"name""#);
        assert_eq!(tag.get("json"), Some("name"));
    }

    #[test]
    fn test_malformed_tag_yields_nothing() {
        let tag = StructTag::new(r#"json:name"#);
        assert_eq!(tag.get("json"), None);
    }

    #[test]
    fn test_composite_types_are_interned() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let a = schema.slice(string);
        let b = schema.slice(string);
        assert_eq!(a, b);
        assert_ne!(schema.pointer(string), a);
        let m = schema.map(string, a);
        assert_eq!(schema.display(m), "map[string][]string");
    }

    #[test]
    fn test_named_types_are_nominal() {
        let mut schema = Schema::new();
        let a = schema.declare_struct("mount", "Driver");
        let b = schema.declare_struct("swarm", "Driver");
        assert_ne!(a, b);
        assert_eq!(schema.declare_struct("mount", "Driver"), a);
        assert_eq!(schema.lookup("swarm.Driver"), Some(b));
        assert_eq!(schema.display(b), "swarm.Driver");
    }

    #[test]
    fn test_anonymous_structs_are_distinct() {
        let mut schema = Schema::new();
        let a = schema.anonymous_struct(Vec::new());
        let b = schema.anonymous_struct(Vec::new());
        assert_ne!(a, b);
        assert!(schema[a].name().is_none());
    }

    #[test]
    fn test_ultimate_and_deref() {
        let mut schema = Schema::new();
        let node = schema.declare_struct("swarm", "Node");
        let ptr = schema.pointer(node);
        let list = schema.slice(ptr);
        let string = schema.primitive(Kind::String);
        let by_name = schema.map(string, list);
        let ptr_ptr = schema.pointer(ptr);

        assert_eq!(schema.ultimate(by_name), node);
        assert_eq!(schema.deref(ptr_ptr), node);
        assert_eq!(schema.deref(list), list);
        assert_eq!(schema.display(by_name), "map[string][]*swarm.Node");
    }
}
