//! Target-language model declarations produced by the walker.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::render::Emit;

/// Namespace of collection interfaces referenced by list and dictionary types.
pub const COLLECTIONS_NAMESPACE: &str = "System.Collections.Generic";
/// Namespace of the serialization attributes.
pub const SERIALIZATION_NAMESPACE: &str = "System.Text.Json.Serialization";

/// A named target type, optionally living in a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NamedType {
    /// Namespace to import, empty for the model namespace and keywords.
    pub namespace: String,
    /// Type name as written.
    pub name: String,
    /// Value types get a nullable suffix when the property is optional.
    pub value_type: bool,
}

impl NamedType {
    /// A reference type in the model namespace.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            name: name.into(),
            value_type: false,
        }
    }

    /// A value type in the given namespace.
    pub fn value(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            value_type: true,
        }
    }

    /// A reference type in the given namespace.
    pub fn reference(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            value_type: false,
        }
    }
}

/// Reference to a target type as written in a property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// A named type or keyword.
    Named(NamedType),
    /// Fixed-size array, `T[]`.
    Array(Box<TargetType>),
    /// Growable sequence, `IList<T>`.
    List(Box<TargetType>),
    /// Map, `IDictionary<K, V>`.
    Dictionary {
        /// Key type.
        key: Box<TargetType>,
        /// Value type.
        value: Box<TargetType>,
    },
    /// Map whose values carry no data, `IDictionary<K, EmptyStruct>`.
    Set(Box<TargetType>),
    /// Untyped value, `object`.
    Object,
}

impl TargetType {
    /// Wrap a named type.
    pub fn named(named: NamedType) -> Self {
        Self::Named(named)
    }

    /// A reference to another generated model.
    pub fn model(name: impl Into<String>) -> Self {
        Self::Named(NamedType::local(name))
    }

    /// Whether an optional property of this type needs a nullable marker.
    pub fn is_value_type(&self) -> bool {
        matches!(self, Self::Named(named) if named.value_type)
    }

    /// Whether literals of this type are written as quoted strings.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Named(named) if named.namespace.is_empty() && named.name == "string")
    }

    /// Collect every namespace this reference needs imported.
    pub fn collect_namespaces(&self, out: &mut BTreeSet<String>) {
        match self {
            Self::Named(named) => {
                if !named.namespace.is_empty() {
                    out.insert(named.namespace.clone());
                }
            }
            Self::Array(elem) => elem.collect_namespaces(out),
            Self::List(elem) | Self::Set(elem) => {
                out.insert(COLLECTIONS_NAMESPACE.to_owned());
                elem.collect_namespaces(out);
            }
            Self::Dictionary { key, value } => {
                out.insert(COLLECTIONS_NAMESPACE.to_owned());
                key.collect_namespaces(out);
                value.collect_namespaces(out);
            }
            Self::Object => {}
        }
    }
}

/// One attribute argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Literal text or expression.
    pub value: String,
    /// Type of the literal; string literals are quoted when rendered.
    pub ty: Option<TargetType>,
}

impl Argument {
    /// A string literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ty: Some(TargetType::Named(NamedType::local("string"))),
        }
    }

    /// A boolean literal.
    pub fn bool(value: bool) -> Self {
        Self {
            value: value.to_string(),
            ty: Some(TargetType::Named(NamedType::value("", "bool"))),
        }
    }

    /// An expression written verbatim, such as `typeof(MapQueryStringConverter)`.
    pub fn expr(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ty: None,
        }
    }
}

/// An attribute applied to a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute type; its namespace is imported.
    pub ty: NamedType,
    /// Positional arguments.
    pub arguments: Vec<Argument>,
}

impl Attribute {
    /// An attribute with explicit arguments.
    pub fn new(ty: NamedType, arguments: Vec<Argument>) -> Self {
        Self { ty, arguments }
    }

    /// `[JsonPropertyName("<name>")]`
    pub fn json_property_name(name: impl Into<String>) -> Self {
        Self::new(
            NamedType::reference(SERIALIZATION_NAMESPACE, "JsonPropertyName"),
            vec![Argument::string(name)],
        )
    }

    /// `[JsonConverter(typeof(<converter>))]`
    pub fn json_converter(converter: &str) -> Self {
        Self::new(
            NamedType::reference(SERIALIZATION_NAMESPACE, "JsonConverter"),
            vec![Argument::expr(format!("typeof({converter})"))],
        )
    }

    /// `[QueryStringParameter("<name>", <required>[, typeof(<converter>)])]`
    pub fn query_string(name: impl Into<String>, required: bool, converter: Option<&str>) -> Self {
        let mut arguments = vec![Argument::string(name), Argument::bool(required)];
        if let Some(converter) = converter {
            arguments.push(Argument::expr(format!("typeof({converter})")));
        }
        Self::new(NamedType::local("QueryStringParameter"), arguments)
    }
}

/// One property of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name, the source field name.
    pub name: String,
    /// Property type.
    pub ty: TargetType,
    /// Attributes in emission order.
    pub attributes: Vec<Attribute>,
    /// Value types get a nullable marker when set.
    pub optional: bool,
    /// Initializer literal.
    pub default_value: Option<String>,
}

impl Property {
    /// A required property with no attributes.
    pub fn new(name: impl Into<String>, ty: TargetType) -> Self {
        Self {
            name: name.into(),
            ty,
            attributes: Vec::new(),
            optional: false,
            default_value: None,
        }
    }

    /// Name of the first attribute with the given type name, if any.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.ty.name == name)
    }
}

/// An embedded model promoted into a constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name, the embedded field's name.
    pub name: String,
    /// Final name of the embedded model.
    pub model: String,
    /// Properties the embedded model contributed to the owner.
    pub promoted: Vec<String>,
}

/// A constructor; the default one has no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constructor {
    /// Embedded models copied by this constructor.
    pub parameters: Vec<Parameter>,
}

/// A target model declaration.
#[derive(Debug, Clone)]
pub struct Model {
    /// Final model name, after renames.
    pub name: String,
    /// Source type spelling, kept for diagnostics.
    pub source_name: String,
    /// Properties in field order, promoted ones included.
    pub properties: Vec<Property>,
    /// Empty, or the default and copying constructors.
    pub constructors: Vec<Constructor>,
    pub(crate) started: bool,
    pub(crate) complete: bool,
}

impl Model {
    /// An empty model.
    pub fn new(name: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_name: source_name.into(),
            properties: Vec::new(),
            constructors: Vec::new(),
            started: false,
            complete: false,
        }
    }

    /// Property with the given name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|prop| prop.name == name)
    }

    /// Record an embedded model: adds the default and copying constructors on
    /// first use and appends the promoted properties.
    pub(crate) fn embed(&mut self, name: &str, embedded: &Model) {
        let slot = self.add_embed(name, &embedded.name);
        let at = self.properties.len();
        self.promote(slot, at, embedded);
    }

    /// Add a copying constructor parameter for an embedded model whose
    /// properties are not known yet. Returns the parameter slot.
    pub(crate) fn add_embed(&mut self, name: &str, model: &str) -> usize {
        if self.constructors.is_empty() {
            self.constructors.push(Constructor::default());
            self.constructors.push(Constructor::default());
        }
        let Some(copying) = self.constructors.get_mut(1) else {
            return 0;
        };
        copying.parameters.push(Parameter {
            name: name.to_owned(),
            model: model.to_owned(),
            promoted: Vec::new(),
        });
        copying.parameters.len() - 1
    }

    /// Insert the properties of `embedded` at index `at` and record them on
    /// parameter `slot`.
    pub(crate) fn promote(&mut self, slot: usize, at: usize, embedded: &Model) {
        if let Some(param) = self
            .constructors
            .get_mut(1)
            .and_then(|copying| copying.parameters.get_mut(slot))
        {
            param.promoted = embedded
                .properties
                .iter()
                .map(|prop| prop.name.clone())
                .collect();
        }
        let tail = self.properties.split_off(at.min(self.properties.len()));
        self.properties.extend(embedded.properties.iter().cloned());
        self.properties.extend(tail);
    }

    /// Namespaces referenced by property types and attributes.
    pub fn namespaces(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for prop in &self.properties {
            prop.ty.collect_namespaces(&mut out);
            for attr in &prop.attributes {
                if !attr.ty.namespace.is_empty() {
                    out.insert(attr.ty.namespace.clone());
                }
            }
        }
        out
    }
}

/// Serializable summary of one resolved model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelPlan {
    /// Final model name.
    pub name: String,
    /// Source type spelling.
    pub source: String,
    /// Properties in emission order.
    pub properties: Vec<PropertyPlan>,
    /// Embedded models and what they promoted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Parameter>,
}

/// Serializable summary of one property.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyPlan {
    /// Property name.
    pub name: String,
    /// Rendered type.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether the property is optional.
    pub optional: bool,
    /// Initializer literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl From<&Model> for ModelPlan {
    fn from(model: &Model) -> Self {
        Self {
            name: model.name.clone(),
            source: model.source_name.clone(),
            properties: model
                .properties
                .iter()
                .map(|prop| PropertyPlan {
                    name: prop.name.clone(),
                    ty: prop.ty.emit(),
                    optional: prop.optional,
                    default: prop.default_value.clone(),
                })
                .collect(),
            embeds: model
                .constructors
                .iter()
                .flat_map(|ctor| ctor.parameters.iter().cloned())
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_adds_constructors_once() {
        let mut base = Model::new("Base", "pkg.Base");
        base.properties
            .push(Property::new("ID", TargetType::named(NamedType::local("string"))));
        let mut extra = Model::new("Extra", "pkg.Extra");
        extra
            .properties
            .push(Property::new("Size", TargetType::named(NamedType::value("", "long"))));

        let mut owner = Model::new("Owner", "pkg.Owner");
        owner.embed("Base", &base);
        owner.embed("Extra", &extra);

        assert_eq!(owner.constructors.len(), 2);
        assert!(owner.constructors[0].parameters.is_empty());
        let params: Vec<_> = owner.constructors[1]
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(params, ["Base", "Extra"]);
        assert_eq!(owner.properties.len(), 2);
        assert_eq!(owner.constructors[1].parameters[0].promoted, ["ID"]);
    }

    #[test]
    fn test_namespaces_cover_types_and_attributes() {
        let mut model = Model::new("M", "pkg.M");
        let mut prop = Property::new(
            "Labels",
            TargetType::Dictionary {
                key: Box::new(TargetType::named(NamedType::local("string"))),
                value: Box::new(TargetType::named(NamedType::value("System", "DateTime"))),
            },
        );
        prop.attributes.push(Attribute::json_property_name("Labels"));
        model.properties.push(prop);

        let namespaces: Vec<_> = model.namespaces().into_iter().collect();
        assert_eq!(
            namespaces,
            ["System", COLLECTIONS_NAMESPACE, SERIALIZATION_NAMESPACE]
        );
    }

    #[test]
    fn test_query_string_attribute_arguments() {
        let attr = Attribute::query_string("all", false, Some("BoolQueryStringConverter"));
        assert_eq!(attr.arguments.len(), 3);
        assert_eq!(attr.arguments[0].value, "all");
        assert_eq!(attr.arguments[1].value, "false");
        assert_eq!(attr.arguments[2].value, "typeof(BoolQueryStringConverter)");
        assert!(attr.arguments[2].ty.is_none());
    }
}
