//! C# source emission via the Emit trait.
//!
//! Each model type implements `Emit`; [`ModelFile`] stitches them into the
//! text of one artifact.

use crate::mapper::EMPTY_STRUCT;
use crate::model::{Argument, Attribute, Constructor, Model, Property, TargetType};

/// Trait for emitting C# source from model nodes.
pub trait Emit {
    /// Convert the node to its C# string representation.
    fn emit(&self) -> String;
}

const INDENT: &str = "    ";

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TargetType {
    fn emit(&self) -> String {
        match self {
            TargetType::Named(named) => named.name.clone(),
            TargetType::Array(elem) => format!("{}[]", elem.emit()),
            TargetType::List(elem) => format!("IList<{}>", elem.emit()),
            TargetType::Dictionary { key, value } => {
                format!("IDictionary<{}, {}>", key.emit(), value.emit())
            }
            TargetType::Set(key) => format!("IDictionary<{}, {EMPTY_STRUCT}>", key.emit()),
            TargetType::Object => "object".to_string(),
        }
    }
}

// =============================================================================
// Attributes
// =============================================================================

impl Emit for Argument {
    fn emit(&self) -> String {
        match &self.ty {
            Some(ty) if ty.is_string() => quote(&self.value),
            _ => self.value.clone(),
        }
    }
}

impl Emit for Attribute {
    fn emit(&self) -> String {
        if self.arguments.is_empty() {
            return format!("[{}]", self.ty.name);
        }
        let args = self
            .arguments
            .iter()
            .map(Emit::emit)
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}({})]", self.ty.name, args)
    }
}

// =============================================================================
// Members
// =============================================================================

impl Emit for Property {
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

impl Property {
    /// Emit attributes and declaration, each line prefixed by `indent` levels.
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = INDENT.repeat(indent);
        let mut output = String::new();
        for attr in &self.attributes {
            output.push_str(&format!("{prefix}{}\n", attr.emit()));
        }

        let nullable = if self.optional && self.ty.is_value_type() {
            "?"
        } else {
            ""
        };
        output.push_str(&format!(
            "{prefix}public {}{nullable} {} {{ get; set; }}",
            self.ty.emit(),
            self.name
        ));

        if let Some(default) = &self.default_value {
            let literal = if self.ty.is_string() {
                quote(default)
            } else {
                default.clone()
            };
            output.push_str(&format!(" = {literal};"));
        }
        output
    }
}

impl Constructor {
    /// Emit the constructor for class `class`. Parameters copy the promoted
    /// properties of each embedded model when non-null.
    pub fn emit_for(&self, class: &str, indent: usize) -> String {
        let prefix = INDENT.repeat(indent);
        let inner = INDENT.repeat(indent + 1);
        let body = INDENT.repeat(indent + 2);

        let params = self
            .parameters
            .iter()
            .map(|param| format!("{} {}", param.model, param.name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut output = format!("{prefix}public {class}({params})\n{prefix}{{\n");
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("{inner}if ({} != null)\n{inner}{{\n", param.name));
            for prop in &param.promoted {
                output.push_str(&format!("{body}this.{prop} = {}.{prop};\n", param.name));
            }
            output.push_str(&format!("{inner}}}\n"));
        }
        output.push_str(&format!("{prefix}}}"));
        output
    }
}

// =============================================================================
// Files
// =============================================================================

/// One rendered artifact: a model placed in a namespace.
#[derive(Debug, Clone, Copy)]
pub struct ModelFile<'a> {
    /// The model to render.
    pub model: &'a Model,
    /// Namespace the class is declared in.
    pub namespace: &'a str,
}

impl<'a> ModelFile<'a> {
    /// Place `model` in `namespace`.
    pub fn new(model: &'a Model, namespace: &'a str) -> Self {
        Self { model, namespace }
    }
}

impl Emit for ModelFile<'_> {
    fn emit(&self) -> String {
        let model = self.model;
        let mut output = String::new();

        let usings: Vec<_> = model
            .namespaces()
            .into_iter()
            .filter(|ns| ns != self.namespace)
            .collect();
        for ns in &usings {
            output.push_str(&format!("using {ns};\n"));
        }
        if !usings.is_empty() {
            output.push('\n');
        }

        output.push_str(&format!("namespace {}\n{{\n", self.namespace));
        output.push_str(&format!(
            "{INDENT}public class {} // ({})\n{INDENT}{{\n",
            model.name, model.source_name
        ));

        let mut members: Vec<String> = model
            .constructors
            .iter()
            .map(|ctor| ctor.emit_for(&model.name, 2))
            .collect();
        members.extend(model.properties.iter().map(|prop| prop.emit_indented(2)));
        output.push_str(&members.join("\n\n"));
        if !members.is_empty() {
            output.push('\n');
        }

        output.push_str(&format!("{INDENT}}}\n}}\n"));
        output
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::{NamedType, Parameter};

    fn string() -> TargetType {
        TargetType::named(NamedType::local("string"))
    }

    #[test]
    fn test_emit_target_types() {
        let long = TargetType::named(NamedType::value("", "long"));
        assert_eq!(TargetType::List(Box::new(string())).emit(), "IList<string>");
        assert_eq!(TargetType::Array(Box::new(long.clone())).emit(), "long[]");
        assert_eq!(
            TargetType::Dictionary {
                key: Box::new(string()),
                value: Box::new(TargetType::List(Box::new(long))),
            }
            .emit(),
            "IDictionary<string, IList<long>>"
        );
        assert_eq!(
            TargetType::Set(Box::new(string())).emit(),
            "IDictionary<string, EmptyStruct>"
        );
        assert_eq!(TargetType::Object.emit(), "object");
    }

    #[test]
    fn test_emit_attribute_quotes_strings_only() {
        let attr = Attribute::query_string("say \"hi\"", true, Some("MapQueryStringConverter"));
        assert_eq!(
            attr.emit(),
            r#"[QueryStringParameter("say \"hi\"", true, typeof(MapQueryStringConverter))]"#
        );
    }

    #[test]
    fn test_emit_optional_value_type_property() {
        let mut prop = Property::new("Size", TargetType::named(NamedType::value("", "long")));
        prop.optional = true;
        prop.attributes.push(Attribute::json_property_name("size"));
        assert_eq!(
            prop.emit(),
            "[JsonPropertyName(\"size\")]\npublic long? Size { get; set; }"
        );
    }

    #[test]
    fn test_emit_optional_reference_type_property_has_no_marker() {
        let mut prop = Property::new("Name", string());
        prop.optional = true;
        assert_eq!(prop.emit(), "public string Name { get; set; }");
    }

    #[test]
    fn test_emit_default_values() {
        let mut prop = Property::new("Signal", string());
        prop.default_value = Some("SIGTERM".into());
        assert_eq!(
            prop.emit(),
            "public string Signal { get; set; } = \"SIGTERM\";"
        );

        let mut prop = Property::new("Limit", TargetType::named(NamedType::value("", "long")));
        prop.default_value = Some("25".into());
        assert!(prop.emit().ends_with("{ get; set; } = 25;"));
    }

    #[test]
    fn test_emit_model_file() {
        let mut model = Model::new("RuntimeWithStatus", "system.RuntimeWithStatus");
        model.constructors.push(Constructor::default());
        model.constructors.push(Constructor {
            parameters: vec![Parameter {
                name: "Runtime".into(),
                model: "Runtime".into(),
                promoted: vec!["Path".into()],
            }],
        });
        let mut path = Property::new("Path", string());
        path.attributes.push(Attribute::json_property_name("path"));
        model.properties.push(path);

        let expected = r#"using System.Text.Json.Serialization;

namespace Docker.DotNet.Models
{
    public class RuntimeWithStatus // (system.RuntimeWithStatus)
    {
        public RuntimeWithStatus()
        {
        }

        public RuntimeWithStatus(Runtime Runtime)
        {
            if (Runtime != null)
            {
                this.Path = Runtime.Path;
            }
        }

        [JsonPropertyName("path")]
        public string Path { get; set; }
    }
}
"#;
        assert_eq!(ModelFile::new(&model, "Docker.DotNet.Models").emit(), expected);
    }

    #[test]
    fn test_emit_empty_model() {
        let model = Model::new("EmptyStruct", "struct {}");
        assert_eq!(
            ModelFile::new(&model, "Models").emit(),
            "namespace Models\n{\n    public class EmptyStruct // (struct {})\n    {\n    }\n}\n"
        );
    }
}
