//! Overrides file support.
//!
//! An optional TOML file extends the built-in disambiguation table and can
//! change the output namespace and artifact suffix:
//!
//! ```toml
//! namespace = "Docker.DotNet.Models"
//!
//! [types."container.CreateResponse"]
//! name = "CreateContainerResponse"
//!
//! [[types."swarm.TaskStatus".properties]]
//! name = "State"
//! type = "TaskState"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{NamedType, TargetType};
use crate::overrides::{Disambiguations, PropertyOverride};
use crate::schema::Schema;

/// Contents of an overrides file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Namespace for the generated classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Artifact file suffix, `.Generated.cs` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Keyed by `package.Name`.
    #[serde(default)]
    pub types: BTreeMap<String, TypeEntry>,
}

/// Overrides for one source type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    /// Model name replacing the declared one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Property overrides for this type.
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
}

/// Override for one property, matched by its source field name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PropertyEntry {
    /// Source field name.
    pub name: String,
    /// Target type name written verbatim.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Namespace to import for `ty`.
    #[serde(default)]
    pub namespace: String,
    /// Whether `ty` needs a nullable marker when optional.
    #[serde(default)]
    pub value_type: bool,
}

impl GeneratorConfig {
    /// Read and parse an overrides file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|err| Error::io(format!("failed to read {}", path.display()), err))?;
        let config = Self::parse(&contents).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })?;
        debug!(path = %path.display(), types = config.types.len(), "loaded overrides");
        Ok(config)
    }

    /// Parse overrides from TOML text.
    pub fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|err| err.to_string())
    }

    /// Merge the file's entries over `table`. File entries win.
    pub fn apply(&self, schema: &Schema, table: &mut Disambiguations) -> Result<()> {
        for (qualified, entry) in &self.types {
            let ty = schema.lookup(qualified).ok_or_else(|| Error::UnknownType {
                name: qualified.clone(),
            })?;
            if let Some(name) = &entry.name {
                table.rename(ty, name.clone());
            }
            for prop in &entry.properties {
                let mut property = PropertyOverride::new(prop.name.clone());
                if let Some(name) = &prop.ty {
                    property = property.with_type(TargetType::Named(NamedType {
                        namespace: prop.namespace.clone(),
                        name: name.clone(),
                        value_type: prop.value_type,
                    }));
                }
                table.override_property(ty, property);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::schema::Kind;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
namespace = "Acme.Models"

[types."container.CreateResponse"]
name = "CreateContainerResponse"

[[types."swarm.TaskStatus".properties]]
name = "State"
type = "TaskState"

[[types."swarm.TaskStatus".properties]]
name = "Timestamp"
type = "DateTime"
namespace = "System"
value_type = true
"#;

    #[test]
    fn test_parse() {
        let config = GeneratorConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.namespace.as_deref(), Some("Acme.Models"));
        assert_eq!(config.suffix, None);
        assert_eq!(config.types.len(), 2);
        let status = &config.types["swarm.TaskStatus"];
        assert_eq!(status.properties.len(), 2);
        assert!(status.properties[1].value_type);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(GeneratorConfig::parse("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_apply() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let create = schema.named_struct("container", "CreateResponse", Vec::new());
        let status = schema.named_struct(
            "swarm",
            "TaskStatus",
            vec![crate::schema::Field::new("State", string)],
        );

        let config = GeneratorConfig::parse(SAMPLE).unwrap();
        let mut table = Disambiguations::new();
        table.rename(create, "Builtin");
        config.apply(&schema, &mut table).unwrap();

        assert_eq!(table.name_for(create), Some("CreateContainerResponse"));
        let stamp = table.property_for(status, "Timestamp").unwrap();
        assert_eq!(
            stamp.ty,
            Some(TargetType::Named(NamedType::value("System", "DateTime")))
        );
    }

    #[test]
    fn test_apply_unknown_type() {
        let schema = Schema::new();
        let config = GeneratorConfig::parse("[types.\"nope.Missing\"]\nname = \"X\"\n").unwrap();
        let err = config
            .apply(&schema, &mut Disambiguations::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownType { ref name } if name == "nope.Missing"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("overrides.toml");
        fs::write(&path, SAMPLE).unwrap();
        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.types.len(), 2);

        fs::write(&path, "namespace = 3").unwrap();
        assert!(matches!(
            GeneratorConfig::load(&path),
            Err(Error::Config { .. })
        ));
    }
}
