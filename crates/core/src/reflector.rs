//! Demand-driven type graph walker.
//!
//! A [`Session`] owns the memoized model registry for one run. Each call to
//! [`Session::resolve`] walks a root type and everything reachable from it,
//! creating exactly one model per struct identity. A model is registered and
//! marked started before its members are walked, so recursive and mutually
//! recursive types terminate and later references see the final name.

use tracing::debug;

use crate::error::{Error, Result};
use crate::fields::PendingEmbed;
use crate::mapper::TypeMap;
use crate::model::Model;
use crate::overrides::Disambiguations;
use crate::registry::ModelSet;
use crate::schema::{Kind, Schema, TypeId};

/// Resolution context for one run.
#[derive(Debug)]
pub struct Session<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) types: &'a TypeMap,
    pub(crate) overrides: &'a Disambiguations,
    pub(crate) models: ModelSet,
    pub(crate) pending: Vec<PendingEmbed>,
    path: Vec<String>,
    depth: usize,
}

impl<'a> Session<'a> {
    /// A session with an empty registry.
    pub fn new(schema: &'a Schema, types: &'a TypeMap, overrides: &'a Disambiguations) -> Self {
        Self {
            schema,
            types,
            overrides,
            models: ModelSet::new(),
            pending: Vec::new(),
            path: Vec::new(),
            depth: 0,
        }
    }

    /// Resolve `root` and everything reachable from it. Idempotent.
    ///
    /// The resulting models do not depend on the order roots are resolved in.
    pub fn resolve(&mut self, root: TypeId) -> Result<()> {
        if let Some(id) = self.models.id_of(root)
            && self.models.model(id).started
        {
            return Ok(());
        }
        if self.types.is_terminal(root) {
            return Ok(());
        }

        let schema = self.schema;
        let descriptor = &schema[root];
        let Some(declared) = descriptor.name() else {
            return Err(Error::UnnamedType {
                path: self.walk_path(&schema.display(root)),
            });
        };
        if descriptor.kind() != Kind::Struct {
            return Err(Error::NotAStruct {
                ty: schema.display(root),
                kind: descriptor.kind().to_string(),
            });
        }

        let name = self.overrides.name_for(root).unwrap_or(declared);
        let source = schema.display(root);
        debug!(model = %name, source = %source, "resolving model");

        let id = self.models.insert(root, Model::new(name, source));
        self.models.model_mut(id).started = true;

        self.depth += 1;
        let walked = self.resolve_members(root, id);
        self.depth -= 1;
        walked?;
        self.models.model_mut(id).complete = true;

        // Embeddings deferred inside a cycle are flattened once the
        // outermost walk has finished every model they depend on.
        if self.depth == 0 {
            self.settle_embeds()?;
        }
        Ok(())
    }

    /// Resolve every root in order.
    pub fn resolve_all(&mut self, roots: impl IntoIterator<Item = TypeId>) -> Result<()> {
        for root in roots {
            self.resolve(root)?;
        }
        Ok(())
    }

    /// Models resolved so far.
    pub fn models(&self) -> &ModelSet {
        &self.models
    }

    /// Finish the session and hand over the completed model set.
    pub fn finish(self) -> ModelSet {
        self.models
    }

    /// Run `f` with `segment` pushed onto the walk path.
    pub(crate) fn descend<T>(
        &mut self,
        segment: String,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    /// Walk path ending at `tail`, for diagnostics.
    pub(crate) fn walk_path(&self, tail: &str) -> String {
        let mut segments: Vec<&str> = self.path.iter().map(String::as_str).collect();
        segments.push(tail);
        segments.join(" -> ")
    }
}

/// Resolve every seed and return the completed model set.
pub fn resolve_models(
    schema: &Schema,
    types: &TypeMap,
    overrides: &Disambiguations,
    seeds: &[TypeId],
) -> Result<ModelSet> {
    let mut session = Session::new(schema, types, overrides);
    session.resolve_all(seeds.iter().copied())?;
    debug!(models = session.models().len(), "resolution complete");
    Ok(session.finish())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::render::Emit;
    use crate::schema::Field;

    fn string(schema: &mut Schema) -> TypeId {
        schema.primitive(Kind::String)
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut schema = Schema::new();
        let s = string(&mut schema);
        let simple = schema.named_struct("pkg", "Simple", vec![Field::new("A", s)]);
        let types = TypeMap::csharp();
        let overrides = Disambiguations::new();

        let mut session = Session::new(&schema, &types, &overrides);
        session.resolve(simple).unwrap();
        session.resolve(simple).unwrap();
        let models = session.finish();
        assert_eq!(models.len(), 1);
        assert_eq!(models.get(simple).unwrap().properties.len(), 1);
    }

    #[test]
    fn test_self_reference_terminates() {
        let mut schema = Schema::new();
        let node = schema.declare_struct("pkg", "Node");
        let ptr = schema.pointer(node);
        let children = schema.slice(ptr);
        schema.define_fields(
            node,
            vec![Field::new("Parent", ptr), Field::new("Children", children)],
        );
        let types = TypeMap::csharp();
        let overrides = Disambiguations::new();

        let models = resolve_models(&schema, &types, &overrides, &[node]).unwrap();
        let model = models.get(node).unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(model.property("Parent").unwrap().ty.emit(), "Node");
        assert!(model.property("Parent").unwrap().optional);
        assert_eq!(model.property("Children").unwrap().ty.emit(), "IList<Node>");
    }

    #[test]
    fn test_mutual_recursion_terminates() {
        let mut schema = Schema::new();
        let a = schema.declare_struct("pkg", "A");
        let b = schema.declare_struct("pkg", "B");
        let pa = schema.pointer(a);
        let pb = schema.pointer(b);
        schema.define_fields(a, vec![Field::new("B", pb)]);
        schema.define_fields(b, vec![Field::new("A", pa)]);
        let types = TypeMap::csharp();
        let overrides = Disambiguations::new();

        let models = resolve_models(&schema, &types, &overrides, &[a]).unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models.get(a).unwrap().property("B").unwrap().ty.emit(), "B");
        assert_eq!(models.get(b).unwrap().property("A").unwrap().ty.emit(), "A");
    }

    #[test]
    fn test_rename_propagates_to_references() {
        let mut schema = Schema::new();
        let summary = schema.named_struct("network", "Summary", Vec::new());
        let list = schema.slice(summary);
        let resp = schema.named_struct("main", "ListResponse", vec![Field::new("Items", list)]);
        let types = TypeMap::csharp();
        let mut overrides = Disambiguations::new();
        overrides.rename(summary, "NetworkResponse");

        let models = resolve_models(&schema, &types, &overrides, &[resp]).unwrap();
        assert_eq!(models.get(summary).unwrap().name, "NetworkResponse");
        assert_eq!(models.get(summary).unwrap().source_name, "network.Summary");
        assert_eq!(
            models.get(resp).unwrap().property("Items").unwrap().ty.emit(),
            "IList<NetworkResponse>"
        );
    }

    #[test]
    fn test_terminal_root_creates_no_model() {
        let mut schema = Schema::new();
        let time = schema.named_struct("time", "Time", Vec::new());
        let types = TypeMap::csharp().with_terminal(
            time,
            crate::model::TargetType::named(crate::model::NamedType::value("System", "DateTime")),
        );
        let overrides = Disambiguations::new();

        let models = resolve_models(&schema, &types, &overrides, &[time]).unwrap();
        assert!(models.is_empty());
    }

    #[test]
    fn test_unnamed_root_fails() {
        let mut schema = Schema::new();
        let anon = schema.anonymous_struct(Vec::new());
        let types = TypeMap::csharp();
        let overrides = Disambiguations::new();

        let err = resolve_models(&schema, &types, &overrides, &[anon]).unwrap_err();
        assert!(matches!(err, Error::UnnamedType { ref path } if path == "struct {}"));
    }

    #[test]
    fn test_named_scalar_root_is_not_a_struct() {
        let mut schema = Schema::new();
        let port = schema.named_scalar("nat", "Port", Kind::String);
        let types = TypeMap::csharp();
        let overrides = Disambiguations::new();

        let err = resolve_models(&schema, &types, &overrides, &[port]).unwrap_err();
        assert!(matches!(err, Error::NotAStruct { ref ty, .. } if ty == "nat.Port"));
    }

    #[test]
    fn test_only_reachable_types_are_resolved() {
        let mut schema = Schema::new();
        let s = string(&mut schema);
        let used = schema.named_struct("pkg", "Used", vec![Field::new("A", s)]);
        let unused = schema.named_struct("pkg", "Unused", vec![Field::new("A", s)]);
        let root = schema.named_struct("pkg", "Root", vec![Field::new("Used", used)]);
        let types = TypeMap::csharp();
        let overrides = Disambiguations::new();

        let models = resolve_models(&schema, &types, &overrides, &[root]).unwrap();
        assert_eq!(models.len(), 2);
        assert!(models.contains(used));
        assert!(!models.contains(unused));
    }
}
