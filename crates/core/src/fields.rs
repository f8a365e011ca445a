//! Per-field member resolution.

use tracing::trace;

use crate::error::{Error, Result};
use crate::model::{Attribute, Model, Property, TargetType};
use crate::reflector::Session;
use crate::registry::ModelId;
use crate::schema::{Field, Kind, TypeId};

/// Where a field travels in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Serialized into the JSON request body.
    Body,
    /// Sent as a query string parameter.
    Query,
}

/// Parsed `rest` struct tag: `<in>[,<name>][,required][,default=<literal>]`.
///
/// The query name may also be spelled `name=<wire>`. A default literal takes
/// the rest of the tag, commas included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestTag {
    /// Where the field travels.
    pub location: Location,
    /// Query parameter name, the lowercased field name when unset.
    pub name: Option<String>,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Literal default written as the property initializer.
    pub default: Option<String>,
}

impl RestTag {
    /// Parse the value of a `rest` tag. The error is a short reason.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let (location, mut rest) = raw.split_once(',').unwrap_or((raw, ""));
        let location = match location {
            "body" => Location::Body,
            "query" => Location::Query,
            other => return Err(format!("unknown location `{other}`")),
        };

        let mut tag = Self {
            location,
            name: None,
            required: false,
            default: None,
        };

        let mut position = 1;
        while !rest.is_empty() {
            if let Some(literal) = rest.strip_prefix("default=") {
                tag.default = Some(literal.to_owned());
                break;
            }
            let (item, tail) = rest.split_once(',').unwrap_or((rest, ""));
            rest = tail;
            if let Some(name) = item.strip_prefix("name=") {
                tag.name = Some(name.to_owned());
            } else {
                match item {
                    "required" => tag.required = true,
                    "" if position == 1 => {}
                    _ if position == 1 => tag.name = Some(item.to_owned()),
                    _ => return Err(format!("unknown item `{item}`")),
                }
            }
            position += 1;
        }

        if tag.location == Location::Body && (tag.name.is_some() || tag.default.is_some()) {
            return Err("body fields take no query name or default".to_owned());
        }
        Ok(tag)
    }
}

/// An embedding whose source model was still being walked when its owner
/// reached it. Flattened by [`Session::settle_embeds`].
#[derive(Debug)]
pub(crate) struct PendingEmbed {
    owner: TypeId,
    field: String,
    embedded_ty: TypeId,
    target: ModelId,
    embedded: ModelId,
    slot: usize,
    at: usize,
}

fn query_converter(kind: Kind) -> Option<&'static str> {
    match kind {
        Kind::Bool => Some("BoolQueryStringConverter"),
        Kind::Slice | Kind::Array => Some("EnumerableQueryStringConverter"),
        Kind::Map => Some("MapQueryStringConverter"),
        _ => None,
    }
}

impl Session<'_> {
    /// Resolve the fields of struct `owner` into model `target`, in
    /// declaration order.
    pub(crate) fn resolve_members(&mut self, owner: TypeId, target: ModelId) -> Result<()> {
        let schema = self.schema;
        for field in schema[owner].fields() {
            let kind = schema[field.ty()].kind();
            if matches!(kind, Kind::Func | Kind::Uintptr | Kind::UnsafePointer) {
                trace!(field = field.name(), %kind, "skipping field");
                continue;
            }
            if !field.is_embedded() && field.struct_tag().json_omitted() {
                trace!(field = field.name(), "skipping omitted field");
                continue;
            }

            let segment = format!("{}.{}", self.models.model(target).name, field.name());
            if field.is_embedded() {
                self.descend(segment, |session| session.embed_field(owner, target, field))?;
            } else if kind == Kind::Struct
                && schema[field.ty()].name().is_none()
                && !self.types.is_terminal(field.ty())
            {
                self.descend(segment, |session| session.inline_field(owner, target, field))?;
            } else {
                self.descend(segment, |session| session.ordinary_field(owner, target, field))?;
            }
        }
        Ok(())
    }

    /// A struct-typed field whose type has no name becomes its own model.
    fn inline_field(&mut self, owner: TypeId, target: ModelId, field: &Field) -> Result<()> {
        let child = match self.models.id_of(field.ty()) {
            Some(child) => child,
            None => {
                let parent = self.models.model(target);
                let owner_name = self.schema[owner]
                    .name()
                    .map_or_else(|| parent.name.clone(), str::to_owned);
                let name = self.overrides.name_for(field.ty()).map_or_else(
                    || format!("{owner_name}{}", field.name()),
                    str::to_owned,
                );
                let source = format!("{}.{}", parent.source_name, field.name());
                trace!(model = %name, source = %source, "resolving inline model");

                let child = self.models.insert(field.ty(), Model::new(name, source));
                self.models.model_mut(child).started = true;
                self.resolve_members(field.ty(), child)?;
                self.models.model_mut(child).complete = true;
                child
            }
        };

        let json_name = field.struct_tag().json_name().unwrap_or(field.name());
        let mut prop = Property::new(
            field.name(),
            TargetType::model(self.models.model(child).name.clone()),
        );
        prop.attributes.push(Attribute::json_property_name(json_name));
        self.models.model_mut(target).properties.push(prop);
        Ok(())
    }

    /// An embedded field promotes the embedded model's properties and adds a
    /// copying constructor parameter.
    fn embed_field(&mut self, owner: TypeId, target: ModelId, field: &Field) -> Result<()> {
        let schema = self.schema;
        let unresolved = || Error::EmbeddedUnresolved {
            owner: schema.display(owner),
            field: field.name().to_owned(),
            ty: schema.display(schema.ultimate(field.ty())),
        };

        let embedded_ty = schema.ultimate(field.ty());
        if schema[embedded_ty].kind() != Kind::Struct {
            return Err(unresolved());
        }
        self.resolve(embedded_ty)?;
        let embedded = self.models.id_of(embedded_ty).ok_or_else(unresolved)?;

        if self.is_settled(embedded) {
            let embedded = self.models.model(embedded).clone();
            self.models.model_mut(target).embed(field.name(), &embedded);
            return Ok(());
        }

        let model = self.models.model(embedded).name.clone();
        trace!(field = field.name(), %model, "deferring embedded model");
        let owner_model = self.models.model_mut(target);
        let slot = owner_model.add_embed(field.name(), &model);
        let at = owner_model.properties.len();
        self.pending.push(PendingEmbed {
            owner,
            field: field.name().to_owned(),
            embedded_ty,
            target,
            embedded,
            slot,
            at,
        });
        Ok(())
    }

    /// Whether a model's property list is final.
    fn is_settled(&self, id: ModelId) -> bool {
        self.models.model(id).complete && !self.pending.iter().any(|p| p.target == id)
    }

    /// Flatten deferred embeddings, innermost first. An embedding that can
    /// never settle (a model embedding itself through a cycle) is an error.
    pub(crate) fn settle_embeds(&mut self) -> Result<()> {
        while !self.pending.is_empty() {
            let Some(index) = self
                .pending
                .iter()
                .position(|pending| self.is_settled(pending.embedded))
            else {
                let stuck = &self.pending[0];
                return Err(Error::EmbeddedUnresolved {
                    owner: self.schema.display(stuck.owner),
                    field: stuck.field.clone(),
                    ty: self.schema.display(stuck.embedded_ty),
                });
            };

            let done = self.pending.remove(index);
            let embedded = self.models.model(done.embedded).clone();
            let added = embedded.properties.len();
            self.models
                .model_mut(done.target)
                .promote(done.slot, done.at, &embedded);

            // Later embeddings into the same model sit after the spliced run.
            for (i, later) in self.pending.iter_mut().enumerate() {
                if later.target == done.target
                    && (later.at > done.at || (later.at == done.at && i >= index))
                {
                    later.at += added;
                }
            }
        }
        Ok(())
    }

    fn ordinary_field(&mut self, owner: TypeId, target: ModelId, field: &Field) -> Result<()> {
        let schema = self.schema;
        let field_ty = field.ty();
        let ultimate = schema.ultimate(field_ty);
        if schema[ultimate].kind() == Kind::Struct && !self.types.is_terminal(field_ty) {
            self.resolve(ultimate)?;
        }

        let overrides = self.overrides;
        let overridden = overrides.property_for(owner, field.name());
        let ty = match overridden.and_then(|o| o.ty.clone()) {
            Some(ty) => ty,
            None => self
                .types
                .map(schema, &self.models, field_ty)
                .map_err(|err| match err {
                    Error::UnnamedType { path } => Error::UnnamedType {
                        path: self.walk_path(&path),
                    },
                    other => other,
                })?,
        };

        let mut prop = Property::new(field.name(), ty);
        let field_kind = schema[field_ty].kind();
        let rest = match field.struct_tag().get("rest") {
            Some(raw) => Some(RestTag::parse(raw).map_err(|reason| Error::InvalidTag {
                owner: schema.display(owner),
                field: field.name().to_owned(),
                tag: raw.to_owned(),
                reason,
            })?),
            None => None,
        };

        match rest {
            Some(tag) if tag.location == Location::Query => {
                let name = tag.name.unwrap_or_else(|| field.name().to_lowercase());
                prop.attributes.push(Attribute::query_string(
                    name,
                    tag.required,
                    query_converter(field_kind),
                ));
                prop.optional = !tag.required;
                prop.default_value = tag.default;
            }
            _ => {
                let json_name = field.struct_tag().json_name().unwrap_or(field.name());
                prop.attributes.push(Attribute::json_property_name(json_name));
                prop.optional = field_kind == Kind::Pointer;
            }
        }

        if let Some(overridden) = overridden {
            prop.attributes.extend(overridden.attributes.iter().cloned());
        }

        self.models.model_mut(target).properties.push(prop);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::mapper::TypeMap;
    use crate::model::NamedType;
    use crate::overrides::{Disambiguations, PropertyOverride};
    use crate::reflector::resolve_models;
    use crate::registry::ModelSet;
    use crate::render::Emit;
    use crate::schema::Schema;

    fn resolve(schema: &Schema, roots: &[TypeId]) -> ModelSet {
        resolve_models(schema, &TypeMap::csharp(), &Disambiguations::new(), roots).unwrap()
    }

    fn attributes(prop: &Property) -> Vec<String> {
        prop.attributes.iter().map(Emit::emit).collect()
    }

    #[test]
    fn test_rest_tag_grammar() {
        assert_eq!(
            RestTag::parse("query,t").unwrap(),
            RestTag {
                location: Location::Query,
                name: Some("t".into()),
                required: false,
                default: None,
            }
        );
        let tag = RestTag::parse("query,,required").unwrap();
        assert_eq!(tag.name, None);
        assert!(tag.required);

        let tag = RestTag::parse("query,name=shared-size,default=a,b").unwrap();
        assert_eq!(tag.name.as_deref(), Some("shared-size"));
        assert_eq!(tag.default.as_deref(), Some("a,b"));

        assert_eq!(RestTag::parse("body").unwrap().location, Location::Body);
        assert!(RestTag::parse("header").is_err());
        assert!(RestTag::parse("query,path,bogus").is_err());
        assert!(RestTag::parse("body,name").is_err());
    }

    #[test]
    fn test_simple_struct() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let int = schema.primitive(Kind::Int);
        let pint = schema.pointer(int);
        let simple = schema.named_struct(
            "pkg",
            "Simple",
            vec![
                Field::new("A", string).tag(r#"json:"a""#),
                Field::new("B", pint).tag(r#"json:"b""#),
            ],
        );

        let models = resolve(&schema, &[simple]);
        let model = models.get(simple).unwrap();
        assert_eq!(model.name, "Simple");

        let a = model.property("A").unwrap();
        assert_eq!(a.ty.emit(), "string");
        assert!(!a.optional);
        assert_eq!(attributes(a), [r#"[JsonPropertyName("a")]"#]);

        let b = model.property("B").unwrap();
        assert_eq!(b.ty.emit(), "long");
        assert!(b.optional);
        assert_eq!(attributes(b), [r#"[JsonPropertyName("b")]"#]);
    }

    #[test]
    fn test_json_name_defaults_to_field_name() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let root = schema.named_struct(
            "pkg",
            "Root",
            vec![
                Field::new("Plain", string),
                Field::new("Empty", string).tag(r#"json:",omitempty""#),
            ],
        );

        let models = resolve(&schema, &[root]);
        let model = models.get(root).unwrap();
        assert_eq!(
            attributes(model.property("Plain").unwrap()),
            [r#"[JsonPropertyName("Plain")]"#]
        );
        assert_eq!(
            attributes(model.property("Empty").unwrap()),
            [r#"[JsonPropertyName("Empty")]"#]
        );
    }

    #[test]
    fn test_skipped_kinds_and_omitted_fields() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let func = schema.primitive(Kind::Func);
        let uintptr = schema.primitive(Kind::Uintptr);
        let hidden = schema.named_struct("pkg", "Hidden", vec![Field::new("X", string)]);
        let root = schema.named_struct(
            "pkg",
            "Root",
            vec![
                Field::new("Callback", func),
                Field::new("Fd", uintptr),
                Field::new("Secret", hidden).tag(r#"json:"-""#),
                Field::new("Kept", string),
            ],
        );

        let models = resolve(&schema, &[root]);
        let model = models.get(root).unwrap();
        let names: Vec<_> = model.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Kept"]);
        assert!(!models.contains(hidden));
    }

    #[test]
    fn test_collection_fields() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let marker = schema.anonymous_struct(Vec::new());
        let names = schema.slice(string);
        let labels = schema.map(string, string);
        let volumes = schema.map(string, marker);
        let root = schema.named_struct(
            "pkg",
            "Root",
            vec![
                Field::new("Names", names),
                Field::new("Labels", labels),
                Field::new("Volumes", volumes),
            ],
        );
        let types = TypeMap::csharp().with_marker(marker);

        let models = resolve_models(&schema, &types, &Disambiguations::new(), &[root]).unwrap();
        let model = models.get(root).unwrap();
        assert_eq!(model.property("Names").unwrap().ty.emit(), "IList<string>");
        assert_eq!(
            model.property("Labels").unwrap().ty.emit(),
            "IDictionary<string, string>"
        );
        assert_eq!(
            model.property("Volumes").unwrap().ty.emit(),
            "IDictionary<string, EmptyStruct>"
        );
        assert_eq!(models.len(), 1);
    }

    #[test]
    fn test_struct_elements_are_resolved_eagerly() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let port = schema.named_struct("container", "Port", vec![Field::new("IP", string)]);
        let ports = schema.slice(port);
        let by_name = schema.map(string, ports);
        let root = schema.named_struct("pkg", "Root", vec![Field::new("Ports", by_name)]);

        let models = resolve(&schema, &[root]);
        assert!(models.contains(port));
        assert_eq!(
            models.get(root).unwrap().property("Ports").unwrap().ty.emit(),
            "IDictionary<string, IList<Port>>"
        );
    }

    #[test]
    fn test_query_and_body_parameters() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let boolean = schema.primitive(Kind::Bool);
        let uint = schema.primitive(Kind::Uint);
        let puint = schema.pointer(uint);
        let list = schema.slice(string);
        let filters = schema.map(string, list);
        let byte = schema.primitive(Kind::Uint8);
        let digest = schema.array(byte, 4);
        let q = schema.named_struct(
            "main",
            "Q",
            vec![
                Field::new("Force", boolean).tag(r#"rest:"query""#),
                Field::new("Path", string).tag(r#"rest:"query,path,required""#),
                Field::new("Filters", filters).tag(r#"rest:"query""#),
                Field::new("Q", list).tag(r#"rest:"query""#),
                Field::new("Digest", digest).tag(r#"rest:"query,digest""#),
                Field::new("Timeout", puint).tag(r#"rest:"query,t,default=10""#),
                Field::new("Config", string).tag(r#"json:"config" rest:"body""#),
            ],
        );

        let models = resolve(&schema, &[q]);
        let model = models.get(q).unwrap();

        let force = model.property("Force").unwrap();
        assert_eq!(
            attributes(force),
            [r#"[QueryStringParameter("force", false, typeof(BoolQueryStringConverter))]"#]
        );
        assert!(force.optional);

        let path = model.property("Path").unwrap();
        assert_eq!(attributes(path), [r#"[QueryStringParameter("path", true)]"#]);
        assert!(!path.optional);

        assert_eq!(
            attributes(model.property("Filters").unwrap()),
            [r#"[QueryStringParameter("filters", false, typeof(MapQueryStringConverter))]"#]
        );

        let list_param = model.property("Q").unwrap();
        assert_eq!(list_param.ty.emit(), "IList<string>");
        assert!(list_param.optional);
        assert_eq!(
            attributes(list_param),
            [r#"[QueryStringParameter("q", false, typeof(EnumerableQueryStringConverter))]"#]
        );

        let digest = model.property("Digest").unwrap();
        assert_eq!(digest.ty.emit(), "byte[]");
        assert!(digest.optional);
        assert_eq!(
            attributes(digest),
            [r#"[QueryStringParameter("digest", false, typeof(EnumerableQueryStringConverter))]"#]
        );

        let timeout = model.property("Timeout").unwrap();
        assert_eq!(timeout.default_value.as_deref(), Some("10"));
        assert_eq!(
            timeout.emit_indented(0).lines().last().unwrap(),
            "public ulong? Timeout { get; set; } = 10;"
        );

        let config = model.property("Config").unwrap();
        assert_eq!(attributes(config), [r#"[JsonPropertyName("config")]"#]);
        assert!(!config.optional);
    }

    #[test]
    fn test_invalid_rest_tag() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let q = schema.named_struct(
            "main",
            "Q",
            vec![Field::new("Name", string).tag(r#"rest:"header""#)],
        );

        let err = resolve_models(&schema, &TypeMap::csharp(), &Disambiguations::new(), &[q])
            .unwrap_err();
        match err {
            Error::InvalidTag {
                owner, field, tag, ..
            } => {
                assert_eq!(owner, "main.Q");
                assert_eq!(field, "Name");
                assert_eq!(tag, "header");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inline_anonymous_struct() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let platform = schema.anonymous_struct(vec![Field::new("Name", string)]);
        let version = schema.named_struct(
            "types",
            "Version",
            vec![Field::new("Platform", platform).tag(r#"json:",omitempty""#)],
        );

        let models = resolve(&schema, &[version]);
        assert_eq!(models.len(), 2);

        let inline = models.get(platform).unwrap();
        assert_eq!(inline.name, "VersionPlatform");
        assert_eq!(inline.source_name, "types.Version.Platform");
        assert_eq!(inline.properties.len(), 1);

        let prop = models.get(version).unwrap().property("Platform").unwrap();
        assert_eq!(prop.ty.emit(), "VersionPlatform");
        assert_eq!(attributes(prop), [r#"[JsonPropertyName("Platform")]"#]);
    }

    #[test]
    fn test_nested_inline_structs_use_owner_model_name() {
        let mut schema = Schema::new();
        let int = schema.primitive(Kind::Int64);
        let size = schema.anonymous_struct(vec![Field::new("Total", int)]);
        let usage = schema.anonymous_struct(vec![Field::new("Size", size).tag(r#"json:"size""#)]);
        let summary = schema.named_struct("image", "ManifestSummary", vec![Field::new("Usage", usage)]);

        let models = resolve(&schema, &[summary]);
        assert_eq!(models.get(usage).unwrap().name, "ManifestSummaryUsage");
        assert_eq!(models.get(size).unwrap().name, "ManifestSummaryUsageSize");
        assert_eq!(
            models.get(size).unwrap().source_name,
            "image.ManifestSummary.Usage.Size"
        );
    }

    #[test]
    fn test_pointer_to_anonymous_struct_names_path() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let anon = schema.anonymous_struct(vec![Field::new("X", string)]);
        let ptr = schema.pointer(anon);
        let root = schema.named_struct("pkg", "Root", vec![Field::new("Inner", ptr)]);

        let err = resolve_models(&schema, &TypeMap::csharp(), &Disambiguations::new(), &[root])
            .unwrap_err();
        match err {
            Error::UnnamedType { path } => assert!(path.starts_with("Root.Inner -> "), "{path}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_chan_field_is_unsupported() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let chan = schema.chan(string);
        let root = schema.named_struct("pkg", "Root", vec![Field::new("Events", chan)]);

        let err = resolve_models(&schema, &TypeMap::csharp(), &Disambiguations::new(), &[root])
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedKind { ref kind, .. } if kind == "chan"));
    }

    #[test]
    fn test_embedded_struct() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let int = schema.primitive(Kind::Int64);
        let base = schema.named_struct(
            "pkg",
            "Base",
            vec![
                Field::new("ID", string).tag(r#"json:"Id""#),
                Field::new("Size", int),
            ],
        );
        let pbase = schema.pointer(base);
        let wrapper = schema.named_struct(
            "pkg",
            "Wrapper",
            vec![Field::embedded("Base", pbase), Field::new("Extra", string)],
        );

        let models = resolve(&schema, &[wrapper]);
        let model = models.get(wrapper).unwrap();
        let names: Vec<_> = model.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ID", "Size", "Extra"]);
        assert_eq!(model.constructors.len(), 2);
        assert!(model.constructors[0].parameters.is_empty());
        let param = &model.constructors[1].parameters[0];
        assert_eq!(param.name, "Base");
        assert_eq!(param.model, "Base");
        assert_eq!(param.promoted, ["ID", "Size"]);
        assert!(models.contains(base));
    }

    #[test]
    fn test_three_level_embedding_composes() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let c = schema.named_struct("pkg", "C", vec![Field::new("Z", string)]);
        let b = schema.named_struct(
            "pkg",
            "B",
            vec![Field::embedded("C", c), Field::new("Y", string)],
        );
        let a = schema.named_struct(
            "pkg",
            "A",
            vec![Field::embedded("B", b), Field::new("X", string)],
        );

        let models = resolve(&schema, &[a]);
        let model = models.get(a).unwrap();
        let names: Vec<_> = model.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Z", "Y", "X"]);
        assert_eq!(model.constructors[1].parameters[0].model, "B");
        assert_eq!(model.constructors[1].parameters[0].promoted, ["Z", "Y"]);
        assert_eq!(models.get(b).unwrap().constructors.len(), 2);
        assert_eq!(models.len(), 3);
    }

    fn embedding_cycle(schema: &mut Schema) -> (TypeId, TypeId, TypeId) {
        let string = schema.primitive(Kind::String);
        let a = schema.declare_struct("pkg", "A");
        let b = schema.declare_struct("pkg", "B");
        let c = schema.declare_struct("pkg", "C");
        let pb = schema.pointer(b);
        schema.define_fields(
            a,
            vec![Field::new("Child", pb), Field::new("Name", string)],
        );
        schema.define_fields(c, vec![Field::new("Parent", pb)]);
        schema.define_fields(
            b,
            vec![
                Field::embedded("A", a),
                Field::embedded("C", c),
                Field::new("Extra", string),
            ],
        );
        (a, b, c)
    }

    fn shape(models: &ModelSet, ty: TypeId) -> (Vec<String>, Vec<Vec<String>>) {
        let model = models.get(ty).unwrap();
        (
            model.properties.iter().map(|p| p.name.clone()).collect(),
            model
                .constructors
                .iter()
                .flat_map(|ctor| ctor.parameters.iter().map(|p| p.promoted.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_embedding_inside_cycle_is_seed_order_independent() {
        let mut schema = Schema::new();
        let (a, b, c) = embedding_cycle(&mut schema);

        let from_a = resolve(&schema, &[a]);
        let from_b = resolve(&schema, &[b]);
        let from_c = resolve(&schema, &[c]);

        let expected = (
            vec![
                "Child".to_owned(),
                "Name".to_owned(),
                "Parent".to_owned(),
                "Extra".to_owned(),
            ],
            vec![
                vec!["Child".to_owned(), "Name".to_owned()],
                vec!["Parent".to_owned()],
            ],
        );
        assert_eq!(shape(&from_a, b), expected);
        assert_eq!(shape(&from_b, b), expected);
        assert_eq!(shape(&from_c, b), expected);
        assert_eq!(shape(&from_a, a), shape(&from_b, a));
        assert_eq!(
            from_a.get(a).unwrap().property("Child").unwrap().ty.emit(),
            "B"
        );
    }

    #[test]
    fn test_self_embedding_is_unresolved() {
        let mut schema = Schema::new();
        let string = schema.primitive(Kind::String);
        let node = schema.declare_struct("pkg", "Node");
        let pnode = schema.pointer(node);
        schema.define_fields(
            node,
            vec![Field::embedded("Node", pnode), Field::new("Name", string)],
        );

        let err = resolve_models(&schema, &TypeMap::csharp(), &Disambiguations::new(), &[node])
            .unwrap_err();
        match err {
            Error::EmbeddedUnresolved { owner, field, ty } => {
                assert_eq!(owner, "pkg.Node");
                assert_eq!(field, "Node");
                assert_eq!(ty, "pkg.Node");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_embedded_scalar_is_unresolved() {
        let mut schema = Schema::new();
        let port = schema.named_scalar("nat", "Port", Kind::String);
        let root = schema.named_struct("pkg", "Root", vec![Field::embedded("Port", port)]);

        let err = resolve_models(&schema, &TypeMap::csharp(), &Disambiguations::new(), &[root])
            .unwrap_err();
        match err {
            Error::EmbeddedUnresolved { owner, field, ty } => {
                assert_eq!(owner, "pkg.Root");
                assert_eq!(field, "Port");
                assert_eq!(ty, "nat.Port");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_property_overrides() {
        let mut schema = Schema::new();
        let int = schema.primitive(Kind::Int);
        let pint = schema.pointer(int);
        let string = schema.primitive(Kind::String);
        let config = schema.named_struct(
            "container",
            "Config",
            vec![
                Field::new("StopTimeout", pint).tag(r#"json:",omitempty""#),
                Field::new("Image", string),
            ],
        );
        let mut overrides = Disambiguations::new();
        overrides.override_property(
            config,
            PropertyOverride::new("StopTimeout")
                .with_type(TargetType::named(NamedType::value("System", "TimeSpan")))
                .with_attribute(Attribute::json_converter("TimeSpanSecondsConverter")),
        );

        let models = resolve_models(&schema, &TypeMap::csharp(), &overrides, &[config]).unwrap();
        let prop = models.get(config).unwrap().property("StopTimeout").unwrap();
        assert_eq!(prop.ty.emit(), "TimeSpan");
        assert!(prop.optional);
        assert_eq!(
            attributes(prop),
            [
                r#"[JsonPropertyName("StopTimeout")]"#,
                "[JsonConverter(typeof(TimeSpanSecondsConverter))]",
            ]
        );
        assert_eq!(
            prop.emit_indented(0).lines().last().unwrap(),
            "public TimeSpan? StopTimeout { get; set; }"
        );
    }

    #[test]
    fn test_override_type_skips_unsupported_mapping() {
        let mut schema = Schema::new();
        let complex = schema.primitive(Kind::Complex64);
        let root = schema.named_struct("pkg", "Root", vec![Field::new("Value", complex)]);
        let mut overrides = Disambiguations::new();
        overrides.override_property(
            root,
            PropertyOverride::new("Value").with_type(TargetType::model("string")),
        );

        let models = resolve_models(&schema, &TypeMap::csharp(), &overrides, &[root]).unwrap();
        assert_eq!(
            models.get(root).unwrap().property("Value").unwrap().ty.emit(),
            "string"
        );
    }
}
