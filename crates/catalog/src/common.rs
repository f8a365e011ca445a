//! Shared primitive types and field helpers for the catalog tables.

use specgen_core::{Field, Kind, Schema, TypeId};

/// Frequently used source types, interned once per catalog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Prims {
    pub string: TypeId,
    pub boolean: TypeId,
    pub int: TypeId,
    pub int64: TypeId,
    pub uint: TypeId,
    pub uint16: TypeId,
    pub uint32: TypeId,
    pub uint64: TypeId,
    pub float32: TypeId,
    pub any: TypeId,
    pub bytes: TypeId,
    pub strings: TypeId,
    /// `map[string]string`
    pub labels: TypeId,
    /// `map[string]interface{}`
    pub options: TypeId,
    /// `map[string]map[string]bool`, the query filter shape.
    pub filters: TypeId,
    /// `struct{}`
    pub marker: TypeId,
    /// `map[string]struct{}`
    pub set: TypeId,
    /// `time.Time`
    pub time: TypeId,
    /// `time.Duration`
    pub duration: TypeId,
    /// `json.RawMessage`
    pub raw_json: TypeId,
    /// `os.FileMode`
    pub file_mode: TypeId,
    /// `digest.Digest`
    pub digest: TypeId,
}

impl Prims {
    pub(crate) fn new(schema: &mut Schema) -> Self {
        let string = schema.primitive(Kind::String);
        let boolean = schema.primitive(Kind::Bool);
        let uint8 = schema.primitive(Kind::Uint8);
        let any = schema.primitive(Kind::Interface);
        let bytes = schema.slice(uint8);
        let bool_map = schema.map(string, boolean);
        let marker = schema.anonymous_struct(Vec::new());

        Self {
            string,
            boolean,
            int: schema.primitive(Kind::Int),
            int64: schema.primitive(Kind::Int64),
            uint: schema.primitive(Kind::Uint),
            uint16: schema.primitive(Kind::Uint16),
            uint32: schema.primitive(Kind::Uint32),
            uint64: schema.primitive(Kind::Uint64),
            float32: schema.primitive(Kind::Float32),
            any,
            bytes,
            strings: schema.slice(string),
            labels: schema.map(string, string),
            options: schema.map(string, any),
            filters: schema.map(string, bool_map),
            marker,
            set: schema.map(string, marker),
            time: schema.named_struct("time", "Time", Vec::new()),
            duration: schema.named_scalar("time", "Duration", Kind::Int64),
            raw_json: schema.named_slice("json", "RawMessage", uint8),
            file_mode: schema.named_scalar("os", "FileMode", Kind::Uint32),
            digest: schema.named_scalar("digest", "Digest", Kind::String),
        }
    }
}

/// A field serialized under its own name.
pub(crate) fn field(name: &str, ty: TypeId) -> Field {
    Field::new(name, ty)
}

/// A field with a `json` tag.
pub(crate) fn json(name: &str, ty: TypeId, tag: &str) -> Field {
    Field::new(name, ty).tag(&format!(r#"json:"{tag}""#))
}

/// A request field with a `rest` tag.
pub(crate) fn rest(name: &str, ty: TypeId, tag: &str) -> Field {
    Field::new(name, ty).tag(&format!(r#"rest:"{tag}""#))
}

/// A field dropped from serialization.
pub(crate) fn hidden(name: &str, ty: TypeId) -> Field {
    Field::new(name, ty).tag(r#"json:"-""#)
}

pub(crate) fn embed(name: &str, ty: TypeId) -> Field {
    Field::embedded(name, ty)
}
