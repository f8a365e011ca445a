//! Reflective model generator core.
//!
//! Source API types are declared in a [`Schema`]. A [`Session`] walks the type
//! graph from a list of seed types, producing one [`Model`] per reachable
//! struct, and an [`Emitter`] writes each model as a C# artifact.

pub mod config;
pub mod emitter;
pub mod error;
pub mod fields;
pub mod mapper;
pub mod model;
pub mod overrides;
pub mod reflector;
pub mod registry;
pub mod render;
pub mod schema;

pub use config::GeneratorConfig;
pub use emitter::{DEFAULT_NAMESPACE, Emitter, GENERATED_SUFFIX};
pub use error::{Error, Result};
pub use fields::{Location, RestTag};
pub use mapper::TypeMap;
pub use model::{
    Argument, Attribute, Constructor, Model, ModelPlan, NamedType, Parameter, Property, TargetType,
};
pub use overrides::{Disambiguations, PropertyOverride, TypeOverride};
pub use reflector::{Session, resolve_models};
pub use registry::ModelSet;
pub use render::{Emit, ModelFile};
pub use schema::{Field, Kind, Schema, StructTag, TypeDescriptor, TypeId};
