//! Memoized registry of resolved models.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::{Error, Result};
use crate::model::{Model, ModelPlan};
use crate::schema::TypeId;

/// Index of a model inside a [`ModelSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModelId(usize);

/// Every model resolved during a session, keyed by source type identity and
/// kept in discovery order.
#[derive(Debug, Default)]
pub struct ModelSet {
    models: Vec<Model>,
    by_type: HashMap<TypeId, usize>,
}

impl ModelSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no model was resolved.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Model registered for a source type.
    pub fn get(&self, ty: TypeId) -> Option<&Model> {
        self.by_type.get(&ty).map(|&index| &self.models[index])
    }

    /// Model with the given final name.
    pub fn find(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }

    /// Whether a model exists for `ty`.
    pub fn contains(&self, ty: TypeId) -> bool {
        self.by_type.contains_key(&ty)
    }

    /// Models in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    pub(crate) fn id_of(&self, ty: TypeId) -> Option<ModelId> {
        self.by_type.get(&ty).copied().map(ModelId)
    }

    pub(crate) fn model(&self, id: ModelId) -> &Model {
        &self.models[id.0]
    }

    pub(crate) fn model_mut(&mut self, id: ModelId) -> &mut Model {
        &mut self.models[id.0]
    }

    /// Register `model` for `ty`, returning the existing entry if one exists.
    pub(crate) fn insert(&mut self, ty: TypeId, model: Model) -> ModelId {
        match self.by_type.entry(ty) {
            Entry::Occupied(entry) => ModelId(*entry.get()),
            Entry::Vacant(entry) => {
                self.models.push(model);
                let index = self.models.len() - 1;
                entry.insert(index);
                ModelId(index)
            }
        }
    }

    /// Fail if two distinct source types resolved to the same model name.
    pub fn check_unique_names(&self) -> Result<()> {
        let mut seen: HashMap<&str, &Model> = HashMap::with_capacity(self.models.len());
        for model in &self.models {
            if let Some(first) = seen.insert(model.name.as_str(), model) {
                return Err(Error::DuplicateModelName {
                    name: model.name.clone(),
                    first: first.source_name.clone(),
                    second: model.source_name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Serializable summary of every model, in discovery order.
    pub fn plan(&self) -> Vec<ModelPlan> {
        self.models.iter().map(ModelPlan::from).collect()
    }
}

impl<'a> IntoIterator for &'a ModelSet {
    type Item = &'a Model;
    type IntoIter = std::slice::Iter<'a, Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn test_insert_is_idempotent_per_type() {
        let mut schema = Schema::new();
        let a = schema.declare_struct("pkg", "A");
        let mut set = ModelSet::new();
        let first = set.insert(a, Model::new("A", "pkg.A"));
        let second = set.insert(a, Model::new("Other", "pkg.A"));
        assert_eq!(first, second);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(a).unwrap().name, "A");
    }

    #[test]
    fn test_plan_serializes_types_and_embeds() {
        use crate::model::{Property, TargetType};

        let mut schema = Schema::new();
        let base_ty = schema.declare_struct("pkg", "Base");
        let owner_ty = schema.declare_struct("pkg", "Owner");

        let mut base = Model::new("Base", "pkg.Base");
        base.properties.push(Property::new(
            "Tags",
            TargetType::List(Box::new(TargetType::model("string"))),
        ));
        let mut owner = Model::new("Owner", "pkg.Owner");
        owner.embed("Base", &base);

        let mut set = ModelSet::new();
        set.insert(base_ty, base);
        set.insert(owner_ty, owner);

        let plan = serde_json::to_value(set.plan()).unwrap();
        assert_eq!(plan[0]["name"], "Base");
        assert_eq!(plan[0]["properties"][0]["type"], "IList<string>");
        assert!(plan[0].get("embeds").is_none());
        assert_eq!(plan[1]["embeds"][0]["model"], "Base");
        assert_eq!(plan[1]["properties"][0]["optional"], false);
    }

    #[test]
    fn test_duplicate_names_are_reported_with_both_sources() {
        let mut schema = Schema::new();
        let a = schema.declare_struct("mount", "Driver");
        let b = schema.declare_struct("swarm", "Driver");
        let mut set = ModelSet::new();
        set.insert(a, Model::new("Driver", "mount.Driver"));
        set.insert(b, Model::new("Driver", "swarm.Driver"));

        let err = set.check_unique_names().unwrap_err();
        match err {
            Error::DuplicateModelName {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "Driver");
                assert_eq!(first, "mount.Driver");
                assert_eq!(second, "swarm.Driver");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
