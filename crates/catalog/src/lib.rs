//! Docker Engine API type catalog.
//!
//! Declares the Engine API source types, the built-in disambiguation table
//! and the seed list walked to produce the client models.

mod common;
mod container;
mod disambiguation;
mod image;
mod network;
mod params;
mod plugin;
mod swarm;
mod system;
mod volume;

use specgen_core::{
    Disambiguations, Error, ModelSet, NamedType, Result, Schema, TargetType, TypeId, TypeMap,
    resolve_models,
};
use tracing::debug;

use crate::common::Prims;

pub use specgen_core::DEFAULT_NAMESPACE as NAMESPACE;

/// Seed types, grouped by endpoint family.
pub const SEEDS: &[&str] = &[
    // containers
    "container.Summary",
    "main.ContainersListParameters",
    "main.CreateContainerParameters",
    "container.CreateResponse",
    "main.ContainerInspectParameters",
    "container.InspectResponse",
    "main.ContainerListProcessesParameters",
    "container.TopResponse",
    "main.ContainerLogsParameters",
    "container.FilesystemChange",
    "main.ContainerStatsParameters",
    "container.StatsResponse",
    "main.ContainerResizeParameters",
    "main.ContainerStartParameters",
    "main.ContainerStopParameters",
    "main.ContainerRestartParameters",
    "main.ContainerKillParameters",
    "main.ContainerUpdateParameters",
    "container.UpdateResponse",
    "main.ContainerRenameParameters",
    "main.ContainerAttachParameters",
    "main.ContainerWaitResponse",
    "main.ContainerRemoveParameters",
    "main.ContainerPathStatParameters",
    "container.PathStat",
    "main.CopyToContainerParameters",
    "main.ContainersPruneParameters",
    "container.PruneReport",
    // exec
    "main.ContainerExecCreateParameters",
    "main.ContainerExecCreateResponse",
    "main.ContainerExecStartParameters",
    "container.ExecInspect",
    // images
    "main.ImagesListParameters",
    "image.Summary",
    "main.ImageBuildParameters",
    "build.ImageBuildResponse",
    "main.ImagesCreateParameters",
    "image.InspectResponse",
    "image.HistoryResponseItem",
    "main.ImagePushParameters",
    "main.ImageTagParameters",
    "main.ImageDeleteParameters",
    "image.DeleteResponse",
    "main.ImagesSearchParameters",
    "registry.SearchResult",
    "main.ImagesPruneParameters",
    "image.PruneReport",
    "main.CommitContainerChangesParameters",
    "main.CommitContainerChangesResponse",
    "main.ImageLoadParameters",
    "image.LoadResponse",
    // networks
    "main.NetworksListParameters",
    "network.Inspect",
    "network.CreateRequest",
    "network.CreateResponse",
    "network.ConnectOptions",
    "network.DisconnectOptions",
    "main.NetworksDeleteUnusedParameters",
    "network.PruneReport",
    // volumes
    "main.VolumesListParameters",
    "volume.ListResponse",
    "volume.CreateOptions",
    "volume.Volume",
    "main.VolumesPruneParameters",
    "volume.PruneReport",
    // plugins
    "main.PluginListParameters",
    "types.Plugin",
    "main.PluginGetPrivilegeParameters",
    "types.PluginPrivilege",
    "main.PluginInstallParameters",
    "main.PluginRemoveParameters",
    "main.PluginEnableParameters",
    "main.PluginDisableParameters",
    "main.PluginUpgradeParameters",
    "main.PluginCreateParameters",
    "main.PluginConfigureParameters",
    // system
    "registry.AuthConfig",
    "registry.AuthenticateOKBody",
    "system.Info",
    "types.Version",
    "main.ContainerEventsParameters",
    "events.Message",
    "jsonmessage.JSONMessage",
    // swarm
    "swarm.Swarm",
    "swarm.InitRequest",
    "swarm.JoinRequest",
    "main.SwarmLeaveParameters",
    "main.SwarmUpdateParameters",
    "swarm.UnlockKeyResponse",
    "main.SwarmUnlockParameters",
    "main.ServiceListParameters",
    "swarm.Service",
    "main.ServiceCreateParameters",
    "swarm.ServiceCreateResponse",
    "main.ServiceUpdateParameters",
    "swarm.ServiceUpdateResponse",
    "main.ServiceLogsParameters",
    "main.TasksListParameters",
    "swarm.Task",
    "swarm.Node",
    "swarm.NodeSpec",
    "main.NodeRemoveParameters",
    "main.SecretsListParameters",
    "swarm.Secret",
    "swarm.SecretSpec",
    "swarm.SecretCreateResponse",
    "main.ConfigsListParameters",
    "swarm.Config",
    "main.SwarmCreateConfigParameters",
    "swarm.ConfigCreateResponse",
    "main.SwarmUpdateConfigParameters",
];

/// Everything a generation run needs: the declared types, the mapping
/// tables, the disambiguation table and the resolved seed list.
#[derive(Debug)]
pub struct Catalog {
    /// Declared Engine API types.
    pub schema: Schema,
    /// Built-in kinds plus the terminal table.
    pub types: TypeMap,
    /// Renames and property overrides.
    pub overrides: Disambiguations,
    /// Seed types in [`SEEDS`] order.
    pub seeds: Vec<TypeId>,
}

impl Catalog {
    /// The Docker Engine API catalog.
    pub fn docker() -> Result<Self> {
        let mut schema = Schema::new();
        let prims = Prims::new(&mut schema);

        container::define(&mut schema, &prims);
        network::define(&mut schema, &prims);
        image::define(&mut schema, &prims);
        volume::define(&mut schema, &prims);
        swarm::define(&mut schema, &prims);
        system::define(&mut schema, &prims);
        plugin::define(&mut schema, &prims);
        params::define(&mut schema, &prims);

        let types = TypeMap::csharp()
            .with_marker(prims.marker)
            .with_terminal(
                prims.time,
                TargetType::Named(NamedType::value("System", "DateTime")),
            )
            .with_terminal(prims.raw_json, TargetType::model("ObjectExtensionData"));

        let overrides = disambiguation::table(&schema)?;
        let seeds = SEEDS
            .iter()
            .map(|qualified| {
                schema.lookup(qualified).ok_or_else(|| Error::UnknownType {
                    name: (*qualified).to_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            types = schema.len(),
            seeds = seeds.len(),
            overrides = overrides.len(),
            "built docker catalog"
        );
        Ok(Self {
            schema,
            types,
            overrides,
            seeds,
        })
    }

    /// Walk every seed and return the resulting models.
    pub fn resolve(&self) -> Result<ModelSet> {
        resolve_models(&self.schema, &self.types, &self.overrides, &self.seeds)
    }
}
