//! Built-in renames and property overrides.
//!
//! Source packages reuse short names (`Summary`, `PruneReport`, `Driver`, ...)
//! that would collide once flattened into one target namespace. Every such
//! type gets an explicit target name here.

use specgen_core::{
    Attribute, Disambiguations, Error, NamedType, PropertyOverride, Result, Schema, TargetType,
    TypeId,
};

const RENAMES: &[(&str, &str)] = &[
    ("container.Summary", "ContainerListResponse"),
    ("container.InspectResponse", "ContainerInspectResponse"),
    ("container.State", "ContainerState"),
    ("container.CreateResponse", "CreateContainerResponse"),
    ("container.UpdateResponse", "ContainerUpdateResponse"),
    ("container.PruneReport", "ContainersPruneResponse"),
    ("container.PathStat", "ContainerPathStatResponse"),
    ("container.FilesystemChange", "ContainerFileSystemChangeResponse"),
    ("container.TopResponse", "ContainerProcessesResponse"),
    ("container.ExecInspect", "ContainerExecInspectResponse"),
    ("container.StatsResponse", "ContainerStatsResponse"),
    ("image.Summary", "ImagesListResponse"),
    ("image.InspectResponse", "ImageInspectResponse"),
    ("image.DeleteResponse", "ImageDeleteResponse"),
    ("image.HistoryResponseItem", "ImageHistoryResponse"),
    ("image.LoadResponse", "ImagesLoadResponse"),
    ("image.PruneReport", "ImagesPruneResponse"),
    ("registry.AuthenticateOKBody", "AuthResponse"),
    ("registry.SearchResult", "ImageSearchResponse"),
    ("network.Inspect", "NetworkResponse"),
    ("network.CreateRequest", "NetworksCreateParameters"),
    ("network.CreateResponse", "NetworksCreateResponse"),
    ("network.ConnectOptions", "NetworkConnectParameters"),
    ("network.DisconnectOptions", "NetworkDisconnectParameters"),
    ("network.PruneReport", "NetworksPruneResponse"),
    ("network.Task", "NetworkTask"),
    ("volume.Volume", "VolumeResponse"),
    ("volume.ListResponse", "VolumesListResponse"),
    ("volume.CreateOptions", "VolumesCreateParameters"),
    ("volume.PruneReport", "VolumesPruneResponse"),
    ("volume.AccessMode", "VolumeAccessMode"),
    ("volume.Secret", "VolumeSecret"),
    ("volume.Topology", "VolumeTopology"),
    ("system.Info", "SystemInfoResponse"),
    ("types.Version", "VersionResponse"),
    ("swarm.Swarm", "SwarmInspectResponse"),
    ("swarm.InitRequest", "SwarmInitParameters"),
    ("swarm.JoinRequest", "SwarmJoinParameters"),
    ("swarm.UnlockKeyResponse", "SwarmUnlockResponse"),
    ("swarm.Spec", "SwarmSpec"),
    ("swarm.Driver", "SwarmDriver"),
    ("swarm.Platform", "SwarmPlatform"),
    ("swarm.Resources", "SwarmResources"),
    ("swarm.Limit", "SwarmLimit"),
    ("swarm.RestartPolicy", "SwarmRestartPolicy"),
    ("swarm.UpdateConfig", "SwarmUpdateConfig"),
    ("swarm.IPAMConfig", "SwarmIPAMConfig"),
    ("swarm.ConfigReference", "SwarmConfigReference"),
    ("swarm.Network", "SwarmNetwork"),
    ("swarm.Service", "SwarmService"),
    ("swarm.Task", "TaskResponse"),
    ("swarm.Node", "NodeListResponse"),
    ("swarm.NodeSpec", "NodeUpdateParameters"),
    ("swarm.Config", "SwarmConfig"),
    ("swarm.ConfigSpec", "SwarmConfigSpec"),
    ("swarm.ConfigCreateResponse", "SwarmCreateConfigResponse"),
    ("runtime.PluginPrivilege", "RuntimePluginPrivilege"),
];

const SECONDS: &str = "TimeSpanSecondsConverter";
const NANOSECONDS: &str = "TimeSpanNanosecondsConverter";
const UNIX_EPOCH: &str = "DateTimeUnixEpochConverter";
const BASE64: &str = "Base64Converter";

enum Replacement {
    /// An integer duration, read through the given converter.
    TimeSpan(&'static str),
    /// An integer Unix timestamp.
    UnixTime,
    /// An ISO-8601 timestamp string.
    DateTime,
    /// A hand-written enum in the model namespace.
    Enum(&'static str),
    /// Same type, serialized through a converter.
    Converter(&'static str),
    StringList,
    ExtensionData,
}

const PROPERTIES: &[(&str, &str, Replacement)] = &[
    ("container.Config", "StopTimeout", Replacement::TimeSpan(SECONDS)),
    ("container.HealthConfig", "Interval", Replacement::TimeSpan(NANOSECONDS)),
    ("container.HealthConfig", "Timeout", Replacement::TimeSpan(NANOSECONDS)),
    ("container.HealthConfig", "StartPeriod", Replacement::TimeSpan(NANOSECONDS)),
    ("container.HealthConfig", "StartInterval", Replacement::TimeSpan(NANOSECONDS)),
    ("v1.HealthcheckConfig", "Interval", Replacement::TimeSpan(NANOSECONDS)),
    ("v1.HealthcheckConfig", "Timeout", Replacement::TimeSpan(NANOSECONDS)),
    ("v1.HealthcheckConfig", "StartPeriod", Replacement::TimeSpan(NANOSECONDS)),
    ("v1.HealthcheckConfig", "StartInterval", Replacement::TimeSpan(NANOSECONDS)),
    ("swarm.ContainerSpec", "StopGracePeriod", Replacement::TimeSpan(NANOSECONDS)),
    ("container.RestartPolicy", "Name", Replacement::Enum("RestartPolicyKind")),
    ("container.FilesystemChange", "Kind", Replacement::Enum("FileSystemChangeKind")),
    ("swarm.TaskStatus", "State", Replacement::Enum("TaskState")),
    ("swarm.Task", "DesiredState", Replacement::Enum("TaskState")),
    ("container.Summary", "Created", Replacement::UnixTime),
    ("container.ContainerJSONBase", "Created", Replacement::DateTime),
    ("image.Summary", "Created", Replacement::UnixTime),
    ("image.InspectResponse", "Created", Replacement::DateTime),
    ("image.HistoryResponseItem", "Created", Replacement::UnixTime),
    ("jsonmessage.JSONMessage", "Time", Replacement::UnixTime),
    ("jsonmessage.JSONMessage", "Aux", Replacement::ExtensionData),
    ("types.PluginConfigInterface", "Types", Replacement::StringList),
    ("v1.Descriptor", "Data", Replacement::Converter(BASE64)),
    ("swarm.SecretSpec", "Data", Replacement::Converter(BASE64)),
    ("swarm.ConfigSpec", "Data", Replacement::Converter(BASE64)),
    ("swarm.TLSInfo", "CertIssuerSubject", Replacement::Converter(BASE64)),
    ("swarm.TLSInfo", "CertIssuerPublicKey", Replacement::Converter(BASE64)),
];

fn date_time() -> TargetType {
    TargetType::Named(NamedType::value("System", "DateTime"))
}

impl Replacement {
    fn to_override(&self, name: &str) -> PropertyOverride {
        let property = PropertyOverride::new(name);
        match self {
            Self::TimeSpan(converter) => property
                .with_type(TargetType::Named(NamedType::value("System", "TimeSpan")))
                .with_attribute(Attribute::json_converter(converter)),
            Self::UnixTime => property
                .with_type(date_time())
                .with_attribute(Attribute::json_converter(UNIX_EPOCH)),
            Self::DateTime => property.with_type(date_time()),
            Self::Enum(name) => property.with_type(TargetType::Named(NamedType::local(*name))),
            Self::Converter(converter) => {
                property.with_attribute(Attribute::json_converter(converter))
            }
            Self::StringList => {
                property.with_type(TargetType::List(Box::new(TargetType::model("string"))))
            }
            Self::ExtensionData => property.with_type(TargetType::model("ObjectExtensionData")),
        }
    }
}

fn lookup(schema: &Schema, qualified: &str) -> Result<TypeId> {
    schema.lookup(qualified).ok_or_else(|| Error::UnknownType {
        name: qualified.to_owned(),
    })
}

/// Build the table for the types declared in `schema`.
pub(crate) fn table(schema: &Schema) -> Result<Disambiguations> {
    let mut table = Disambiguations::new();
    for (qualified, name) in RENAMES {
        table.rename(lookup(schema, qualified)?, *name);
    }
    for (qualified, field, replacement) in PROPERTIES {
        table.override_property(lookup(schema, qualified)?, replacement.to_override(field));
    }
    Ok(table)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rename_targets_are_unique() {
        let mut seen = HashSet::new();
        for (_, name) in RENAMES {
            assert!(seen.insert(*name), "{name} is used twice");
        }
    }

    #[test]
    fn test_unknown_source_type_is_reported() {
        let schema = Schema::new();
        let err = table(&schema).unwrap_err();
        assert!(matches!(err, Error::UnknownType { ref name } if name == RENAMES[0].0));
    }
}
