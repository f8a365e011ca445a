//! `image`, `registry` and the OCI image spec packages.

use specgen_core::{Kind, Schema};

use crate::common::{Prims, embed, field, json};

pub(crate) fn define(schema: &mut Schema, p: &Prims) {
    define_oci(schema, p);
    define_image(schema, p);
    define_registry(schema, p);
}

fn define_oci(schema: &mut Schema, p: &Prims) {
    let platform = schema.named_struct(
        "v1",
        "Platform",
        vec![
            json("Architecture", p.string, "architecture"),
            json("OS", p.string, "os"),
            json("OSVersion", p.string, "os.version,omitempty"),
            json("OSFeatures", p.strings, "os.features,omitempty"),
            json("Variant", p.string, "variant,omitempty"),
        ],
    );
    let platform_ptr = schema.pointer(platform);
    schema.named_struct(
        "v1",
        "Descriptor",
        vec![
            json("MediaType", p.string, "mediaType"),
            json("Digest", p.digest, "digest"),
            json("Size", p.int64, "size"),
            json("URLs", p.strings, "urls,omitempty"),
            json("Annotations", p.labels, "annotations,omitempty"),
            json("Data", p.bytes, "data,omitempty"),
            json("Platform", platform_ptr, "platform,omitempty"),
            json("ArtifactType", p.string, "artifactType,omitempty"),
        ],
    );

    let image_config = schema.named_struct(
        "v1",
        "ImageConfig",
        vec![
            json("User", p.string, "User,omitempty"),
            json("ExposedPorts", p.set, "ExposedPorts,omitempty"),
            json("Env", p.strings, "Env,omitempty"),
            json("Entrypoint", p.strings, "Entrypoint,omitempty"),
            json("Cmd", p.strings, "Cmd,omitempty"),
            json("Volumes", p.set, "Volumes,omitempty"),
            json("WorkingDir", p.string, "WorkingDir,omitempty"),
            json("Labels", p.labels, "Labels,omitempty"),
            json("StopSignal", p.string, "StopSignal,omitempty"),
            json("ArgsEscaped", p.boolean, "ArgsEscaped,omitempty"),
        ],
    );
    let health = schema.named_struct(
        "v1",
        "HealthcheckConfig",
        vec![
            json("Test", p.strings, ",omitempty"),
            json("Interval", p.duration, ",omitempty"),
            json("Timeout", p.duration, ",omitempty"),
            json("StartPeriod", p.duration, ",omitempty"),
            json("StartInterval", p.duration, ",omitempty"),
            json("Retries", p.int, ",omitempty"),
        ],
    );
    let health_ptr = schema.pointer(health);
    let ext = schema.named_struct(
        "v1",
        "DockerOCIImageConfigExt",
        vec![
            json("Healthcheck", health_ptr, ",omitempty"),
            json("OnBuild", p.strings, ",omitempty"),
            json("Shell", p.strings, ",omitempty"),
        ],
    );
    schema.named_struct(
        "v1",
        "DockerOCIImageConfig",
        vec![
            embed("ImageConfig", image_config),
            embed("DockerOCIImageConfigExt", ext),
        ],
    );
}

fn define_image(schema: &mut Schema, p: &Prims) {
    let manifest_kind = schema.named_scalar("image", "ManifestKind", Kind::String);
    let descriptor = schema.declare_struct("v1", "Descriptor");
    let platform = schema.declare_struct("v1", "Platform");
    let config = schema.declare_struct("v1", "DockerOCIImageConfig");
    let driver_data = schema.declare_struct("storage", "DriverData");

    let root_fs = schema.named_struct(
        "image",
        "RootFS",
        vec![
            field("Type", p.string),
            json("Layers", p.strings, ",omitempty"),
        ],
    );
    let metadata = schema.named_struct(
        "image",
        "Metadata",
        vec![json("LastTagTime", p.time, ",omitempty")],
    );

    let unpacked = schema.anonymous_struct(vec![field("Unpacked", p.int64)]);
    let properties = schema.named_struct(
        "image",
        "ImageProperties",
        vec![
            field("Platform", platform),
            field("Size", unpacked),
            field("Containers", p.strings),
        ],
    );
    let attestation = schema.named_struct(
        "image",
        "AttestationProperties",
        vec![field("For", p.digest)],
    );
    let size = schema.anonymous_struct(vec![
        field("Total", p.int64),
        field("Content", p.int64),
    ]);
    let properties_ptr = schema.pointer(properties);
    let attestation_ptr = schema.pointer(attestation);
    let manifest = schema.named_struct(
        "image",
        "ManifestSummary",
        vec![
            field("ID", p.string),
            field("Descriptor", descriptor),
            field("Available", p.boolean),
            field("Size", size),
            field("Kind", manifest_kind),
            json("ImageData", properties_ptr, ",omitempty"),
            json("AttestationData", attestation_ptr, ",omitempty"),
        ],
    );

    let config_ptr = schema.pointer(config);
    let descriptor_ptr = schema.pointer(descriptor);
    let manifests = schema.slice(manifest);
    schema.named_struct(
        "image",
        "InspectResponse",
        vec![
            json("ID", p.string, "Id"),
            field("RepoTags", p.strings),
            field("RepoDigests", p.strings),
            field("Parent", p.string),
            field("Comment", p.string),
            json("Created", p.string, ",omitempty"),
            json("DockerVersion", p.string, ",omitempty"),
            field("Author", p.string),
            field("Config", config_ptr),
            field("Architecture", p.string),
            json("Variant", p.string, ",omitempty"),
            field("Os", p.string),
            json("OsVersion", p.string, ",omitempty"),
            field("Size", p.int64),
            field("GraphDriver", driver_data),
            field("RootFS", root_fs),
            field("Metadata", metadata),
            json("Descriptor", descriptor_ptr, ",omitempty"),
            json("Manifests", manifests, ",omitempty"),
        ],
    );
    schema.named_struct(
        "image",
        "Summary",
        vec![
            field("Containers", p.int64),
            field("Created", p.int64),
            json("ID", p.string, "Id"),
            field("Labels", p.labels),
            json("ParentID", p.string, "ParentId"),
            json("Descriptor", descriptor_ptr, ",omitempty"),
            json("Manifests", manifests, ",omitempty"),
            field("RepoDigests", p.strings),
            field("RepoTags", p.strings),
            field("SharedSize", p.int64),
            field("Size", p.int64),
        ],
    );

    let delete = schema.named_struct(
        "image",
        "DeleteResponse",
        vec![
            json("Deleted", p.string, ",omitempty"),
            json("Untagged", p.string, ",omitempty"),
        ],
    );
    let deletes = schema.slice(delete);
    schema.named_struct(
        "image",
        "PruneReport",
        vec![
            field("ImagesDeleted", deletes),
            field("SpaceReclaimed", p.uint64),
        ],
    );
    schema.named_struct(
        "image",
        "HistoryResponseItem",
        vec![
            field("Comment", p.string),
            field("Created", p.int64),
            field("CreatedBy", p.string),
            json("ID", p.string, "Id"),
            field("Size", p.int64),
            field("Tags", p.strings),
        ],
    );
    schema.named_struct(
        "image",
        "LoadResponse",
        vec![field("Body", p.any), field("JSON", p.boolean)],
    );
    schema.named_struct(
        "build",
        "ImageBuildResponse",
        vec![field("Body", p.any), field("OSType", p.string)],
    );
}

fn define_registry(schema: &mut Schema, p: &Prims) {
    schema.named_struct(
        "registry",
        "AuthConfig",
        vec![
            json("Username", p.string, "username,omitempty"),
            json("Password", p.string, "password,omitempty"),
            json("Auth", p.string, "auth,omitempty"),
            json("ServerAddress", p.string, "serveraddress,omitempty"),
            json("IdentityToken", p.string, "identitytoken,omitempty"),
            json("RegistryToken", p.string, "registrytoken,omitempty"),
        ],
    );
    schema.named_struct(
        "registry",
        "AuthenticateOKBody",
        vec![
            json("IdentityToken", p.string, "IdentityToken"),
            json("Status", p.string, "Status"),
        ],
    );
    schema.named_struct(
        "registry",
        "SearchResult",
        vec![
            json("StarCount", p.int, "star_count"),
            json("IsOfficial", p.boolean, "is_official"),
            json("Name", p.string, "name"),
            json("IsAutomated", p.boolean, "is_automated"),
            json("Description", p.string, "description"),
        ],
    );

    let index = schema.named_struct(
        "registry",
        "IndexInfo",
        vec![
            field("Name", p.string),
            field("Mirrors", p.strings),
            field("Secure", p.boolean),
            field("Official", p.boolean),
        ],
    );
    let index_ptr = schema.pointer(index);
    let indexes = schema.map(p.string, index_ptr);
    schema.named_struct(
        "registry",
        "ServiceConfig",
        vec![
            field("AllowNondistributableArtifactsCIDRs", p.strings),
            field("AllowNondistributableArtifactsHostnames", p.strings),
            field("InsecureRegistryCIDRs", p.strings),
            field("IndexConfigs", indexes),
            field("Mirrors", p.strings),
        ],
    );
}
