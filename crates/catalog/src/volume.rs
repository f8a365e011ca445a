//! `volume` package.

use specgen_core::{Kind, Schema};

use crate::common::{Prims, field, json};

pub(crate) fn define(schema: &mut Schema, p: &Prims) {
    let scope = schema.named_scalar("volume", "Scope", Kind::String);
    let sharing = schema.named_scalar("volume", "SharingMode", Kind::String);
    let availability = schema.named_scalar("volume", "Availability", Kind::String);

    let usage = schema.named_struct(
        "volume",
        "UsageData",
        vec![field("RefCount", p.int64), field("Size", p.int64)],
    );
    let usage_ptr = schema.pointer(usage);
    let volume = schema.named_struct(
        "volume",
        "Volume",
        vec![
            json("CreatedAt", p.string, ",omitempty"),
            field("Driver", p.string),
            field("Labels", p.labels),
            field("Mountpoint", p.string),
            field("Name", p.string),
            field("Options", p.labels),
            field("Scope", p.string),
            json("Status", p.options, ",omitempty"),
            json("UsageData", usage_ptr, ",omitempty"),
        ],
    );
    let volume_ptr = schema.pointer(volume);
    let volumes = schema.slice(volume_ptr);
    schema.named_struct(
        "volume",
        "ListResponse",
        vec![field("Volumes", volumes), field("Warnings", p.strings)],
    );
    schema.named_struct(
        "volume",
        "PruneReport",
        vec![
            field("VolumesDeleted", p.strings),
            field("SpaceReclaimed", p.uint64),
        ],
    );

    let type_mount = schema.named_struct(
        "volume",
        "TypeMount",
        vec![
            json("FsType", p.string, ",omitempty"),
            json("MountFlags", p.strings, ",omitempty"),
        ],
    );
    let type_block = schema.named_struct("volume", "TypeBlock", Vec::new());
    let type_mount_ptr = schema.pointer(type_mount);
    let type_block_ptr = schema.pointer(type_block);
    let access = schema.named_struct(
        "volume",
        "AccessMode",
        vec![
            json("Scope", scope, ",omitempty"),
            json("Sharing", sharing, ",omitempty"),
            json("MountVolume", type_mount_ptr, ",omitempty"),
            json("BlockVolume", type_block_ptr, ",omitempty"),
        ],
    );
    let topology = schema.named_struct(
        "volume",
        "Topology",
        vec![json("Segments", p.labels, ",omitempty")],
    );
    let topologies = schema.slice(topology);
    let requirement = schema.named_struct(
        "volume",
        "TopologyRequirement",
        vec![
            json("Requisite", topologies, ",omitempty"),
            json("Preferred", topologies, ",omitempty"),
        ],
    );
    let capacity = schema.named_struct(
        "volume",
        "CapacityRange",
        vec![
            field("RequiredBytes", p.int64),
            field("LimitBytes", p.int64),
        ],
    );
    let secret = schema.named_struct(
        "volume",
        "Secret",
        vec![field("Key", p.string), field("Secret", p.string)],
    );

    let access_ptr = schema.pointer(access);
    let requirement_ptr = schema.pointer(requirement);
    let capacity_ptr = schema.pointer(capacity);
    let secrets = schema.slice(secret);
    let spec = schema.named_struct(
        "volume",
        "ClusterVolumeSpec",
        vec![
            json("Group", p.string, ",omitempty"),
            json("AccessMode", access_ptr, ",omitempty"),
            json("AccessibilityRequirements", requirement_ptr, ",omitempty"),
            json("CapacityRange", capacity_ptr, ",omitempty"),
            json("Secrets", secrets, ",omitempty"),
            json("Availability", availability, ",omitempty"),
        ],
    );

    let spec_ptr = schema.pointer(spec);
    schema.named_struct(
        "volume",
        "CreateOptions",
        vec![
            field("Name", p.string),
            field("Driver", p.string),
            field("DriverOpts", p.labels),
            field("Labels", p.labels),
            json("ClusterVolumeSpec", spec_ptr, ",omitempty"),
        ],
    );
}
