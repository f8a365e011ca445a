//! Plugin types.

use specgen_core::Schema;

use crate::common::{Prims, field, json};

pub(crate) fn define(schema: &mut Schema, p: &Prims) {
    let string_ptr = schema.pointer(p.string);

    let args = schema.named_struct(
        "types",
        "PluginConfigArgs",
        vec![
            field("Description", p.string),
            field("Name", p.string),
            field("Settable", p.strings),
            field("Value", p.strings),
        ],
    );
    let env = schema.named_struct(
        "types",
        "PluginEnv",
        vec![
            field("Description", p.string),
            field("Name", p.string),
            field("Settable", p.strings),
            field("Value", string_ptr),
        ],
    );
    let interface_type = schema.named_struct(
        "types",
        "PluginInterfaceType",
        vec![
            field("Capability", p.string),
            field("Prefix", p.string),
            field("Version", p.string),
        ],
    );
    let interface_types = schema.slice(interface_type);
    let interface = schema.named_struct(
        "types",
        "PluginConfigInterface",
        vec![
            json("ProtocolScheme", p.string, ",omitempty"),
            field("Socket", p.string),
            field("Types", interface_types),
        ],
    );
    let device = schema.named_struct(
        "types",
        "PluginDevice",
        vec![
            field("Description", p.string),
            field("Name", p.string),
            field("Path", string_ptr),
            field("Settable", p.strings),
        ],
    );
    let devices = schema.slice(device);
    let linux = schema.named_struct(
        "types",
        "PluginConfigLinux",
        vec![
            field("AllowAllDevices", p.boolean),
            field("Capabilities", p.strings),
            field("Devices", devices),
        ],
    );
    let mount = schema.named_struct(
        "types",
        "PluginMount",
        vec![
            field("Description", p.string),
            field("Destination", p.string),
            field("Name", p.string),
            field("Options", p.strings),
            field("Settable", p.strings),
            field("Source", string_ptr),
            field("Type", p.string),
        ],
    );
    let mounts = schema.slice(mount);
    let network = schema.named_struct(
        "types",
        "PluginConfigNetwork",
        vec![field("Type", p.string)],
    );
    let user = schema.named_struct(
        "types",
        "PluginConfigUser",
        vec![
            json("GID", p.uint32, ",omitempty"),
            json("UID", p.uint32, ",omitempty"),
        ],
    );
    let rootfs = schema.named_struct(
        "types",
        "PluginConfigRootfs",
        vec![
            json("DiffIds", p.strings, "diff_ids,omitempty"),
            json("Type", p.string, "type,omitempty"),
        ],
    );

    let envs = schema.slice(env);
    let rootfs_ptr = schema.pointer(rootfs);
    let config = schema.named_struct(
        "types",
        "PluginConfig",
        vec![
            field("Args", args),
            field("Description", p.string),
            json("DockerVersion", p.string, ",omitempty"),
            field("Documentation", p.string),
            field("Entrypoint", p.strings),
            field("Env", envs),
            field("Interface", interface),
            field("IpcHost", p.boolean),
            field("Linux", linux),
            field("Mounts", mounts),
            field("Network", network),
            field("PidHost", p.boolean),
            field("PropagatedMount", p.string),
            json("User", user, ",omitempty"),
            field("WorkDir", p.string),
            json("Rootfs", rootfs_ptr, "rootfs,omitempty"),
        ],
    );
    let settings = schema.named_struct(
        "types",
        "PluginSettings",
        vec![
            field("Args", p.strings),
            field("Devices", devices),
            field("Env", p.strings),
            field("Mounts", mounts),
        ],
    );
    schema.named_struct(
        "types",
        "Plugin",
        vec![
            json("Config", config, "Config"),
            field("Enabled", p.boolean),
            json("ID", p.string, "Id,omitempty"),
            field("Name", p.string),
            json("PluginReference", p.string, ",omitempty"),
            field("Settings", settings),
        ],
    );
    schema.named_struct(
        "types",
        "PluginPrivilege",
        vec![
            field("Name", p.string),
            field("Description", p.string),
            field("Value", p.strings),
        ],
    );
}
