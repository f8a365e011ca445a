//! `system`, `events`, `jsonmessage` and the daemon-wide `types`.

use specgen_core::{Kind, Schema};

use crate::common::{Prims, embed, field, hidden, json};

pub(crate) fn define(schema: &mut Schema, p: &Prims) {
    define_info(schema, p);
    define_version(schema, p);
    define_events(schema, p);
    define_messages(schema, p);
}

fn define_info(schema: &mut Schema, p: &Prims) {
    let isolation = schema.named_scalar("container", "Isolation", Kind::String);
    let registry = schema.declare_struct("registry", "ServiceConfig");
    let generic = schema.declare_struct("swarm", "GenericResource");
    let swarm_info = schema.declare_struct("swarm", "Info");
    let pair = schema.array(p.string, 2);
    let pairs = schema.slice(pair);

    let plugins = schema.named_struct(
        "system",
        "PluginsInfo",
        vec![
            field("Volume", p.strings),
            field("Network", p.strings),
            field("Authorization", p.strings),
            field("Log", p.strings),
        ],
    );
    let runtime = schema.named_struct(
        "system",
        "Runtime",
        vec![
            json("Path", p.string, "path,omitempty"),
            json("Args", p.strings, "runtimeArgs,omitempty"),
            json("Type", p.string, "runtimeType,omitempty"),
            json("Options", p.options, "options,omitempty"),
        ],
    );
    let with_status = schema.named_struct(
        "system",
        "RuntimeWithStatus",
        vec![
            embed("Runtime", runtime),
            json("Status", p.labels, "status,omitempty"),
        ],
    );
    let commit = schema.named_struct(
        "system",
        "Commit",
        vec![field("ID", p.string), field("Expected", p.string)],
    );
    let pool = schema.named_struct(
        "system",
        "NetworkAddressPool",
        vec![field("Base", p.string), field("Size", p.int)],
    );
    let firewall = schema.named_struct(
        "system",
        "FirewallInfo",
        vec![
            json("Driver", p.string, "Driver"),
            json("Info", pairs, "Info,omitempty"),
        ],
    );
    let namespaces = schema.named_struct(
        "system",
        "ContainerdNamespaces",
        vec![field("Containers", p.string), field("Plugins", p.string)],
    );
    let containerd = schema.named_struct(
        "system",
        "ContainerdInfo",
        vec![
            json("Address", p.string, ",omitempty"),
            field("Namespaces", namespaces),
        ],
    );

    let registry_ptr = schema.pointer(registry);
    let generics = schema.slice(generic);
    let runtimes = schema.map(p.string, with_status);
    let pools = schema.slice(pool);
    let firewall_ptr = schema.pointer(firewall);
    let containerd_ptr = schema.pointer(containerd);
    schema.named_struct(
        "system",
        "Info",
        vec![
            field("ID", p.string),
            field("Containers", p.int),
            field("ContainersRunning", p.int),
            field("ContainersPaused", p.int),
            field("ContainersStopped", p.int),
            field("Images", p.int),
            field("Driver", p.string),
            field("DriverStatus", pairs),
            field("SystemStatus", pairs),
            field("Plugins", plugins),
            field("MemoryLimit", p.boolean),
            field("SwapLimit", p.boolean),
            json("CPUCfsPeriod", p.boolean, "CpuCfsPeriod"),
            json("CPUCfsQuota", p.boolean, "CpuCfsQuota"),
            field("CPUShares", p.boolean),
            field("CPUSet", p.boolean),
            field("PidsLimit", p.boolean),
            field("IPv4Forwarding", p.boolean),
            field("Debug", p.boolean),
            field("NFd", p.int),
            field("OomKillDisable", p.boolean),
            field("NGoroutines", p.int),
            field("SystemTime", p.string),
            field("LoggingDriver", p.string),
            field("CgroupDriver", p.string),
            json("CgroupVersion", p.string, ",omitempty"),
            field("NEventsListener", p.int),
            field("KernelVersion", p.string),
            field("OperatingSystem", p.string),
            field("OSVersion", p.string),
            field("OSType", p.string),
            field("Architecture", p.string),
            field("IndexServerAddress", p.string),
            field("RegistryConfig", registry_ptr),
            field("NCPU", p.int),
            field("MemTotal", p.int64),
            field("GenericResources", generics),
            field("DockerRootDir", p.string),
            json("HTTPProxy", p.string, "HttpProxy"),
            json("HTTPSProxy", p.string, "HttpsProxy"),
            field("NoProxy", p.string),
            field("Name", p.string),
            field("Labels", p.strings),
            field("ExperimentalBuild", p.boolean),
            field("ServerVersion", p.string),
            field("Runtimes", runtimes),
            field("DefaultRuntime", p.string),
            field("Swarm", swarm_info),
            field("LiveRestoreEnabled", p.boolean),
            field("Isolation", isolation),
            field("InitBinary", p.string),
            field("ContainerdCommit", commit),
            field("RuncCommit", commit),
            field("InitCommit", commit),
            field("SecurityOptions", p.strings),
            json("ProductLicense", p.string, ",omitempty"),
            json("DefaultAddressPools", pools, ",omitempty"),
            json("FirewallBackend", firewall_ptr, ",omitempty"),
            field("CDISpecDirs", p.strings),
            json("Containerd", containerd_ptr, ",omitempty"),
            field("Warnings", p.strings),
        ],
    );
}

fn define_version(schema: &mut Schema, p: &Prims) {
    let component = schema.named_struct(
        "types",
        "ComponentVersion",
        vec![
            field("Name", p.string),
            field("Version", p.string),
            json("Details", p.labels, ",omitempty"),
        ],
    );
    let components = schema.slice(component);
    let platform = schema.anonymous_struct(vec![field("Name", p.string)]);
    schema.named_struct(
        "types",
        "Version",
        vec![
            json("Platform", platform, ",omitempty"),
            json("Components", components, ",omitempty"),
            field("Version", p.string),
            json("APIVersion", p.string, "ApiVersion"),
            json("MinAPIVersion", p.string, "MinAPIVersion,omitempty"),
            field("GitCommit", p.string),
            field("GoVersion", p.string),
            field("Os", p.string),
            field("Arch", p.string),
            json("KernelVersion", p.string, ",omitempty"),
            json("Experimental", p.boolean, ",omitempty"),
            json("BuildTime", p.string, ",omitempty"),
        ],
    );
}

fn define_events(schema: &mut Schema, p: &Prims) {
    let event_type = schema.named_scalar("events", "Type", Kind::String);
    let action = schema.named_scalar("events", "Action", Kind::String);

    let actor = schema.named_struct(
        "events",
        "Actor",
        vec![field("ID", p.string), field("Attributes", p.labels)],
    );
    schema.named_struct(
        "events",
        "Message",
        vec![
            json("Status", p.string, "status,omitempty"),
            json("ID", p.string, "id,omitempty"),
            json("From", p.string, "from,omitempty"),
            field("Type", event_type),
            field("Action", action),
            field("Actor", actor),
            json("Scope", p.string, "scope,omitempty"),
            json("Time", p.int64, "time,omitempty"),
            json("TimeNano", p.int64, "timeNano,omitempty"),
        ],
    );
}

fn define_messages(schema: &mut Schema, p: &Prims) {
    let fd = schema.primitive(Kind::Uintptr);
    let clock = schema.primitive(Kind::Func);

    let error = schema.named_struct(
        "jsonmessage",
        "JSONError",
        vec![
            json("Code", p.int, "code,omitempty"),
            json("Message", p.string, "message,omitempty"),
        ],
    );
    let progress = schema.named_struct(
        "jsonmessage",
        "JSONProgress",
        vec![
            field("terminalFd", fd),
            json("Current", p.int64, "current,omitempty"),
            json("Total", p.int64, "total,omitempty"),
            json("Start", p.int64, "start,omitempty"),
            json("HideCounts", p.boolean, "hidecounts,omitempty"),
            json("Units", p.string, "units,omitempty"),
            field("nowFunc", clock),
            hidden("winSize", p.int),
        ],
    );

    let progress_ptr = schema.pointer(progress);
    let error_ptr = schema.pointer(error);
    let raw_ptr = schema.pointer(p.raw_json);
    schema.named_struct(
        "jsonmessage",
        "JSONMessage",
        vec![
            json("Stream", p.string, "stream,omitempty"),
            json("Status", p.string, "status,omitempty"),
            json("Progress", progress_ptr, "progressDetail,omitempty"),
            json("ProgressMessage", p.string, "progress,omitempty"),
            json("ID", p.string, "id,omitempty"),
            json("From", p.string, "from,omitempty"),
            json("Time", p.int64, "time,omitempty"),
            json("TimeNano", p.int64, "timeNano,omitempty"),
            json("Error", error_ptr, "errorDetail,omitempty"),
            json("ErrorMessage", p.string, "error,omitempty"),
            json("Aux", raw_ptr, "aux,omitempty"),
        ],
    );
}
