//! `container`, `mount` and related packages.

use specgen_core::{Kind, Schema};

use crate::common::{Prims, embed, field, json};

pub(crate) fn define(schema: &mut Schema, p: &Prims) {
    define_mount(schema, p);
    define_config(schema, p);
    define_host_config(schema, p);
    define_inspect(schema, p);
    define_summary(schema, p);
    define_stats(schema, p);
    define_responses(schema, p);
}

fn define_mount(schema: &mut Schema, p: &Prims) {
    let mount_type = schema.named_scalar("mount", "Type", Kind::String);
    let propagation = schema.named_scalar("mount", "Propagation", Kind::String);
    let consistency = schema.named_scalar("mount", "Consistency", Kind::String);
    let string_pairs = schema.slice(p.strings);

    let bind = schema.named_struct(
        "mount",
        "BindOptions",
        vec![
            json("Propagation", propagation, ",omitempty"),
            json("NonRecursive", p.boolean, ",omitempty"),
            json("CreateMountpoint", p.boolean, ",omitempty"),
            json("ReadOnlyNonRecursive", p.boolean, ",omitempty"),
            json("ReadOnlyForceRecursive", p.boolean, ",omitempty"),
        ],
    );
    let driver = schema.named_struct(
        "mount",
        "Driver",
        vec![
            json("Name", p.string, ",omitempty"),
            json("Options", p.labels, ",omitempty"),
        ],
    );
    let driver_ptr = schema.pointer(driver);
    let volume = schema.named_struct(
        "mount",
        "VolumeOptions",
        vec![
            json("NoCopy", p.boolean, ",omitempty"),
            json("Labels", p.labels, ",omitempty"),
            json("Subpath", p.string, ",omitempty"),
            json("DriverConfig", driver_ptr, ",omitempty"),
        ],
    );
    let tmpfs = schema.named_struct(
        "mount",
        "TmpfsOptions",
        vec![
            json("SizeBytes", p.int64, ",omitempty"),
            json("Mode", p.file_mode, ",omitempty"),
            json("Options", string_pairs, ",omitempty"),
        ],
    );

    let bind_ptr = schema.pointer(bind);
    let volume_ptr = schema.pointer(volume);
    let tmpfs_ptr = schema.pointer(tmpfs);
    schema.named_struct(
        "mount",
        "Mount",
        vec![
            json("Type", mount_type, ",omitempty"),
            json("Source", p.string, ",omitempty"),
            json("Target", p.string, ",omitempty"),
            json("ReadOnly", p.boolean, ",omitempty"),
            json("Consistency", consistency, ",omitempty"),
            json("BindOptions", bind_ptr, ",omitempty"),
            json("VolumeOptions", volume_ptr, ",omitempty"),
            json("TmpfsOptions", tmpfs_ptr, ",omitempty"),
        ],
    );
}

fn define_config(schema: &mut Schema, p: &Prims) {
    let port = schema.named_scalar("nat", "Port", Kind::String);
    let port_set = schema.named_map("nat", "PortSet", port, p.marker);
    let str_slice = schema.named_slice("strslice", "StrSlice", p.string);

    let health = schema.named_struct(
        "container",
        "HealthConfig",
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
    let int_ptr = schema.pointer(p.int);

    schema.named_struct(
        "container",
        "Config",
        vec![
            field("Hostname", p.string),
            field("Domainname", p.string),
            field("User", p.string),
            field("AttachStdin", p.boolean),
            field("AttachStdout", p.boolean),
            field("AttachStderr", p.boolean),
            json("ExposedPorts", port_set, ",omitempty"),
            field("Tty", p.boolean),
            field("OpenStdin", p.boolean),
            field("StdinOnce", p.boolean),
            field("Env", p.strings),
            field("Cmd", str_slice),
            json("Healthcheck", health_ptr, ",omitempty"),
            json("ArgsEscaped", p.boolean, ",omitempty"),
            field("Image", p.string),
            field("Volumes", p.set),
            field("WorkingDir", p.string),
            field("Entrypoint", str_slice),
            json("NetworkDisabled", p.boolean, ",omitempty"),
            json("MacAddress", p.string, ",omitempty"),
            field("OnBuild", p.strings),
            field("Labels", p.labels),
            json("StopSignal", p.string, ",omitempty"),
            json("StopTimeout", int_ptr, ",omitempty"),
            json("Shell", str_slice, ",omitempty"),
        ],
    );
}

fn define_host_config(schema: &mut Schema, p: &Prims) {
    let network_mode = schema.named_scalar("container", "NetworkMode", Kind::String);
    let isolation = schema.named_scalar("container", "Isolation", Kind::String);
    let policy_mode = schema.named_scalar("container", "RestartPolicyMode", Kind::String);
    let port = schema.named_scalar("nat", "Port", Kind::String);
    let binding = schema.declare_struct("nat", "PortBinding");
    let bindings = schema.slice(binding);
    let port_map = schema.named_map("nat", "PortMap", port, bindings);
    let console = schema.array(p.uint, 2);
    let string_pairs = schema.slice(p.strings);

    schema.define_fields(
        binding,
        vec![json("HostIP", p.string, "HostIp"), field("HostPort", p.string)],
    );
    let log_config = schema.named_struct(
        "container",
        "LogConfig",
        vec![field("Type", p.string), field("Config", p.labels)],
    );
    let restart = schema.named_struct(
        "container",
        "RestartPolicy",
        vec![field("Name", policy_mode), field("MaximumRetryCount", p.int)],
    );

    let weight_device = schema.named_struct(
        "blkiodev",
        "WeightDevice",
        vec![field("Path", p.string), field("Weight", p.uint16)],
    );
    let throttle_device = schema.named_struct(
        "blkiodev",
        "ThrottleDevice",
        vec![field("Path", p.string), field("Rate", p.uint64)],
    );
    let device = schema.named_struct(
        "container",
        "DeviceMapping",
        vec![
            field("PathOnHost", p.string),
            field("PathInContainer", p.string),
            field("CgroupPermissions", p.string),
        ],
    );
    let request = schema.named_struct(
        "container",
        "DeviceRequest",
        vec![
            field("Driver", p.string),
            field("Count", p.int),
            json("DeviceIDs", p.strings, "DeviceIDs"),
            field("Capabilities", string_pairs),
            field("Options", p.labels),
        ],
    );
    let ulimit = schema.named_struct(
        "units",
        "Ulimit",
        vec![
            field("Name", p.string),
            field("Hard", p.int64),
            field("Soft", p.int64),
        ],
    );

    let weight_ptr = schema.pointer(weight_device);
    let weights = schema.slice(weight_ptr);
    let throttle_ptr = schema.pointer(throttle_device);
    let throttles = schema.slice(throttle_ptr);
    let devices = schema.slice(device);
    let requests = schema.slice(request);
    let ulimit_ptr = schema.pointer(ulimit);
    let ulimits = schema.slice(ulimit_ptr);
    let int64_ptr = schema.pointer(p.int64);
    let bool_ptr = schema.pointer(p.boolean);

    let resources = schema.named_struct(
        "container",
        "Resources",
        vec![
            json("CPUShares", p.int64, "CpuShares"),
            field("Memory", p.int64),
            json("NanoCPUs", p.int64, "NanoCpus"),
            field("CgroupParent", p.string),
            field("BlkioWeight", p.uint16),
            field("BlkioWeightDevice", weights),
            field("BlkioDeviceReadBps", throttles),
            field("BlkioDeviceWriteBps", throttles),
            json("BlkioDeviceReadIOps", throttles, "BlkioDeviceReadIOps"),
            json("BlkioDeviceWriteIOps", throttles, "BlkioDeviceWriteIOps"),
            json("CPUPeriod", p.int64, "CpuPeriod"),
            json("CPUQuota", p.int64, "CpuQuota"),
            json("CPURealtimePeriod", p.int64, "CpuRealtimePeriod"),
            json("CPURealtimeRuntime", p.int64, "CpuRealtimeRuntime"),
            field("CpusetCpus", p.string),
            field("CpusetMems", p.string),
            field("Devices", devices),
            field("DeviceCgroupRules", p.strings),
            field("DeviceRequests", requests),
            field("MemoryReservation", p.int64),
            field("MemorySwap", p.int64),
            field("MemorySwappiness", int64_ptr),
            field("OomKillDisable", bool_ptr),
            field("PidsLimit", int64_ptr),
            field("Ulimits", ulimits),
        ],
    );

    let mount = schema.declare_struct("mount", "Mount");
    let mounts = schema.slice(mount);
    schema.named_struct(
        "container",
        "HostConfig",
        vec![
            field("Binds", p.strings),
            field("ContainerIDFile", p.string),
            field("LogConfig", log_config),
            field("NetworkMode", network_mode),
            field("PortBindings", port_map),
            field("RestartPolicy", restart),
            field("AutoRemove", p.boolean),
            field("VolumeDriver", p.string),
            field("VolumesFrom", p.strings),
            field("ConsoleSize", console),
            json("Annotations", p.labels, ",omitempty"),
            field("CapAdd", p.strings),
            field("CapDrop", p.strings),
            field("CgroupnsMode", p.string),
            json("DNS", p.strings, "Dns"),
            json("DNSOptions", p.strings, "DnsOptions"),
            json("DNSSearch", p.strings, "DnsSearch"),
            field("ExtraHosts", p.strings),
            field("GroupAdd", p.strings),
            field("IpcMode", p.string),
            field("Cgroup", p.string),
            field("Links", p.strings),
            field("OomScoreAdj", p.int),
            field("PidMode", p.string),
            field("Privileged", p.boolean),
            field("PublishAllPorts", p.boolean),
            field("ReadonlyRootfs", p.boolean),
            field("SecurityOpt", p.strings),
            json("StorageOpt", p.labels, ",omitempty"),
            json("Tmpfs", p.labels, ",omitempty"),
            field("UTSMode", p.string),
            field("UsernsMode", p.string),
            field("ShmSize", p.int64),
            json("Sysctls", p.labels, ",omitempty"),
            json("Runtime", p.string, ",omitempty"),
            field("Isolation", isolation),
            embed("Resources", resources),
            json("Mounts", mounts, ",omitempty"),
            field("MaskedPaths", p.strings),
            field("ReadonlyPaths", p.strings),
            json("Init", bool_ptr, ",omitempty"),
        ],
    );

    schema.named_struct(
        "container",
        "UpdateConfig",
        vec![embed("Resources", resources), field("RestartPolicy", restart)],
    );
}

fn define_inspect(schema: &mut Schema, p: &Prims) {
    let mount_type = schema.named_scalar("mount", "Type", Kind::String);
    let propagation = schema.named_scalar("mount", "Propagation", Kind::String);
    let port = schema.named_scalar("nat", "Port", Kind::String);
    let binding = schema.declare_struct("nat", "PortBinding");
    let bindings = schema.slice(binding);
    let port_map = schema.named_map("nat", "PortMap", port, bindings);
    let config = schema.declare_struct("container", "Config");
    let host_config = schema.declare_struct("container", "HostConfig");
    let endpoint = schema.declare_struct("network", "EndpointSettings");
    let descriptor = schema.declare_struct("v1", "Descriptor");

    let result = schema.named_struct(
        "container",
        "HealthcheckResult",
        vec![
            field("Start", p.time),
            field("End", p.time),
            field("ExitCode", p.int),
            field("Output", p.string),
        ],
    );
    let result_ptr = schema.pointer(result);
    let results = schema.slice(result_ptr);
    let health = schema.named_struct(
        "container",
        "Health",
        vec![
            field("Status", p.string),
            field("FailingStreak", p.int),
            field("Log", results),
        ],
    );
    let health_ptr = schema.pointer(health);
    let state = schema.named_struct(
        "container",
        "State",
        vec![
            field("Status", p.string),
            field("Running", p.boolean),
            field("Paused", p.boolean),
            field("Restarting", p.boolean),
            field("OOMKilled", p.boolean),
            field("Dead", p.boolean),
            field("Pid", p.int),
            field("ExitCode", p.int),
            field("Error", p.string),
            field("StartedAt", p.string),
            field("FinishedAt", p.string),
            json("Health", health_ptr, ",omitempty"),
        ],
    );
    let driver_data = schema.named_struct(
        "storage",
        "DriverData",
        vec![field("Data", p.labels), field("Name", p.string)],
    );

    let state_ptr = schema.pointer(state);
    let host_config_ptr = schema.pointer(host_config);
    let int64_ptr = schema.pointer(p.int64);
    let base = schema.named_struct(
        "container",
        "ContainerJSONBase",
        vec![
            json("ID", p.string, "Id"),
            field("Created", p.string),
            field("Path", p.string),
            field("Args", p.strings),
            field("State", state_ptr),
            field("Image", p.string),
            field("ResolvConfPath", p.string),
            field("HostnamePath", p.string),
            field("HostsPath", p.string),
            field("LogPath", p.string),
            field("Name", p.string),
            field("RestartCount", p.int),
            field("Driver", p.string),
            field("Platform", p.string),
            field("MountLabel", p.string),
            field("ProcessLabel", p.string),
            field("AppArmorProfile", p.string),
            field("ExecIDs", p.strings),
            field("HostConfig", host_config_ptr),
            field("GraphDriver", driver_data),
            json("SizeRw", int64_ptr, ",omitempty"),
            json("SizeRootFs", int64_ptr, ",omitempty"),
        ],
    );

    let mount_point = schema.named_struct(
        "container",
        "MountPoint",
        vec![
            json("Type", mount_type, ",omitempty"),
            json("Name", p.string, ",omitempty"),
            field("Source", p.string),
            field("Destination", p.string),
            json("Driver", p.string, ",omitempty"),
            field("Mode", p.string),
            field("RW", p.boolean),
            field("Propagation", propagation),
        ],
    );
    let endpoint_ptr = schema.pointer(endpoint);
    let networks = schema.map(p.string, endpoint_ptr);
    let settings = schema.named_struct(
        "container",
        "NetworkSettings",
        vec![
            field("SandboxID", p.string),
            field("SandboxKey", p.string),
            field("Ports", port_map),
            field("Networks", networks),
        ],
    );

    let base_ptr = schema.pointer(base);
    let mount_points = schema.slice(mount_point);
    let config_ptr = schema.pointer(config);
    let settings_ptr = schema.pointer(settings);
    let descriptor_ptr = schema.pointer(descriptor);
    schema.named_struct(
        "container",
        "InspectResponse",
        vec![
            embed("ContainerJSONBase", base_ptr),
            field("Mounts", mount_points),
            field("Config", config_ptr),
            field("NetworkSettings", settings_ptr),
            json("ImageManifestDescriptor", descriptor_ptr, ",omitempty"),
        ],
    );
}

fn define_summary(schema: &mut Schema, p: &Prims) {
    let endpoint = schema.declare_struct("network", "EndpointSettings");
    let descriptor = schema.declare_struct("v1", "Descriptor");
    let mount_point = schema.declare_struct("container", "MountPoint");

    let port = schema.named_struct(
        "container",
        "Port",
        vec![
            json("IP", p.string, ",omitempty"),
            field("PrivatePort", p.uint16),
            json("PublicPort", p.uint16, ",omitempty"),
            field("Type", p.string),
        ],
    );
    let health = schema.named_struct(
        "container",
        "HealthSummary",
        vec![field("Status", p.string), field("FailingStreak", p.int)],
    );
    let endpoint_ptr = schema.pointer(endpoint);
    let networks = schema.map(p.string, endpoint_ptr);
    let settings = schema.named_struct(
        "container",
        "NetworkSettingsSummary",
        vec![field("Networks", networks)],
    );
    let host_config = schema.anonymous_struct(vec![
        json("NetworkMode", p.string, ",omitempty"),
        json("Annotations", p.labels, ",omitempty"),
    ]);

    let descriptor_ptr = schema.pointer(descriptor);
    let ports = schema.slice(port);
    let health_ptr = schema.pointer(health);
    let settings_ptr = schema.pointer(settings);
    let mount_points = schema.slice(mount_point);
    schema.named_struct(
        "container",
        "Summary",
        vec![
            json("ID", p.string, "Id"),
            field("Names", p.strings),
            field("Image", p.string),
            field("ImageID", p.string),
            json("ImageManifestDescriptor", descriptor_ptr, ",omitempty"),
            field("Command", p.string),
            field("Created", p.int64),
            field("Ports", ports),
            json("SizeRw", p.int64, ",omitempty"),
            json("SizeRootFs", p.int64, ",omitempty"),
            field("Labels", p.labels),
            field("State", p.string),
            field("Status", p.string),
            field("HostConfig", host_config),
            json("Health", health_ptr, ",omitempty"),
            field("NetworkSettings", settings_ptr),
            field("Mounts", mount_points),
        ],
    );
}

fn define_stats(schema: &mut Schema, p: &Prims) {
    let uint64s = schema.slice(p.uint64);
    let cpu_usage = schema.named_struct(
        "container",
        "CPUUsage",
        vec![
            json("TotalUsage", p.uint64, "total_usage"),
            json("PercpuUsage", uint64s, "percpu_usage,omitempty"),
            json("UsageInKernelmode", p.uint64, "usage_in_kernelmode"),
            json("UsageInUsermode", p.uint64, "usage_in_usermode"),
        ],
    );
    let throttling = schema.named_struct(
        "container",
        "ThrottlingData",
        vec![
            json("Periods", p.uint64, "periods"),
            json("ThrottledPeriods", p.uint64, "throttled_periods"),
            json("ThrottledTime", p.uint64, "throttled_time"),
        ],
    );
    let cpu = schema.named_struct(
        "container",
        "CPUStats",
        vec![
            json("CPUUsage", cpu_usage, "cpu_usage"),
            json("SystemUsage", p.uint64, "system_cpu_usage,omitempty"),
            json("OnlineCPUs", p.uint32, "online_cpus,omitempty"),
            json("ThrottlingData", throttling, "throttling_data,omitempty"),
        ],
    );
    let counters = schema.map(p.string, p.uint64);
    let memory = schema.named_struct(
        "container",
        "MemoryStats",
        vec![
            json("Usage", p.uint64, "usage,omitempty"),
            json("MaxUsage", p.uint64, "max_usage,omitempty"),
            json("Stats", counters, "stats,omitempty"),
            json("Failcnt", p.uint64, "failcnt,omitempty"),
            json("Limit", p.uint64, "limit,omitempty"),
            json("Commit", p.uint64, "commitbytes,omitempty"),
            json("CommitPeak", p.uint64, "commitpeakbytes,omitempty"),
            json("PrivateWorkingSet", p.uint64, "privateworkingset,omitempty"),
        ],
    );
    let network = schema.named_struct(
        "container",
        "NetworkStats",
        vec![
            json("RxBytes", p.uint64, "rx_bytes"),
            json("RxPackets", p.uint64, "rx_packets"),
            json("RxErrors", p.uint64, "rx_errors"),
            json("RxDropped", p.uint64, "rx_dropped"),
            json("TxBytes", p.uint64, "tx_bytes"),
            json("TxPackets", p.uint64, "tx_packets"),
            json("TxErrors", p.uint64, "tx_errors"),
            json("TxDropped", p.uint64, "tx_dropped"),
            json("EndpointID", p.string, "endpoint_id,omitempty"),
            json("InstanceID", p.string, "instance_id,omitempty"),
        ],
    );
    let pids = schema.named_struct(
        "container",
        "PidsStats",
        vec![
            json("Current", p.uint64, "current,omitempty"),
            json("Limit", p.uint64, "limit,omitempty"),
        ],
    );
    let entry = schema.named_struct(
        "container",
        "BlkioStatEntry",
        vec![
            json("Major", p.uint64, "major"),
            json("Minor", p.uint64, "minor"),
            json("Op", p.string, "op"),
            json("Value", p.uint64, "value"),
        ],
    );
    let entries = schema.slice(entry);
    let blkio = schema.named_struct(
        "container",
        "BlkioStats",
        vec![
            json("IoServiceBytesRecursive", entries, "io_service_bytes_recursive"),
            json("IoServicedRecursive", entries, "io_serviced_recursive"),
            json("IoQueuedRecursive", entries, "io_queue_recursive"),
            json("IoServiceTimeRecursive", entries, "io_service_time_recursive"),
            json("IoWaitTimeRecursive", entries, "io_wait_time_recursive"),
            json("IoMergedRecursive", entries, "io_merged_recursive"),
            json("IoTimeRecursive", entries, "io_time_recursive"),
            json("SectorsRecursive", entries, "sectors_recursive"),
        ],
    );
    let storage = schema.named_struct(
        "container",
        "StorageStats",
        vec![
            json("ReadCountNormalized", p.uint64, "read_count_normalized,omitempty"),
            json("ReadSizeBytes", p.uint64, "read_size_bytes,omitempty"),
            json("WriteCountNormalized", p.uint64, "write_count_normalized,omitempty"),
            json("WriteSizeBytes", p.uint64, "write_size_bytes,omitempty"),
        ],
    );

    let networks = schema.map(p.string, network);
    schema.named_struct(
        "container",
        "StatsResponse",
        vec![
            json("ID", p.string, "id,omitempty"),
            json("Name", p.string, "name,omitempty"),
            json("OSType", p.string, "os_type,omitempty"),
            json("Read", p.time, "read"),
            json("CPUStats", cpu, "cpu_stats"),
            json("MemoryStats", memory, "memory_stats"),
            json("Networks", networks, "networks,omitempty"),
            json("PidsStats", pids, "pids_stats"),
            json("BlkioStats", blkio, "blkio_stats"),
            json("NumProcs", p.uint32, "num_procs"),
            json("StorageStats", storage, "storage_stats"),
            json("PreRead", p.time, "preread"),
            json("PreCPUStats", cpu, "precpu_stats"),
        ],
    );
}

fn define_responses(schema: &mut Schema, p: &Prims) {
    let change_type = schema.named_scalar("container", "ChangeType", Kind::Uint8);
    let string_rows = schema.slice(p.strings);
    let bool_ptr = schema.pointer(p.boolean);

    schema.named_struct(
        "container",
        "CreateResponse",
        vec![json("ID", p.string, "Id"), field("Warnings", p.strings)],
    );
    schema.named_struct(
        "container",
        "UpdateResponse",
        vec![field("Warnings", p.strings)],
    );
    schema.named_struct(
        "container",
        "PruneReport",
        vec![
            field("ContainersDeleted", p.strings),
            field("SpaceReclaimed", p.uint64),
        ],
    );
    schema.named_struct(
        "container",
        "PathStat",
        vec![
            json("Name", p.string, "name"),
            json("Size", p.int64, "size"),
            json("Mode", p.file_mode, "mode"),
            json("Mtime", p.time, "mtime"),
            json("LinkTarget", p.string, "linkTarget"),
        ],
    );
    schema.named_struct(
        "container",
        "FilesystemChange",
        vec![field("Kind", change_type), field("Path", p.string)],
    );
    schema.named_struct(
        "container",
        "TopResponse",
        vec![field("Processes", string_rows), field("Titles", p.strings)],
    );
    let process = schema.named_struct(
        "container",
        "ExecProcessConfig",
        vec![
            json("Tty", p.boolean, "tty"),
            json("Entrypoint", p.string, "entrypoint"),
            json("Arguments", p.strings, "arguments"),
            json("Privileged", bool_ptr, "privileged,omitempty"),
            json("User", p.string, "user,omitempty"),
        ],
    );
    let process_ptr = schema.pointer(process);
    schema.named_struct(
        "container",
        "ExecInspect",
        vec![
            json("ExecID", p.string, "ID"),
            field("ContainerID", p.string),
            field("Running", p.boolean),
            field("ExitCode", p.int),
            field("Pid", p.int),
            json("ProcessConfig", process_ptr, ",omitempty"),
            field("OpenStdin", p.boolean),
            field("OpenStderr", p.boolean),
            field("OpenStdout", p.boolean),
            field("CanRemove", p.boolean),
            field("DetachKeys", p.string),
        ],
    );
    schema.named_struct(
        "container",
        "WaitExitError",
        vec![json("Message", p.string, ",omitempty")],
    );
}
