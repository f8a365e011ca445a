//! `swarm` and `runtime` packages.

use specgen_core::{Kind, Schema, TypeId};

use crate::common::{Prims, embed, field, json};

pub(crate) fn define(schema: &mut Schema, p: &Prims) {
    define_common(schema, p);
    define_cluster(schema, p);
    define_service_spec(schema, p);
    define_service(schema, p);
    define_task(schema, p);
    define_node(schema, p);
    define_objects(schema, p);
}

fn define_common(schema: &mut Schema, p: &Prims) {
    let version = schema.named_struct(
        "swarm",
        "Version",
        vec![json("Index", p.uint64, ",omitempty")],
    );
    schema.named_struct(
        "swarm",
        "Meta",
        vec![
            json("Version", version, ",omitempty"),
            json("CreatedAt", p.time, ",omitempty"),
            json("UpdatedAt", p.time, ",omitempty"),
        ],
    );
    schema.named_struct(
        "swarm",
        "Annotations",
        vec![
            json("Name", p.string, ",omitempty"),
            field("Labels", p.labels),
        ],
    );
    schema.named_struct(
        "swarm",
        "Driver",
        vec![
            json("Name", p.string, ",omitempty"),
            json("Options", p.labels, ",omitempty"),
        ],
    );
    schema.named_struct(
        "swarm",
        "Platform",
        vec![
            json("Architecture", p.string, ",omitempty"),
            json("OS", p.string, ",omitempty"),
        ],
    );
    schema.named_struct(
        "swarm",
        "TLSInfo",
        vec![
            json("TrustRoot", p.string, ",omitempty"),
            json("CertIssuerSubject", p.bytes, ",omitempty"),
            json("CertIssuerPublicKey", p.bytes, ",omitempty"),
        ],
    );

    let discrete = schema.named_struct(
        "swarm",
        "DiscreteGenericResource",
        vec![
            json("Kind", p.string, ",omitempty"),
            json("Value", p.int64, ",omitempty"),
        ],
    );
    let named = schema.named_struct(
        "swarm",
        "NamedGenericResource",
        vec![
            json("Kind", p.string, ",omitempty"),
            json("Value", p.string, ",omitempty"),
        ],
    );
    let named_ptr = schema.pointer(named);
    let discrete_ptr = schema.pointer(discrete);
    schema.named_struct(
        "swarm",
        "GenericResource",
        vec![
            json("NamedResourceSpec", named_ptr, ",omitempty"),
            json("DiscreteResourceSpec", discrete_ptr, ",omitempty"),
        ],
    );
}

fn define_cluster(schema: &mut Schema, p: &Prims) {
    let ca_protocol = schema.named_scalar("swarm", "ExternalCAProtocol", Kind::String);
    let availability = schema.named_scalar("swarm", "NodeAvailability", Kind::String);
    let local_state = schema.named_scalar("swarm", "LocalNodeState", Kind::String);
    let annotations = schema.declare_struct("swarm", "Annotations");
    let meta = schema.declare_struct("swarm", "Meta");
    let driver = schema.declare_struct("swarm", "Driver");
    let tls = schema.declare_struct("swarm", "TLSInfo");
    let int64_ptr = schema.pointer(p.int64);
    let uint64_ptr = schema.pointer(p.uint64);

    let orchestration = schema.named_struct(
        "swarm",
        "OrchestrationConfig",
        vec![json("TaskHistoryRetentionLimit", int64_ptr, ",omitempty")],
    );
    let raft = schema.named_struct(
        "swarm",
        "RaftConfig",
        vec![
            json("SnapshotInterval", p.uint64, ",omitempty"),
            json("KeepOldSnapshots", uint64_ptr, ",omitempty"),
            json("LogEntriesForSlowFollowers", p.uint64, ",omitempty"),
            field("ElectionTick", p.int),
            field("HeartbeatTick", p.int),
        ],
    );
    let dispatcher = schema.named_struct(
        "swarm",
        "DispatcherConfig",
        vec![json("HeartbeatPeriod", p.duration, ",omitempty")],
    );
    let external = schema.named_struct(
        "swarm",
        "ExternalCA",
        vec![
            field("Protocol", ca_protocol),
            field("URL", p.string),
            json("Options", p.labels, ",omitempty"),
            field("CACert", p.string),
        ],
    );
    let external_ptr = schema.pointer(external);
    let externals = schema.slice(external_ptr);
    let ca = schema.named_struct(
        "swarm",
        "CAConfig",
        vec![
            json("NodeCertExpiry", p.duration, ",omitempty"),
            json("ExternalCAs", externals, ",omitempty"),
            json("SigningCACert", p.string, ",omitempty"),
            json("SigningCAKey", p.string, ",omitempty"),
            json("ForceRotate", p.uint64, ",omitempty"),
        ],
    );
    let driver_ptr = schema.pointer(driver);
    let defaults = schema.named_struct(
        "swarm",
        "TaskDefaults",
        vec![json("LogDriver", driver_ptr, ",omitempty")],
    );
    let encryption = schema.named_struct(
        "swarm",
        "EncryptionConfig",
        vec![field("AutoLockManagers", p.boolean)],
    );
    let spec = schema.named_struct(
        "swarm",
        "Spec",
        vec![
            embed("Annotations", annotations),
            json("Orchestration", orchestration, ",omitempty"),
            json("Raft", raft, ",omitempty"),
            json("Dispatcher", dispatcher, ",omitempty"),
            json("CAConfig", ca, ",omitempty"),
            json("TaskDefaults", defaults, ",omitempty"),
            json("EncryptionConfig", encryption, ",omitempty"),
        ],
    );

    let cluster = schema.named_struct(
        "swarm",
        "ClusterInfo",
        vec![
            field("ID", p.string),
            embed("Meta", meta),
            field("Spec", spec),
            field("TLSInfo", tls),
            field("RootRotationInProgress", p.boolean),
            field("DefaultAddrPool", p.strings),
            field("SubnetSize", p.uint32),
            field("DataPathPort", p.uint32),
        ],
    );
    let tokens = schema.named_struct(
        "swarm",
        "JoinTokens",
        vec![field("Worker", p.string), field("Manager", p.string)],
    );
    schema.named_struct(
        "swarm",
        "Swarm",
        vec![embed("ClusterInfo", cluster), field("JoinTokens", tokens)],
    );

    let peer = schema.named_struct(
        "swarm",
        "Peer",
        vec![field("NodeID", p.string), field("Addr", p.string)],
    );
    let peers = schema.slice(peer);
    let cluster_ptr = schema.pointer(cluster);
    schema.named_struct(
        "swarm",
        "Info",
        vec![
            field("NodeID", p.string),
            field("NodeAddr", p.string),
            field("LocalNodeState", local_state),
            field("ControlAvailable", p.boolean),
            field("Error", p.string),
            field("RemoteManagers", peers),
            json("Nodes", p.int, ",omitempty"),
            json("Managers", p.int, ",omitempty"),
            json("Cluster", cluster_ptr, ",omitempty"),
            json("Warnings", p.strings, ",omitempty"),
        ],
    );

    schema.named_struct(
        "swarm",
        "InitRequest",
        vec![
            field("ListenAddr", p.string),
            field("AdvertiseAddr", p.string),
            json("DataPathAddr", p.string, ",omitempty"),
            json("DataPathPort", p.uint32, ",omitempty"),
            field("ForceNewCluster", p.boolean),
            field("Spec", spec),
            field("AutoLockManagers", p.boolean),
            field("Availability", availability),
            field("DefaultAddrPool", p.strings),
            field("SubnetSize", p.uint32),
        ],
    );
    schema.named_struct(
        "swarm",
        "JoinRequest",
        vec![
            field("ListenAddr", p.string),
            field("AdvertiseAddr", p.string),
            json("DataPathAddr", p.string, ",omitempty"),
            field("RemoteAddrs", p.strings),
            field("JoinToken", p.string),
            field("Availability", availability),
        ],
    );
    schema.named_struct(
        "swarm",
        "UnlockKeyResponse",
        vec![field("UnlockKey", p.string)],
    );
}

fn define_privileges(schema: &mut Schema, p: &Prims) -> TypeId {
    let seccomp_mode = schema.named_scalar("swarm", "SeccompMode", Kind::String);
    let apparmor_mode = schema.named_scalar("swarm", "AppArmorMode", Kind::String);

    let credential = schema.named_struct(
        "swarm",
        "CredentialSpec",
        vec![
            field("Config", p.string),
            field("File", p.string),
            field("Registry", p.string),
        ],
    );
    let selinux = schema.named_struct(
        "swarm",
        "SELinuxContext",
        vec![
            field("Disable", p.boolean),
            field("User", p.string),
            field("Role", p.string),
            field("Type", p.string),
            field("Level", p.string),
        ],
    );
    let seccomp = schema.named_struct(
        "swarm",
        "SeccompOpts",
        vec![
            json("Mode", seccomp_mode, ",omitempty"),
            json("Profile", p.bytes, ",omitempty"),
        ],
    );
    let apparmor = schema.named_struct(
        "swarm",
        "AppArmorOpts",
        vec![json("Mode", apparmor_mode, ",omitempty")],
    );

    let credential_ptr = schema.pointer(credential);
    let selinux_ptr = schema.pointer(selinux);
    let seccomp_ptr = schema.pointer(seccomp);
    let apparmor_ptr = schema.pointer(apparmor);
    schema.named_struct(
        "swarm",
        "Privileges",
        vec![
            field("CredentialSpec", credential_ptr),
            field("SELinuxContext", selinux_ptr),
            json("Seccomp", seccomp_ptr, ",omitempty"),
            json("AppArmor", apparmor_ptr, ",omitempty"),
            field("NoNewPrivileges", p.boolean),
        ],
    )
}

fn define_container_spec(schema: &mut Schema, p: &Prims) -> TypeId {
    let privileges = define_privileges(schema, p);
    let mount = schema.declare_struct("mount", "Mount");
    let health = schema.declare_struct("container", "HealthConfig");
    let ulimit = schema.declare_struct("units", "Ulimit");
    let isolation = schema.named_scalar("container", "Isolation", Kind::String);

    let file_target = |schema: &mut Schema, name: &str| {
        schema.named_struct(
            "swarm",
            name,
            vec![
                field("Name", p.string),
                field("UID", p.string),
                field("GID", p.string),
                field("Mode", p.file_mode),
            ],
        )
    };
    let secret_target = file_target(schema, "SecretReferenceFileTarget");
    let config_target = file_target(schema, "ConfigReferenceFileTarget");
    let runtime_target = schema.named_struct("swarm", "ConfigReferenceRuntimeTarget", Vec::new());

    let secret_target_ptr = schema.pointer(secret_target);
    let secret_ref = schema.named_struct(
        "swarm",
        "SecretReference",
        vec![
            field("File", secret_target_ptr),
            field("SecretID", p.string),
            field("SecretName", p.string),
        ],
    );
    let config_target_ptr = schema.pointer(config_target);
    let runtime_target_ptr = schema.pointer(runtime_target);
    let config_ref = schema.named_struct(
        "swarm",
        "ConfigReference",
        vec![
            json("File", config_target_ptr, ",omitempty"),
            json("Runtime", runtime_target_ptr, ",omitempty"),
            field("ConfigID", p.string),
            field("ConfigName", p.string),
        ],
    );
    let dns = schema.named_struct(
        "swarm",
        "DNSConfig",
        vec![
            json("Nameservers", p.strings, ",omitempty"),
            json("Search", p.strings, ",omitempty"),
            json("Options", p.strings, ",omitempty"),
        ],
    );

    let privileges_ptr = schema.pointer(privileges);
    let bool_ptr = schema.pointer(p.boolean);
    let mounts = schema.slice(mount);
    let duration_ptr = schema.pointer(p.duration);
    let health_ptr = schema.pointer(health);
    let dns_ptr = schema.pointer(dns);
    let secret_ref_ptr = schema.pointer(secret_ref);
    let secret_refs = schema.slice(secret_ref_ptr);
    let config_ref_ptr = schema.pointer(config_ref);
    let config_refs = schema.slice(config_ref_ptr);
    let ulimit_ptr = schema.pointer(ulimit);
    let ulimits = schema.slice(ulimit_ptr);
    schema.named_struct(
        "swarm",
        "ContainerSpec",
        vec![
            json("Image", p.string, ",omitempty"),
            json("Labels", p.labels, ",omitempty"),
            json("Command", p.strings, ",omitempty"),
            json("Args", p.strings, ",omitempty"),
            json("Hostname", p.string, ",omitempty"),
            json("Env", p.strings, ",omitempty"),
            json("Dir", p.string, ",omitempty"),
            json("User", p.string, ",omitempty"),
            json("Groups", p.strings, ",omitempty"),
            json("Privileges", privileges_ptr, ",omitempty"),
            json("Init", bool_ptr, ",omitempty"),
            json("StopSignal", p.string, ",omitempty"),
            json("TTY", p.boolean, ",omitempty"),
            json("OpenStdin", p.boolean, ",omitempty"),
            json("ReadOnly", p.boolean, ",omitempty"),
            json("Mounts", mounts, ",omitempty"),
            json("StopGracePeriod", duration_ptr, ",omitempty"),
            json("Healthcheck", health_ptr, ",omitempty"),
            json("Hosts", p.strings, ",omitempty"),
            json("DNSConfig", dns_ptr, ",omitempty"),
            json("Secrets", secret_refs, ",omitempty"),
            json("Configs", config_refs, ",omitempty"),
            json("Isolation", isolation, ",omitempty"),
            json("Sysctls", p.labels, ",omitempty"),
            json("CapabilityAdd", p.strings, ",omitempty"),
            json("CapabilityDrop", p.strings, ",omitempty"),
            json("Ulimits", ulimits, ",omitempty"),
        ],
    )
}

fn define_plugin_spec(schema: &mut Schema, p: &Prims) -> TypeId {
    let privilege = schema.named_struct(
        "runtime",
        "PluginPrivilege",
        vec![
            json("Name", p.string, "name,omitempty"),
            json("Description", p.string, "description,omitempty"),
            json("Value", p.strings, "value,omitempty"),
        ],
    );
    let privilege_ptr = schema.pointer(privilege);
    let privileges = schema.slice(privilege_ptr);
    schema.named_struct(
        "runtime",
        "PluginSpec",
        vec![
            json("Name", p.string, "name,omitempty"),
            json("Remote", p.string, "remote,omitempty"),
            json("Privileges", privileges, "privileges,omitempty"),
            json("Disabled", p.boolean, "disabled,omitempty"),
            json("Env", p.strings, "env,omitempty"),
        ],
    )
}

fn define_service_spec(schema: &mut Schema, p: &Prims) {
    let condition = schema.named_scalar("swarm", "RestartPolicyCondition", Kind::String);
    let protocol = schema.named_scalar("swarm", "PortConfigProtocol", Kind::String);
    let publish_mode = schema.named_scalar("swarm", "PortConfigPublishMode", Kind::String);
    let resolution = schema.named_scalar("swarm", "ResolutionMode", Kind::String);
    let runtime_type = schema.named_scalar("swarm", "RuntimeType", Kind::String);
    let annotations = schema.declare_struct("swarm", "Annotations");
    let driver = schema.declare_struct("swarm", "Driver");
    let platform = schema.declare_struct("swarm", "Platform");
    let generic = schema.declare_struct("swarm", "GenericResource");

    let container_spec = define_container_spec(schema, p);
    let plugin_spec = define_plugin_spec(schema, p);

    let limit = schema.named_struct(
        "swarm",
        "Limit",
        vec![
            json("NanoCPUs", p.int64, ",omitempty"),
            json("MemoryBytes", p.int64, ",omitempty"),
            json("Pids", p.int64, ",omitempty"),
        ],
    );
    let generics = schema.slice(generic);
    let resources = schema.named_struct(
        "swarm",
        "Resources",
        vec![
            json("NanoCPUs", p.int64, ",omitempty"),
            json("MemoryBytes", p.int64, ",omitempty"),
            json("GenericResources", generics, ",omitempty"),
        ],
    );
    let limit_ptr = schema.pointer(limit);
    let resources_ptr = schema.pointer(resources);
    let requirements = schema.named_struct(
        "swarm",
        "ResourceRequirements",
        vec![
            json("Limits", limit_ptr, ",omitempty"),
            json("Reservations", resources_ptr, ",omitempty"),
        ],
    );

    let duration_ptr = schema.pointer(p.duration);
    let uint64_ptr = schema.pointer(p.uint64);
    let restart = schema.named_struct(
        "swarm",
        "RestartPolicy",
        vec![
            json("Condition", condition, ",omitempty"),
            json("Delay", duration_ptr, ",omitempty"),
            json("MaxAttempts", uint64_ptr, ",omitempty"),
            json("Window", duration_ptr, ",omitempty"),
        ],
    );

    let spread = schema.named_struct(
        "swarm",
        "SpreadOver",
        vec![field("SpreadDescriptor", p.string)],
    );
    let spread_ptr = schema.pointer(spread);
    let preference = schema.named_struct(
        "swarm",
        "PlacementPreference",
        vec![field("Spread", spread_ptr)],
    );
    let preferences = schema.slice(preference);
    let platforms = schema.slice(platform);
    let placement = schema.named_struct(
        "swarm",
        "Placement",
        vec![
            json("Constraints", p.strings, ",omitempty"),
            json("Preferences", preferences, ",omitempty"),
            json("MaxReplicas", p.uint64, ",omitempty"),
            json("Platforms", platforms, ",omitempty"),
        ],
    );
    let attachment = schema.named_struct(
        "swarm",
        "NetworkAttachmentConfig",
        vec![
            json("Target", p.string, ",omitempty"),
            json("Aliases", p.strings, ",omitempty"),
            json("DriverOpts", p.labels, ",omitempty"),
        ],
    );

    let container_ptr = schema.pointer(container_spec);
    let plugin_ptr = schema.pointer(plugin_spec);
    let requirements_ptr = schema.pointer(requirements);
    let restart_ptr = schema.pointer(restart);
    let placement_ptr = schema.pointer(placement);
    let attachments = schema.slice(attachment);
    let driver_ptr = schema.pointer(driver);
    let task_spec = schema.named_struct(
        "swarm",
        "TaskSpec",
        vec![
            json("ContainerSpec", container_ptr, ",omitempty"),
            json("PluginSpec", plugin_ptr, ",omitempty"),
            json("Resources", requirements_ptr, ",omitempty"),
            json("RestartPolicy", restart_ptr, ",omitempty"),
            json("Placement", placement_ptr, ",omitempty"),
            json("Networks", attachments, ",omitempty"),
            json("LogDriver", driver_ptr, ",omitempty"),
            field("ForceUpdate", p.uint64),
            json("Runtime", runtime_type, ",omitempty"),
        ],
    );

    let replicated = schema.named_struct(
        "swarm",
        "ReplicatedService",
        vec![json("Replicas", uint64_ptr, ",omitempty")],
    );
    let global = schema.named_struct("swarm", "GlobalService", Vec::new());
    let replicated_ptr = schema.pointer(replicated);
    let global_ptr = schema.pointer(global);
    let mode = schema.named_struct(
        "swarm",
        "ServiceMode",
        vec![
            json("Replicated", replicated_ptr, ",omitempty"),
            json("Global", global_ptr, ",omitempty"),
        ],
    );
    let update = schema.named_struct(
        "swarm",
        "UpdateConfig",
        vec![
            field("Parallelism", p.uint64),
            json("Delay", p.duration, ",omitempty"),
            json("FailureAction", p.string, ",omitempty"),
            json("Monitor", p.duration, ",omitempty"),
            json("MaxFailureRatio", p.float32, ",omitempty"),
            json("Order", p.string, ",omitempty"),
        ],
    );
    let port = schema.named_struct(
        "swarm",
        "PortConfig",
        vec![
            json("Name", p.string, ",omitempty"),
            json("Protocol", protocol, ",omitempty"),
            json("TargetPort", p.uint32, ",omitempty"),
            json("PublishedPort", p.uint32, ",omitempty"),
            json("PublishMode", publish_mode, ",omitempty"),
        ],
    );
    let ports = schema.slice(port);
    let endpoint = schema.named_struct(
        "swarm",
        "EndpointSpec",
        vec![
            json("Mode", resolution, ",omitempty"),
            json("Ports", ports, ",omitempty"),
        ],
    );

    let update_ptr = schema.pointer(update);
    let endpoint_ptr = schema.pointer(endpoint);
    schema.named_struct(
        "swarm",
        "ServiceSpec",
        vec![
            embed("Annotations", annotations),
            json("TaskTemplate", task_spec, ",omitempty"),
            json("Mode", mode, ",omitempty"),
            json("UpdateConfig", update_ptr, ",omitempty"),
            json("RollbackConfig", update_ptr, ",omitempty"),
            json("EndpointSpec", endpoint_ptr, ",omitempty"),
        ],
    );
}

fn define_service(schema: &mut Schema, p: &Prims) {
    let update_state = schema.named_scalar("swarm", "UpdateState", Kind::String);
    let meta = schema.declare_struct("swarm", "Meta");
    let spec = schema.declare_struct("swarm", "ServiceSpec");
    let endpoint_spec = schema.declare_struct("swarm", "EndpointSpec");
    let port = schema.declare_struct("swarm", "PortConfig");

    let vip = schema.named_struct(
        "swarm",
        "EndpointVirtualIP",
        vec![
            json("NetworkID", p.string, ",omitempty"),
            json("Addr", p.string, ",omitempty"),
        ],
    );
    let ports = schema.slice(port);
    let vips = schema.slice(vip);
    let endpoint = schema.named_struct(
        "swarm",
        "Endpoint",
        vec![
            json("Spec", endpoint_spec, ",omitempty"),
            json("Ports", ports, ",omitempty"),
            json("VirtualIPs", vips, ",omitempty"),
        ],
    );
    let time_ptr = schema.pointer(p.time);
    let update_status = schema.named_struct(
        "swarm",
        "UpdateStatus",
        vec![
            json("State", update_state, ",omitempty"),
            json("StartedAt", time_ptr, ",omitempty"),
            json("CompletedAt", time_ptr, ",omitempty"),
            json("Message", p.string, ",omitempty"),
        ],
    );
    let service_status = schema.named_struct(
        "swarm",
        "ServiceStatus",
        vec![
            field("RunningTasks", p.uint64),
            field("DesiredTasks", p.uint64),
            field("CompletedTasks", p.uint64),
        ],
    );

    let spec_ptr = schema.pointer(spec);
    let update_status_ptr = schema.pointer(update_status);
    let service_status_ptr = schema.pointer(service_status);
    schema.named_struct(
        "swarm",
        "Service",
        vec![
            field("ID", p.string),
            embed("Meta", meta),
            json("Spec", spec, ",omitempty"),
            json("PreviousSpec", spec_ptr, ",omitempty"),
            json("Endpoint", endpoint, ",omitempty"),
            json("UpdateStatus", update_status_ptr, ",omitempty"),
            json("ServiceStatus", service_status_ptr, ",omitempty"),
        ],
    );
    schema.named_struct(
        "swarm",
        "ServiceCreateResponse",
        vec![
            field("ID", p.string),
            json("Warnings", p.strings, ",omitempty"),
        ],
    );
    schema.named_struct(
        "swarm",
        "ServiceUpdateResponse",
        vec![json("Warnings", p.strings, ",omitempty")],
    );
}

fn define_task(schema: &mut Schema, p: &Prims) {
    let task_state = schema.named_scalar("swarm", "TaskState", Kind::String);
    let meta = schema.declare_struct("swarm", "Meta");
    let annotations = schema.declare_struct("swarm", "Annotations");
    let driver = schema.declare_struct("swarm", "Driver");
    let task_spec = schema.declare_struct("swarm", "TaskSpec");
    let port = schema.declare_struct("swarm", "PortConfig");
    let generic = schema.declare_struct("swarm", "GenericResource");
    let config_from = schema.declare_struct("network", "ConfigReference");

    let container_status = schema.named_struct(
        "swarm",
        "ContainerStatus",
        vec![
            field("ContainerID", p.string),
            field("PID", p.int),
            field("ExitCode", p.int),
        ],
    );
    let ports = schema.slice(port);
    let port_status = schema.named_struct(
        "swarm",
        "PortStatus",
        vec![json("Ports", ports, ",omitempty")],
    );
    let container_status_ptr = schema.pointer(container_status);
    let status = schema.named_struct(
        "swarm",
        "TaskStatus",
        vec![
            field("Timestamp", p.time),
            field("State", task_state),
            field("Message", p.string),
            field("Err", p.string),
            json("ContainerStatus", container_status_ptr, ",omitempty"),
            json("PortStatus", port_status, ",omitempty"),
        ],
    );

    let ipam_config = schema.named_struct(
        "swarm",
        "IPAMConfig",
        vec![
            json("Subnet", p.string, ",omitempty"),
            json("Range", p.string, ",omitempty"),
            json("Gateway", p.string, ",omitempty"),
        ],
    );
    let ipam_configs = schema.slice(ipam_config);
    let ipam = schema.named_struct(
        "swarm",
        "IPAMOptions",
        vec![
            json("Driver", driver, ",omitempty"),
            json("Configs", ipam_configs, ",omitempty"),
        ],
    );
    let driver_ptr = schema.pointer(driver);
    let ipam_ptr = schema.pointer(ipam);
    let config_from_ptr = schema.pointer(config_from);
    let network_spec = schema.named_struct(
        "swarm",
        "NetworkSpec",
        vec![
            embed("Annotations", annotations),
            json("DriverConfiguration", driver_ptr, ",omitempty"),
            json("IPv6Enabled", p.boolean, ",omitempty"),
            json("Internal", p.boolean, ",omitempty"),
            json("Attachable", p.boolean, ",omitempty"),
            json("Ingress", p.boolean, ",omitempty"),
            field("IPAMOptions", ipam_ptr),
            json("ConfigFrom", config_from_ptr, ",omitempty"),
            json("Scope", p.string, ",omitempty"),
        ],
    );
    let network = schema.named_struct(
        "swarm",
        "Network",
        vec![
            field("ID", p.string),
            embed("Meta", meta),
            json("Spec", network_spec, ",omitempty"),
            json("DriverState", driver, ",omitempty"),
            json("IPAMOptions", ipam_ptr, ",omitempty"),
        ],
    );
    let attachment = schema.named_struct(
        "swarm",
        "NetworkAttachment",
        vec![
            field("Network", network),
            field("Addresses", p.strings),
        ],
    );

    let attachments = schema.slice(attachment);
    let generics = schema.slice(generic);
    schema.named_struct(
        "swarm",
        "Task",
        vec![
            field("ID", p.string),
            embed("Meta", meta),
            embed("Annotations", annotations),
            json("Spec", task_spec, ",omitempty"),
            json("ServiceID", p.string, ",omitempty"),
            json("Slot", p.int, ",omitempty"),
            json("NodeID", p.string, ",omitempty"),
            json("Status", status, ",omitempty"),
            json("DesiredState", task_state, ",omitempty"),
            json("NetworksAttachments", attachments, ",omitempty"),
            json("GenericResources", generics, ",omitempty"),
        ],
    );
}

fn define_node(schema: &mut Schema, p: &Prims) {
    let role = schema.named_scalar("swarm", "NodeRole", Kind::String);
    let availability = schema.named_scalar("swarm", "NodeAvailability", Kind::String);
    let node_state = schema.named_scalar("swarm", "NodeState", Kind::String);
    let reachability = schema.named_scalar("swarm", "Reachability", Kind::String);
    let meta = schema.declare_struct("swarm", "Meta");
    let annotations = schema.declare_struct("swarm", "Annotations");
    let platform = schema.declare_struct("swarm", "Platform");
    let resources = schema.declare_struct("swarm", "Resources");
    let tls = schema.declare_struct("swarm", "TLSInfo");

    let spec = schema.named_struct(
        "swarm",
        "NodeSpec",
        vec![
            embed("Annotations", annotations),
            json("Role", role, ",omitempty"),
            json("Availability", availability, ",omitempty"),
        ],
    );
    let plugin = schema.named_struct(
        "swarm",
        "PluginDescription",
        vec![
            json("Type", p.string, ",omitempty"),
            json("Name", p.string, ",omitempty"),
        ],
    );
    let plugins = schema.slice(plugin);
    let engine = schema.named_struct(
        "swarm",
        "EngineDescription",
        vec![
            json("EngineVersion", p.string, ",omitempty"),
            json("Labels", p.labels, ",omitempty"),
            json("Plugins", plugins, ",omitempty"),
        ],
    );
    let description = schema.named_struct(
        "swarm",
        "NodeDescription",
        vec![
            json("Hostname", p.string, ",omitempty"),
            json("Platform", platform, ",omitempty"),
            json("Resources", resources, ",omitempty"),
            json("Engine", engine, ",omitempty"),
            json("TLSInfo", tls, ",omitempty"),
        ],
    );
    let status = schema.named_struct(
        "swarm",
        "NodeStatus",
        vec![
            field("State", node_state),
            json("Message", p.string, ",omitempty"),
            json("Addr", p.string, ",omitempty"),
        ],
    );
    let manager = schema.named_struct(
        "swarm",
        "ManagerStatus",
        vec![
            json("Leader", p.boolean, ",omitempty"),
            field("Reachability", reachability),
            json("Addr", p.string, ",omitempty"),
        ],
    );

    let manager_ptr = schema.pointer(manager);
    schema.named_struct(
        "swarm",
        "Node",
        vec![
            field("ID", p.string),
            embed("Meta", meta),
            json("Spec", spec, ",omitempty"),
            json("Description", description, ",omitempty"),
            json("Status", status, ",omitempty"),
            json("ManagerStatus", manager_ptr, ",omitempty"),
        ],
    );
}

fn define_objects(schema: &mut Schema, p: &Prims) {
    let meta = schema.declare_struct("swarm", "Meta");
    let annotations = schema.declare_struct("swarm", "Annotations");
    let driver = schema.declare_struct("swarm", "Driver");
    let driver_ptr = schema.pointer(driver);

    let secret_spec = schema.named_struct(
        "swarm",
        "SecretSpec",
        vec![
            embed("Annotations", annotations),
            json("Data", p.bytes, ",omitempty"),
            json("Driver", driver_ptr, ",omitempty"),
            json("Templating", driver_ptr, ",omitempty"),
        ],
    );
    schema.named_struct(
        "swarm",
        "Secret",
        vec![
            field("ID", p.string),
            embed("Meta", meta),
            field("Spec", secret_spec),
        ],
    );
    schema.named_struct(
        "swarm",
        "SecretCreateResponse",
        vec![field("ID", p.string)],
    );

    let config_spec = schema.named_struct(
        "swarm",
        "ConfigSpec",
        vec![
            embed("Annotations", annotations),
            json("Data", p.bytes, ",omitempty"),
            json("Templating", driver_ptr, ",omitempty"),
        ],
    );
    schema.named_struct(
        "swarm",
        "Config",
        vec![
            field("ID", p.string),
            embed("Meta", meta),
            field("Spec", config_spec),
        ],
    );
    schema.named_struct(
        "swarm",
        "ConfigCreateResponse",
        vec![field("ID", p.string)],
    );
}
