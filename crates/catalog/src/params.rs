//! Request parameter types that only exist on the client side.
//!
//! Query-string fields carry a `rest` tag; everything else travels in the
//! request body.

use specgen_core::{Field, Schema, TypeId};

use crate::common::{Prims, embed, field, hidden, json, rest};

const PACKAGE: &str = "main";

struct Params<'s> {
    schema: &'s mut Schema,
}

impl Params<'_> {
    fn define(&mut self, name: &str, fields: Vec<Field>) -> TypeId {
        self.schema.named_struct(PACKAGE, name, fields)
    }

    fn lookup(&mut self, package: &str, name: &str) -> TypeId {
        self.schema.declare_struct(package, name)
    }

    fn pointer_to(&mut self, package: &str, name: &str) -> TypeId {
        let ty = self.lookup(package, name);
        self.schema.pointer(ty)
    }
}

pub(crate) fn define(schema: &mut Schema, p: &Prims) {
    let mut params = Params { schema };
    define_containers(&mut params, p);
    define_images(&mut params, p);
    define_networks(&mut params, p);
    define_plugins(&mut params, p);
    define_swarm(&mut params, p);
    define_volumes(&mut params, p);
    define_system(&mut params, p);
}

/// The `filters` query parameter shared by list and prune endpoints.
fn filters(p: &Prims) -> Field {
    rest("Filters", p.filters, "query")
}

fn define_containers(params: &mut Params<'_>, p: &Prims) {
    let config = params.pointer_to("container", "Config");
    let host_config = params.pointer_to("container", "HostConfig");
    let networking = params.pointer_to("network", "NetworkingConfig");
    let update = params.lookup("container", "UpdateConfig");
    let wait_error = params.pointer_to("container", "WaitExitError");
    let console_size = params.lookup("client", "ConsoleSize");
    params.schema.define_fields(
        console_size,
        vec![field("Height", p.uint), field("Width", p.uint)],
    );
    let console_ptr = params.schema.pointer(console_size);

    params.define(
        "CreateContainerParameters",
        vec![
            embed("Config", config),
            rest("Name", p.string, "query,name"),
            rest("Platform", p.string, "query,platform"),
            json("HostConfig", host_config, "HostConfig,omitempty"),
            json("NetworkingConfig", networking, "NetworkingConfig,omitempty"),
        ],
    );
    params.define(
        "ContainersListParameters",
        vec![
            rest("Size", p.boolean, "query"),
            rest("All", p.boolean, "query"),
            rest("Since", p.string, "query"),
            rest("Before", p.string, "query"),
            rest("Limit", p.int, "query"),
            filters(p),
        ],
    );
    params.define("ContainersPruneParameters", vec![filters(p)]);
    params.define(
        "ContainerInspectParameters",
        vec![rest("IncludeSize", p.boolean, "query,size")],
    );
    params.define(
        "ContainerListProcessesParameters",
        vec![rest("Arguments", p.string, "query,ps_args")],
    );
    params.define(
        "ContainerLogsParameters",
        vec![
            rest("ShowStdout", p.boolean, "query,stdout"),
            rest("ShowStderr", p.boolean, "query,stderr"),
            rest("Since", p.string, "query"),
            rest("Until", p.string, "query"),
            rest("Timestamps", p.boolean, "query"),
            rest("Follow", p.boolean, "query"),
            rest("Tail", p.string, "query,tail,default=all"),
        ],
    );
    params.define(
        "ContainerStatsParameters",
        vec![
            rest("Stream", p.boolean, "query,stream,required"),
            rest("OneShot", p.boolean, "query,one-shot"),
        ],
    );
    params.define(
        "ContainerResizeParameters",
        vec![
            rest("Height", p.uint, "query,h,required"),
            rest("Width", p.uint, "query,w,required"),
        ],
    );
    params.define(
        "ContainerStartParameters",
        vec![rest("DetachKeys", p.string, "query,detachKeys")],
    );
    params.define(
        "ContainerStopParameters",
        vec![
            rest("Signal", p.string, "query,signal"),
            rest("WaitBeforeKillSeconds", p.uint32, "query,t"),
        ],
    );
    params.define(
        "ContainerRestartParameters",
        vec![
            rest("Signal", p.string, "query,signal"),
            rest("WaitBeforeKillSeconds", p.uint32, "query,t"),
        ],
    );
    params.define(
        "ContainerKillParameters",
        vec![rest("Signal", p.string, "query")],
    );
    params.define(
        "ContainerUpdateParameters",
        vec![embed("UpdateConfig", update)],
    );
    params.define(
        "ContainerRenameParameters",
        vec![rest("NewName", p.string, "query,name,required")],
    );
    params.define(
        "ContainerAttachParameters",
        vec![
            rest("Stream", p.boolean, "query"),
            rest("Stdin", p.boolean, "query"),
            rest("Stdout", p.boolean, "query"),
            rest("Stderr", p.boolean, "query"),
            rest("DetachKeys", p.string, "query,detachKeys"),
            rest("Logs", p.boolean, "query"),
        ],
    );
    params.define(
        "ContainerWaitResponse",
        vec![
            json("Error", wait_error, "Error,omitempty"),
            field("StatusCode", p.int64),
        ],
    );
    params.define(
        "ContainerRemoveParameters",
        vec![
            rest("RemoveVolumes", p.boolean, "query,v"),
            rest("RemoveLinks", p.boolean, "query,link"),
            rest("Force", p.boolean, "query"),
        ],
    );
    params.define(
        "ContainerPathStatParameters",
        vec![rest("Path", p.string, "query,path,required")],
    );
    params.define(
        "CopyToContainerParameters",
        vec![
            rest("Path", p.string, "query,path,required"),
            rest("AllowOverwriteDirWithFile", p.boolean, "query,noOverwriteDirNonDir"),
            rest("CopyUIDGID", p.boolean, "query,copyUIDGID"),
        ],
    );
    params.define(
        "ContainerExecCreateParameters",
        vec![
            json("User", p.string, ",omitempty"),
            field("Privileged", p.boolean),
            field("Tty", p.boolean),
            json("ConsoleSize", console_ptr, ",omitempty"),
            field("AttachStdin", p.boolean),
            field("AttachStderr", p.boolean),
            field("AttachStdout", p.boolean),
            field("Detach", p.boolean),
            field("DetachKeys", p.string),
            field("Env", p.strings),
            field("WorkingDir", p.string),
            field("Cmd", p.strings),
        ],
    );
    params.define(
        "ContainerExecCreateResponse",
        vec![json("ID", p.string, "Id")],
    );
    params.define(
        "ContainerExecStartParameters",
        vec![
            field("Detach", p.boolean),
            json("Tty", p.boolean, "Tty"),
            json("ConsoleSize", console_ptr, ",omitempty"),
        ],
    );
    params.define(
        "CommitContainerChangesParameters",
        vec![
            rest("ContainerID", p.string, "query,container,required"),
            rest("RepositoryName", p.string, "query,repo"),
            rest("Tag", p.string, "query"),
            rest("Comment", p.string, "query"),
            rest("Author", p.string, "query"),
            rest("Changes", p.strings, "query,changes"),
            rest("Pause", p.boolean, "query"),
            json("Config", config, "ContainerConfig,omitempty"),
        ],
    );
    params.define(
        "CommitContainerChangesResponse",
        vec![json("ID", p.string, "Id")],
    );
}

fn define_images(params: &mut Params<'_>, p: &Prims) {
    let auth = params.lookup("registry", "AuthConfig");
    let auth_ptr = params.schema.pointer(auth);
    let auth_map = params.schema.map(p.string, auth);

    params.define(
        "ImagesListParameters",
        vec![
            rest("All", p.boolean, "query"),
            filters(p),
            rest("SharedSize", p.boolean, "query,shared-size"),
            rest("Digests", p.boolean, "query"),
            rest("Manifests", p.boolean, "query"),
        ],
    );
    params.define(
        "ImageBuildParameters",
        vec![
            rest("Tags", p.strings, "query,t"),
            rest("SuppressOutput", p.boolean, "query,q"),
            rest("RemoteContext", p.string, "query,remote"),
            rest("NoCache", p.boolean, "query,nocache"),
            rest("Remove", p.boolean, "query,rm"),
            rest("ForceRemove", p.boolean, "query,forcerm"),
            rest("PullParent", p.boolean, "query,pull"),
            rest("Isolation", p.string, "query"),
            rest("CPUSetCPUs", p.string, "query,cpusetcpus"),
            rest("CPUSetMems", p.string, "query,cpusetmems"),
            rest("CPUShares", p.int64, "query,cpushares"),
            rest("CPUQuota", p.int64, "query,cpuquota"),
            rest("CPUPeriod", p.int64, "query,cpuperiod"),
            rest("Memory", p.int64, "query,memory"),
            rest("MemorySwap", p.int64, "query,memswap"),
            rest("CgroupParent", p.string, "query,cgroupparent"),
            rest("NetworkMode", p.string, "query,networkmode"),
            rest("ShmSize", p.int64, "query,shmsize"),
            rest("Dockerfile", p.string, "query,dockerfile"),
            rest("BuildArgs", p.labels, "query,buildargs"),
            hidden("AuthConfigs", auth_map),
            rest("Labels", p.labels, "query,labels"),
            rest("Squash", p.boolean, "query,squash"),
            rest("CacheFrom", p.strings, "query,cachefrom"),
            rest("ExtraHosts", p.strings, "query,extrahosts"),
            rest("Target", p.string, "query,target"),
            rest("Platform", p.string, "query,platform"),
            rest("Outputs", p.string, "query,outputs"),
        ],
    );
    params.define(
        "ImagesCreateParameters",
        vec![
            rest("FromImage", p.string, "query,fromImage"),
            rest("FromSrc", p.string, "query,fromSrc"),
            rest("Repo", p.string, "query"),
            rest("Tag", p.string, "query"),
            rest("Message", p.string, "query"),
            rest("Changes", p.strings, "query,changes"),
            rest("Platform", p.string, "query"),
            hidden("RegistryAuth", auth_ptr),
        ],
    );
    params.define(
        "ImageLoadParameters",
        vec![rest("Quiet", p.boolean, "query,quiet,required")],
    );
    params.define(
        "ImagePushParameters",
        vec![
            rest("Tag", p.string, "query"),
            rest("Platform", p.string, "query"),
            hidden("RegistryAuth", auth_ptr),
        ],
    );
    params.define(
        "ImageTagParameters",
        vec![
            rest("RepositoryName", p.string, "query,repo"),
            rest("Tag", p.string, "query"),
            rest("Force", p.boolean, "query"),
        ],
    );
    params.define(
        "ImageDeleteParameters",
        vec![
            rest("Force", p.boolean, "query"),
            rest("NoPrune", p.boolean, "query,noprune"),
        ],
    );
    params.define(
        "ImagesSearchParameters",
        vec![
            rest("Term", p.string, "query"),
            rest("Limit", p.int, "query"),
            filters(p),
            hidden("RegistryAuth", auth_ptr),
        ],
    );
    params.define("ImagesPruneParameters", vec![filters(p)]);
}

fn define_networks(params: &mut Params<'_>, p: &Prims) {
    params.define("NetworksListParameters", vec![filters(p)]);
    params.define("NetworksDeleteUnusedParameters", vec![filters(p)]);
}

fn define_plugins(params: &mut Params<'_>, p: &Prims) {
    let auth = params.pointer_to("registry", "AuthConfig");
    let privilege = params.lookup("types", "PluginPrivilege");
    let privileges = params.schema.slice(privilege);

    params.define("PluginListParameters", vec![filters(p)]);
    params.define(
        "PluginGetPrivilegeParameters",
        vec![rest("Remote", p.string, "query,remote,required")],
    );
    params.define(
        "PluginInstallParameters",
        vec![
            rest("Remote", p.string, "query,remote,required"),
            rest("Name", p.string, "query,name"),
            hidden("RegistryAuth", auth),
            rest("Privileges", privileges, "body"),
        ],
    );
    params.define(
        "PluginRemoveParameters",
        vec![rest("Force", p.boolean, "query")],
    );
    params.define(
        "PluginEnableParameters",
        vec![rest("Timeout", p.int64, "query")],
    );
    params.define(
        "PluginDisableParameters",
        vec![rest("Force", p.boolean, "query")],
    );
    params.define(
        "PluginUpgradeParameters",
        vec![
            rest("Remote", p.string, "query,remote,required"),
            hidden("RegistryAuth", auth),
            rest("Privileges", privileges, "body"),
        ],
    );
    params.define(
        "PluginCreateParameters",
        vec![rest("Name", p.string, "query,name,required")],
    );
    params.define(
        "PluginConfigureParameters",
        vec![field("Args", p.strings)],
    );
}

fn define_swarm(params: &mut Params<'_>, p: &Prims) {
    let auth = params.pointer_to("registry", "AuthConfig");
    let spec = params.lookup("swarm", "Spec");
    let service_spec = params.lookup("swarm", "ServiceSpec");
    let config_spec = params.lookup("swarm", "ConfigSpec");

    params.define(
        "SwarmLeaveParameters",
        vec![rest("Force", p.boolean, "query")],
    );
    params.define(
        "SwarmUpdateParameters",
        vec![
            field("Spec", spec),
            rest("Version", p.int64, "query,version,required"),
            rest("RotateWorkerToken", p.boolean, "query,rotateWorkerToken"),
            rest("RotateManagerToken", p.boolean, "query,rotateManagerToken"),
            rest(
                "RotateManagerUnlockKey",
                p.boolean,
                "query,rotateManagerUnlockKey",
            ),
        ],
    );
    params.define(
        "SwarmUnlockParameters",
        vec![field("UnlockKey", p.string)],
    );
    params.define(
        "ServiceListParameters",
        vec![filters(p), rest("Status", p.boolean, "query,status")],
    );
    params.define(
        "ServiceCreateParameters",
        vec![field("Service", service_spec), hidden("RegistryAuth", auth)],
    );
    params.define(
        "ServiceUpdateParameters",
        vec![
            field("Service", service_spec),
            rest("Version", p.int64, "query,version,required"),
            rest("RegistryAuthFrom", p.string, "query,registryAuthFrom"),
            rest("Rollback", p.string, "query,rollback"),
            hidden("RegistryAuth", auth),
        ],
    );
    params.define(
        "ServiceLogsParameters",
        vec![
            rest("ShowStdout", p.boolean, "query,stdout"),
            rest("ShowStderr", p.boolean, "query,stderr"),
            rest("Since", p.string, "query"),
            rest("Timestamps", p.boolean, "query"),
            rest("Follow", p.boolean, "query"),
            rest("Tail", p.string, "query,tail,default=all"),
            rest("Details", p.boolean, "query"),
        ],
    );
    params.define("TasksListParameters", vec![filters(p)]);
    params.define(
        "NodeRemoveParameters",
        vec![rest("Force", p.boolean, "query")],
    );
    params.define("SecretsListParameters", vec![filters(p)]);
    params.define("ConfigsListParameters", vec![filters(p)]);
    params.define(
        "SwarmCreateConfigParameters",
        vec![field("Config", config_spec)],
    );
    params.define(
        "SwarmUpdateConfigParameters",
        vec![
            field("Config", config_spec),
            rest("Version", p.int64, "query,version,required"),
        ],
    );
}

fn define_volumes(params: &mut Params<'_>, p: &Prims) {
    params.define("VolumesListParameters", vec![filters(p)]);
    params.define("VolumesPruneParameters", vec![filters(p)]);
}

fn define_system(params: &mut Params<'_>, p: &Prims) {
    params.define(
        "ContainerEventsParameters",
        vec![
            rest("Since", p.string, "query"),
            rest("Until", p.string, "query"),
            filters(p),
        ],
    );
}
