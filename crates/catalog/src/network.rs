//! `network` package.

use specgen_core::Schema;

use crate::common::{Prims, embed, field, json};

pub(crate) fn define(schema: &mut Schema, p: &Prims) {
    let ipam_config = schema.named_struct(
        "network",
        "IPAMConfig",
        vec![
            json("Subnet", p.string, ",omitempty"),
            json("IPRange", p.string, ",omitempty"),
            json("Gateway", p.string, ",omitempty"),
            json("AuxAddress", p.labels, "AuxiliaryAddresses,omitempty"),
        ],
    );
    let ipam_configs = schema.slice(ipam_config);
    let ipam = schema.named_struct(
        "network",
        "IPAM",
        vec![
            field("Driver", p.string),
            field("Options", p.labels),
            field("Config", ipam_configs),
        ],
    );

    let endpoint_ipam = schema.named_struct(
        "network",
        "EndpointIPAMConfig",
        vec![
            json("IPv4Address", p.string, ",omitempty"),
            json("IPv6Address", p.string, ",omitempty"),
            json("LinkLocalIPs", p.strings, ",omitempty"),
        ],
    );
    let endpoint_ipam_ptr = schema.pointer(endpoint_ipam);
    let endpoint = schema.named_struct(
        "network",
        "EndpointSettings",
        vec![
            field("IPAMConfig", endpoint_ipam_ptr),
            field("Links", p.strings),
            field("Aliases", p.strings),
            field("DriverOpts", p.labels),
            field("MacAddress", p.string),
            field("NetworkID", p.string),
            field("EndpointID", p.string),
            field("Gateway", p.string),
            field("IPAddress", p.string),
            field("IPPrefixLen", p.int),
            field("IPv6Gateway", p.string),
            field("GlobalIPv6Address", p.string),
            field("GlobalIPv6PrefixLen", p.int),
            field("DNSNames", p.strings),
        ],
    );
    let endpoint_ptr = schema.pointer(endpoint);
    let endpoints = schema.map(p.string, endpoint_ptr);
    schema.named_struct(
        "network",
        "NetworkingConfig",
        vec![field("EndpointsConfig", endpoints)],
    );

    let config_from = schema.named_struct(
        "network",
        "ConfigReference",
        vec![field("Network", p.string)],
    );
    let peer = schema.named_struct(
        "network",
        "PeerInfo",
        vec![field("Name", p.string), field("IP", p.string)],
    );
    let peers = schema.slice(peer);
    let network = schema.named_struct(
        "network",
        "Network",
        vec![
            field("Name", p.string),
            json("ID", p.string, "Id"),
            field("Created", p.time),
            field("Scope", p.string),
            field("Driver", p.string),
            field("EnableIPv4", p.boolean),
            field("EnableIPv6", p.boolean),
            field("IPAM", ipam),
            field("Internal", p.boolean),
            field("Attachable", p.boolean),
            field("Ingress", p.boolean),
            field("ConfigFrom", config_from),
            field("ConfigOnly", p.boolean),
            field("Options", p.labels),
            field("Labels", p.labels),
            json("Peers", peers, ",omitempty"),
        ],
    );

    let resource = schema.named_struct(
        "network",
        "EndpointResource",
        vec![
            field("Name", p.string),
            field("EndpointID", p.string),
            field("MacAddress", p.string),
            field("IPv4Address", p.string),
            field("IPv6Address", p.string),
        ],
    );
    let task = schema.named_struct(
        "network",
        "Task",
        vec![
            field("Name", p.string),
            field("EndpointID", p.string),
            field("EndpointIP", p.string),
            field("Info", p.labels),
        ],
    );
    let tasks = schema.slice(task);
    let service = schema.named_struct(
        "network",
        "ServiceInfo",
        vec![
            field("VIP", p.string),
            field("Ports", p.strings),
            field("LocalLBIndex", p.int),
            field("Tasks", tasks),
        ],
    );
    let subnet = schema.named_struct(
        "network",
        "SubnetStatus",
        vec![
            field("IPsInUse", p.uint64),
            field("DynamicIPsAvailable", p.uint64),
        ],
    );
    let subnets = schema.map(p.string, subnet);
    let ipam_status = schema.named_struct(
        "network",
        "IPAMStatus",
        vec![field("Subnets", subnets)],
    );
    let status = schema.named_struct("network", "Status", vec![field("IPAM", ipam_status)]);

    let resources = schema.map(p.string, resource);
    let services = schema.map(p.string, service);
    let status_ptr = schema.pointer(status);
    schema.named_struct(
        "network",
        "Inspect",
        vec![
            embed("Network", network),
            field("Containers", resources),
            json("Services", services, ",omitempty"),
            json("Status", status_ptr, ",omitempty"),
        ],
    );

    let bool_ptr = schema.pointer(p.boolean);
    let ipam_ptr = schema.pointer(ipam);
    let config_from_ptr = schema.pointer(config_from);
    schema.named_struct(
        "network",
        "CreateRequest",
        vec![
            field("Name", p.string),
            field("Driver", p.string),
            field("Scope", p.string),
            json("EnableIPv4", bool_ptr, ",omitempty"),
            json("EnableIPv6", bool_ptr, ",omitempty"),
            field("IPAM", ipam_ptr),
            field("Internal", p.boolean),
            field("Attachable", p.boolean),
            field("Ingress", p.boolean),
            field("ConfigOnly", p.boolean),
            json("ConfigFrom", config_from_ptr, ",omitempty"),
            field("Options", p.labels),
            field("Labels", p.labels),
        ],
    );
    schema.named_struct(
        "network",
        "CreateResponse",
        vec![json("ID", p.string, "Id"), field("Warning", p.string)],
    );
    schema.named_struct(
        "network",
        "ConnectOptions",
        vec![
            field("Container", p.string),
            json("EndpointConfig", endpoint_ptr, ",omitempty"),
        ],
    );
    schema.named_struct(
        "network",
        "DisconnectOptions",
        vec![field("Container", p.string), field("Force", p.boolean)],
    );
    schema.named_struct(
        "network",
        "PruneReport",
        vec![field("NetworksDeleted", p.strings)],
    );
}
