//! Cloud Map (Service Discovery) operations.
//!
//! List operations paginate with `NextToken`. `CreateService` carries the
//! `DnsConfig`, `HealthCheckConfig`, and `HealthCheckCustomConfig` nested
//! groups.

use crate::op::OpSpec;

const SERVICE: &str = "servicediscovery";
const TARGET: &str = "Route53AutoNaming_v20170314";

pub static LIST_SERVICES: OpSpec = OpSpec {
    service: SERVICE,
    name: "ListServices",
    target_prefix: TARGET,
    action: "List Cloud Map services",
    required: &[],
    fields: &[
        ("Filters", "Filters"),
        ("MaxResults", "MaxResults"),
        ("NextToken", "NextToken"),
    ],
    token_param: Some("NextToken"),
    token_field: Some("NextToken"),
    primary: Some("Services"),
    response_fields: &["Services", "NextToken"],
    mutating: false,
};

pub static LIST_NAMESPACES: OpSpec = OpSpec {
    service: SERVICE,
    name: "ListNamespaces",
    target_prefix: TARGET,
    action: "List Cloud Map namespaces",
    required: &[],
    fields: &[
        ("Filters", "Filters"),
        ("MaxResults", "MaxResults"),
        ("NextToken", "NextToken"),
    ],
    token_param: Some("NextToken"),
    token_field: Some("NextToken"),
    primary: Some("Namespaces"),
    response_fields: &["Namespaces", "NextToken"],
    mutating: false,
};

pub static LIST_INSTANCES: OpSpec = OpSpec {
    service: SERVICE,
    name: "ListInstances",
    target_prefix: TARGET,
    action: "List instances registered to a service",
    required: &["ServiceId"],
    fields: &[
        ("ServiceId", "ServiceId"),
        ("MaxResults", "MaxResults"),
        ("NextToken", "NextToken"),
    ],
    token_param: Some("NextToken"),
    token_field: Some("NextToken"),
    primary: Some("Instances"),
    response_fields: &["Instances", "NextToken"],
    mutating: false,
};

pub static GET_NAMESPACE: OpSpec = OpSpec {
    service: SERVICE,
    name: "GetNamespace",
    target_prefix: TARGET,
    action: "Read one namespace",
    required: &["Id"],
    fields: &[("Id", "Id")],
    token_param: None,
    token_field: None,
    primary: Some("Namespace"),
    response_fields: &["Namespace"],
    mutating: false,
};

pub static GET_SERVICE: OpSpec = OpSpec {
    service: SERVICE,
    name: "GetService",
    target_prefix: TARGET,
    action: "Read one service",
    required: &["Id"],
    fields: &[("Id", "Id")],
    token_param: None,
    token_field: None,
    primary: Some("Service"),
    response_fields: &["Service"],
    mutating: false,
};

pub static DISCOVER_INSTANCES: OpSpec = OpSpec {
    service: SERVICE,
    name: "DiscoverInstances",
    target_prefix: TARGET,
    action: "Discover healthy instances of a service",
    required: &["NamespaceName", "ServiceName"],
    fields: &[
        ("NamespaceName", "NamespaceName"),
        ("ServiceName", "ServiceName"),
        ("MaxResults", "MaxResults"),
        ("HealthStatus", "HealthStatus"),
        ("QueryParameters", "QueryParameters"),
        ("OptionalParameters", "OptionalParameters"),
    ],
    token_param: None,
    token_field: None,
    primary: Some("Instances"),
    response_fields: &["Instances"],
    mutating: false,
};

pub static CREATE_SERVICE: OpSpec = OpSpec {
    service: SERVICE,
    name: "CreateService",
    target_prefix: TARGET,
    action: "Create a Cloud Map service",
    required: &["Name"],
    fields: &[
        ("Name", "Name"),
        ("NamespaceId", "NamespaceId"),
        ("Description", "Description"),
        ("CreatorRequestId", "CreatorRequestId"),
        ("Type", "Type"),
        ("Tags", "Tags"),
        ("DnsConfigNamespaceId", "DnsConfig.NamespaceId"),
        ("DnsConfigRoutingPolicy", "DnsConfig.RoutingPolicy"),
        ("DnsConfigDnsRecords", "DnsConfig.DnsRecords"),
        ("HealthCheckType", "HealthCheckConfig.Type"),
        ("HealthCheckResourcePath", "HealthCheckConfig.ResourcePath"),
        ("HealthCheckFailureThreshold", "HealthCheckConfig.FailureThreshold"),
        (
            "HealthCheckCustomFailureThreshold",
            "HealthCheckCustomConfig.FailureThreshold",
        ),
    ],
    token_param: None,
    token_field: None,
    primary: Some("Service"),
    response_fields: &["Service"],
    mutating: true,
};

pub static REGISTER_INSTANCE: OpSpec = OpSpec {
    service: SERVICE,
    name: "RegisterInstance",
    target_prefix: TARGET,
    action: "Register an instance with a Cloud Map service",
    required: &["ServiceId", "InstanceId", "Attributes"],
    fields: &[
        ("ServiceId", "ServiceId"),
        ("InstanceId", "InstanceId"),
        ("CreatorRequestId", "CreatorRequestId"),
        ("Attributes", "Attributes"),
    ],
    token_param: None,
    token_field: None,
    primary: Some("OperationId"),
    response_fields: &["OperationId"],
    mutating: true,
};

pub static DEREGISTER_INSTANCE: OpSpec = OpSpec {
    service: SERVICE,
    name: "DeregisterInstance",
    target_prefix: TARGET,
    action: "Deregister an instance from a Cloud Map service",
    required: &["ServiceId", "InstanceId"],
    fields: &[("ServiceId", "ServiceId"), ("InstanceId", "InstanceId")],
    token_param: None,
    token_field: None,
    primary: Some("OperationId"),
    response_fields: &["OperationId"],
    mutating: true,
};

pub static UPDATE_INSTANCE_CUSTOM_HEALTH_STATUS: OpSpec = OpSpec {
    service: SERVICE,
    name: "UpdateInstanceCustomHealthStatus",
    target_prefix: TARGET,
    action: "Update the custom health status of an instance",
    required: &["ServiceId", "InstanceId", "Status"],
    fields: &[
        ("ServiceId", "ServiceId"),
        ("InstanceId", "InstanceId"),
        ("Status", "Status"),
    ],
    token_param: None,
    token_field: None,
    primary: None,
    response_fields: &[],
    mutating: true,
};

/// Every Cloud Map operation in the catalog.
pub static OPERATIONS: &[&OpSpec] = &[
    &LIST_SERVICES,
    &LIST_NAMESPACES,
    &LIST_INSTANCES,
    &GET_NAMESPACE,
    &GET_SERVICE,
    &DISCOVER_INSTANCES,
    &CREATE_SERVICE,
    &REGISTER_INSTANCE,
    &DEREGISTER_INSTANCE,
    &UPDATE_INSTANCE_CUSTOM_HEALTH_STATUS,
];
