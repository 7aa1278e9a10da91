//! Filters of the remote syslog servers.
//!
//! These are global settings objects: there is no create call on the device, so the
//! first apply upserts through update and the identity is the fixed API name.
//! Both syslog servers share one field table.

use fortimanager_resource::{
    CreateVerb, FieldDescriptor, IdentityRule, ResourceDescriptor, ScopeRule,
};

static FREE_STYLE_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::string("category", "category"),
    FieldDescriptor::string("filter", "filter"),
    FieldDescriptor::string("filter_type", "filter-type"),
    FieldDescriptor::int("id", "id"),
];

static FILTER_FIELDS: [FieldDescriptor; 13] = [
    FieldDescriptor::string("anomaly", "anomaly").computed(),
    FieldDescriptor::string("dns", "dns").computed(),
    FieldDescriptor::string("filter", "filter").computed(),
    FieldDescriptor::string("filter_type", "filter-type").computed(),
    FieldDescriptor::string("forward_traffic", "forward-traffic").computed(),
    FieldDescriptor::list("free_style", "free-style", &FREE_STYLE_FIELDS),
    FieldDescriptor::string("gtp", "gtp").computed(),
    FieldDescriptor::string("local_traffic", "local-traffic").computed(),
    FieldDescriptor::string("multicast_traffic", "multicast-traffic").computed(),
    FieldDescriptor::string("severity", "severity").computed(),
    FieldDescriptor::string("sniffer_traffic", "sniffer-traffic").computed(),
    FieldDescriptor::string("voip", "voip").computed(),
    FieldDescriptor::string("ztna_traffic", "ztna-traffic").computed(),
];

/// `fortimanager_log_syslogd_filter`
pub static LOG_SYSLOGD_FILTER: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_log_syslogd_filter",
    api_name: "LogSyslogdFilter",
    identity: IdentityRule::Fixed("LogSyslogdFilter"),
    create_verb: CreateVerb::Update,
    scope: ScopeRule::DEVICE,
    locks_workspace: false,
    fields: &FILTER_FIELDS,
};

/// `fortimanager_log_syslogd2_filter`
pub static LOG_SYSLOGD2_FILTER: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_log_syslogd2_filter",
    api_name: "LogSyslogd2Filter",
    identity: IdentityRule::Fixed("LogSyslogd2Filter"),
    create_verb: CreateVerb::Update,
    scope: ScopeRule::DEVICE,
    locks_workspace: false,
    fields: &FILTER_FIELDS,
};
