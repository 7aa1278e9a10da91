//! SD-WAN member interfaces, keyed by sequence number.

use fortimanager_resource::{
    CreateVerb, FieldDescriptor, IdentityRule, ResourceDescriptor, ScopeRule,
};

/// `fortimanager_system_sdwan_members`
pub static SYSTEM_SDWAN_MEMBERS: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_system_sdwan_members",
    api_name: "SystemSdwanMembers",
    identity: IdentityRule::IntField("seq_num"),
    create_verb: CreateVerb::Create,
    scope: ScopeRule::VDOM,
    locks_workspace: true,
    fields: &[
        FieldDescriptor::string("comment", "comment").computed(),
        FieldDescriptor::int("cost", "cost").computed(),
        FieldDescriptor::string("gateway", "gateway").computed(),
        FieldDescriptor::string("gateway6", "gateway6").computed(),
        FieldDescriptor::int("ingress_spillover_threshold", "ingress-spillover-threshold")
            .computed(),
        FieldDescriptor::string_set("interface", "interface").computed(),
        FieldDescriptor::string("preferred_source", "preferred-source").computed(),
        FieldDescriptor::int("priority", "priority").computed(),
        FieldDescriptor::int("priority6", "priority6").computed(),
        FieldDescriptor::string_set("priority_in_sla", "priority-in-sla").computed(),
        FieldDescriptor::string_set("priority_out_sla", "priority-out-sla").computed(),
        FieldDescriptor::int("seq_num", "seq-num").required().force_new(),
        FieldDescriptor::string("source", "source").computed(),
        FieldDescriptor::string("source6", "source6").computed(),
        FieldDescriptor::int("spillover_threshold", "spillover-threshold").computed(),
        FieldDescriptor::string("status", "status").computed(),
        FieldDescriptor::int("transport_group", "transport-group").computed(),
        FieldDescriptor::int("volume_ratio", "volume-ratio").computed(),
        FieldDescriptor::int("weight", "weight").computed(),
        FieldDescriptor::string_set("zone", "zone").computed(),
    ],
};
