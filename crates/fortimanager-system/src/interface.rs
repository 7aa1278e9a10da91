//! Extra IPv6 prefixes below a device interface.
//!
//! Interfaces are device-global, so there is no VDOM segment; the parent interface
//! name travels as `interface`.

use fortimanager_resource::{
    CreateVerb, FieldDescriptor, IdentityRule, ResourceDescriptor, ScopeParam, ScopeRule,
};

static INTERFACE: [ScopeParam; 1] = [ScopeParam::new("interface")];

/// `fortimanager_system_interface_ipv6_ip6extraaddr`
pub static SYSTEM_INTERFACE_IPV6_IP6_EXTRA_ADDR: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_system_interface_ipv6_ip6extraaddr",
    api_name: "SystemInterfaceIpv6Ip6ExtraAddr",
    identity: IdentityRule::StringField("prefix"),
    create_verb: CreateVerb::Create,
    scope: ScopeRule::device_with_parents(&INTERFACE),
    locks_workspace: true,
    fields: &[FieldDescriptor::string("prefix", "prefix").required().force_new()],
};
