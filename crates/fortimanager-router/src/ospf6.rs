//! OSPFv3 virtual links, addressed below their transit `area`.

use fortimanager_resource::{
    CreateVerb, FieldDescriptor, IdentityRule, ResourceDescriptor, ScopeParam, ScopeRule,
};

static IPSEC_KEY_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::string_set("auth_key", "auth-key").sensitive(),
    FieldDescriptor::string_set("enc_key", "enc-key").sensitive(),
    FieldDescriptor::int("spi", "spi"),
];

static AREA: [ScopeParam; 1] = [ScopeParam::new("area")];

/// `fortimanager_router_ospf6_area_virtuallink`
pub static ROUTER_OSPF6_AREA_VIRTUAL_LINK: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_router_ospf6_area_virtuallink",
    api_name: "RouterOspf6AreaVirtualLink",
    identity: IdentityRule::StringField("name"),
    create_verb: CreateVerb::Create,
    scope: ScopeRule::vdom_with_parents(&AREA),
    locks_workspace: true,
    fields: &[
        FieldDescriptor::string("authentication", "authentication").computed(),
        FieldDescriptor::int("dead_interval", "dead-interval").computed(),
        FieldDescriptor::int("hello_interval", "hello-interval").computed(),
        FieldDescriptor::string("ipsec_auth_alg", "ipsec-auth-alg").computed(),
        FieldDescriptor::string("ipsec_enc_alg", "ipsec-enc-alg").computed(),
        FieldDescriptor::list("ipsec_keys", "ipsec-keys", &IPSEC_KEY_FIELDS),
        FieldDescriptor::int("key_rollover_interval", "key-rollover-interval").computed(),
        FieldDescriptor::string("name", "name").required().force_new(),
        FieldDescriptor::string("peer", "peer").computed(),
        FieldDescriptor::int("retransmit_interval", "retransmit-interval").computed(),
        FieldDescriptor::int("transmit_delay", "transmit-delay").computed(),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use fortimanager_core::WireValue;
    use fortimanager_resource::{expand_object, record, LocalValue, ResourceData};

    #[test]
    fn descriptor_is_valid() {
        ROUTER_OSPF6_AREA_VIRTUAL_LINK.validate().unwrap();
    }

    #[test]
    fn ipsec_keys_expand_with_sensitive_sets() {
        let data = ResourceData::new().with("name", "vlink1").with(
            "ipsec_keys",
            vec![record! {
                "spi" => 256,
                "auth_key" => LocalValue::set(["0123456789abcdef"]),
            }],
        );
        let object = expand_object(&ROUTER_OSPF6_AREA_VIRTUAL_LINK, &data).unwrap();
        let key = object["ipsec-keys"].as_list().unwrap()[0].as_map().unwrap();

        assert_eq!(key["spi"], WireValue::Int(256));
        assert_eq!(
            key["auth-key"],
            WireValue::List(vec!["0123456789abcdef".into()])
        );
        assert!(!key.contains_key("enc-key"));
    }

    #[test]
    fn changing_area_forces_replacement() {
        let prior = ResourceData::new().with("area", "0.0.0.1").with("name", "vlink1");
        let planned = ResourceData::new().with("area", "0.0.0.2").with("name", "vlink1");
        let data = ResourceData::from_plan(Some(&prior), planned.into_values());
        assert!(ROUTER_OSPF6_AREA_VIRTUAL_LINK.requires_replacement(&data));
    }

    #[test]
    fn timer_change_updates_in_place() {
        let prior = ResourceData::new().with("name", "vlink1").with("dead_interval", 40);
        let planned = ResourceData::new().with("name", "vlink1").with("dead_interval", 60);
        let data = ResourceData::from_plan(Some(&prior), planned.into_values());
        assert!(!ROUTER_OSPF6_AREA_VIRTUAL_LINK.requires_replacement(&data));
    }
}
