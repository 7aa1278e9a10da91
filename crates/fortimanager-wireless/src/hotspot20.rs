//! Hotspot 2.0 ANQP network access identifier realms.
//!
//! The realm list nests three levels deep: realms, their EAP methods, and the
//! authentication parameters of each method.

use fortimanager_resource::{
    CreateVerb, FieldDescriptor, IdentityRule, ResourceDescriptor, ScopeRule,
};

static AUTH_PARAM_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::string("id", "id"),
    FieldDescriptor::int("index", "index"),
    FieldDescriptor::string("val", "val"),
];

static EAP_METHOD_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::list("auth_param", "auth-param", &AUTH_PARAM_FIELDS),
    FieldDescriptor::int("index", "index"),
    FieldDescriptor::string("method", "method"),
];

static NAI_LIST_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::list("eap_method", "eap-method", &EAP_METHOD_FIELDS),
    FieldDescriptor::string("encoding", "encoding"),
    FieldDescriptor::string("nai_realm", "nai-realm"),
    FieldDescriptor::string("name", "name"),
];

/// `fortimanager_wirelesscontroller_hotspot20_anqpnairealm`
pub static WIRELESS_CONTROLLER_HOTSPOT20_ANQP_NAI_REALM: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_wirelesscontroller_hotspot20_anqpnairealm",
    api_name: "WirelessControllerHotspot20AnqpNaiRealm",
    identity: IdentityRule::StringField("name"),
    create_verb: CreateVerb::Create,
    scope: ScopeRule::VDOM,
    locks_workspace: true,
    fields: &[
        FieldDescriptor::string("name", "name").required().force_new(),
        FieldDescriptor::list("nai_list", "nai-list", &NAI_LIST_FIELDS),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use fortimanager_core::WireValue;
    use fortimanager_resource::{expand_object, record, ResourceData};

    #[test]
    fn descriptor_is_valid() {
        WIRELESS_CONTROLLER_HOTSPOT20_ANQP_NAI_REALM.validate().unwrap();
    }

    #[test]
    fn three_levels_expand() {
        let data = ResourceData::new().with("name", "realm1").with(
            "nai_list",
            vec![record! {
                "name" => "corp",
                "nai_realm" => "example.com",
                "eap_method" => vec![record! {
                    "index" => 1,
                    "method" => "eap-ttls",
                    "auth_param" => vec![record! {
                        "id" => "non-eap-inner-auth",
                        "index" => 1,
                        "val" => "mschapv2",
                    }],
                }],
            }],
        );

        let object = expand_object(&WIRELESS_CONTROLLER_HOTSPOT20_ANQP_NAI_REALM, &data).unwrap();
        let realm = object["nai-list"].as_list().unwrap()[0].as_map().unwrap();
        assert_eq!(realm["nai-realm"], WireValue::from("example.com"));
        assert!(!realm.contains_key("encoding"));

        let method = realm["eap-method"].as_list().unwrap()[0].as_map().unwrap();
        assert_eq!(method["method"], WireValue::from("eap-ttls"));

        let param = method["auth-param"].as_list().unwrap()[0].as_map().unwrap();
        assert_eq!(param["id"], WireValue::from("non-eap-inner-auth"));
        assert_eq!(param["val"], WireValue::from("mschapv2"));
    }
}
