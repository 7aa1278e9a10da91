//! Quarantine settings of the antivirus engine.
//!
//! One object per VDOM, addressed by the fixed identity `AntivirusQuarantine`.

use fortimanager_resource::{
    CreateVerb, FieldDescriptor, IdentityRule, ResourceDescriptor, ScopeRule,
};

/// `fortimanager_antivirus_quarantine`
pub static ANTIVIRUS_QUARANTINE: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_antivirus_quarantine",
    api_name: "AntivirusQuarantine",
    identity: IdentityRule::Fixed("AntivirusQuarantine"),
    create_verb: CreateVerb::Create,
    scope: ScopeRule::VDOM,
    locks_workspace: true,
    fields: &[
        FieldDescriptor::int("agelimit", "agelimit").computed(),
        FieldDescriptor::string("destination", "destination").computed(),
        FieldDescriptor::string_set("drop_blocked", "drop-blocked").computed(),
        FieldDescriptor::string_set("drop_heuristic", "drop-heuristic").computed(),
        FieldDescriptor::string_set("drop_infected", "drop-infected").computed(),
        FieldDescriptor::string_set("drop_machine_learning", "drop-machine-learning").computed(),
        FieldDescriptor::string("lowspace", "lowspace").computed(),
        FieldDescriptor::int("maxfilesize", "maxfilesize").computed(),
        FieldDescriptor::int("quarantine_quota", "quarantine-quota").computed(),
        FieldDescriptor::string_set("store_blocked", "store-blocked").computed(),
        FieldDescriptor::string_set("store_heuristic", "store-heuristic").computed(),
        FieldDescriptor::string_set("store_infected", "store-infected").computed(),
        FieldDescriptor::string_set("store_machine_learning", "store-machine-learning").computed(),
    ],
};
