//! Fingerprint document sources: file servers scanned for DLP fingerprints.

use fortimanager_resource::{
    CreateVerb, FieldDescriptor, IdentityRule, ResourceDescriptor, ScopeRule,
};

/// `fortimanager_dlp_fpdocsource`
pub static DLP_FP_DOC_SOURCE: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_dlp_fpdocsource",
    api_name: "DlpFpDocSource",
    identity: IdentityRule::StringField("name"),
    create_verb: CreateVerb::Create,
    scope: ScopeRule::VDOM,
    locks_workspace: true,
    fields: &[
        FieldDescriptor::int("date", "date").computed(),
        FieldDescriptor::string("file_path", "file-path").computed(),
        FieldDescriptor::string("file_pattern", "file-pattern").computed(),
        FieldDescriptor::string("keep_modified", "keep-modified").computed(),
        FieldDescriptor::string("name", "name").required().force_new(),
        FieldDescriptor::string_set("password", "password").sensitive(),
        FieldDescriptor::string("period", "period").computed(),
        FieldDescriptor::string("remove_deleted", "remove-deleted").computed(),
        FieldDescriptor::string("scan_on_creation", "scan-on-creation").computed(),
        FieldDescriptor::string("scan_subdirectories", "scan-subdirectories").computed(),
        FieldDescriptor::string("sensitivity", "sensitivity").computed(),
        FieldDescriptor::string("server", "server").computed(),
        FieldDescriptor::string("server_type", "server-type").computed(),
        FieldDescriptor::int("tod_hour", "tod-hour").computed(),
        FieldDescriptor::int("tod_min", "tod-min").computed(),
        FieldDescriptor::string("username", "username").computed(),
        FieldDescriptor::string("vdom", "vdom").computed(),
        FieldDescriptor::string("weekday", "weekday").computed(),
    ],
};
