//! Exact data match (EDM) tables.
//!
//! A table is addressed by name. Its columns can be managed inline through the
//! nested `columns` list or as standalone objects below the parent table, keyed by
//! their integer `index`.

use fortimanager_resource::{
    CreateVerb, FieldDescriptor, IdentityRule, ResourceDescriptor, ScopeParam, ScopeRule,
};

static COLUMN_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::int("index", "index"),
    FieldDescriptor::string("optional", "optional"),
    FieldDescriptor::string("type", "type"),
];

static PARENT_TABLE: [ScopeParam; 1] = [ScopeParam::new("exact_data_match")];

/// `fortimanager_dlp_exactdatamatch`
pub static DLP_EXACT_DATA_MATCH: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_dlp_exactdatamatch",
    api_name: "DlpExactDataMatch",
    identity: IdentityRule::StringField("name"),
    create_verb: CreateVerb::Create,
    scope: ScopeRule::VDOM,
    locks_workspace: true,
    fields: &[
        FieldDescriptor::list("columns", "columns", &COLUMN_FIELDS),
        FieldDescriptor::string("data", "data").computed(),
        FieldDescriptor::string("name", "name").required().force_new(),
        FieldDescriptor::int("optional", "optional").computed(),
    ],
};

/// `fortimanager_dlp_exactdatamatch_columns`
pub static DLP_EXACT_DATA_MATCH_COLUMNS: ResourceDescriptor = ResourceDescriptor {
    type_name: "fortimanager_dlp_exactdatamatch_columns",
    api_name: "DlpExactDataMatchColumns",
    identity: IdentityRule::IntField("index"),
    create_verb: CreateVerb::Create,
    scope: ScopeRule::vdom_with_parents(&PARENT_TABLE),
    locks_workspace: true,
    fields: &[
        FieldDescriptor::int("index", "index").required().force_new(),
        FieldDescriptor::string("optional", "optional").computed(),
        FieldDescriptor::string("type", "type").computed(),
    ],
};
