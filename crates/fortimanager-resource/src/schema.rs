//! Field and resource descriptors.
//!
//! A [`ResourceDescriptor`] is the whole definition of one configuration object type:
//! its fields, how its identity is derived, which scoping parameters address it and
//! which verb provisions it. Category crates declare descriptors as `static` tables.

use std::collections::BTreeSet;

use fortimanager_core::{Error, Result};

use crate::data::{LocalValue, Record, ResourceData};

/// Local name of the managed device scoping field.
pub const DEVICE_NAME: &str = "device_name";
/// Local name of the VDOM scoping field.
pub const DEVICE_VDOM: &str = "device_vdom";
/// Local name of the per-resource ADOM field.
pub const ADOM: &str = "adom";

/// Value kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar string (enums included)
    String,
    /// Scalar integer
    Int,
    /// Unordered set of strings, sent as an ordered list
    StringSet,
    /// Repeated nested records
    List(&'static [FieldDescriptor]),
}

impl FieldKind {
    /// Short name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::StringSet => "string set",
            Self::List(_) => "list",
        }
    }
}

/// One field of a resource or nested record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Local (underscored) name
    pub local: &'static str,
    /// Wire (hyphenated) name
    pub wire: &'static str,
    /// Value kind
    pub kind: FieldKind,
    /// Must be set on create
    pub required: bool,
    /// May be populated by the remote side
    pub computed: bool,
    /// Never flattened back from the remote side
    pub sensitive: bool,
    /// Changing the value replaces the object
    pub force_new: bool,
}

impl FieldDescriptor {
    const fn new(local: &'static str, wire: &'static str, kind: FieldKind) -> Self {
        Self {
            local,
            wire,
            kind,
            required: false,
            computed: false,
            sensitive: false,
            force_new: false,
        }
    }

    /// Scalar string field.
    #[must_use]
    pub const fn string(local: &'static str, wire: &'static str) -> Self {
        Self::new(local, wire, FieldKind::String)
    }

    /// Scalar integer field.
    #[must_use]
    pub const fn int(local: &'static str, wire: &'static str) -> Self {
        Self::new(local, wire, FieldKind::Int)
    }

    /// String set field.
    #[must_use]
    pub const fn string_set(local: &'static str, wire: &'static str) -> Self {
        Self::new(local, wire, FieldKind::StringSet)
    }

    /// Nested record list field.
    #[must_use]
    pub const fn list(
        local: &'static str,
        wire: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self::new(local, wire, FieldKind::List(fields))
    }

    /// Mark as required.
    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Mark as computed.
    #[must_use]
    pub const fn computed(self) -> Self {
        Self {
            computed: true,
            ..self
        }
    }

    /// Mark as sensitive.
    #[must_use]
    pub const fn sensitive(self) -> Self {
        Self {
            sensitive: true,
            ..self
        }
    }

    /// Mark as forcing replacement.
    #[must_use]
    pub const fn force_new(self) -> Self {
        Self {
            force_new: true,
            ..self
        }
    }

    /// Nested fields of a list field; empty for every other kind.
    #[must_use]
    pub const fn children(&self) -> &'static [FieldDescriptor] {
        match self.kind {
            FieldKind::List(fields) => fields,
            _ => &[],
        }
    }
}

/// How the remote primary key is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRule {
    /// Singleton object with a fixed identity
    Fixed(&'static str),
    /// Value of a string field
    StringField(&'static str),
    /// Value of an integer field, rendered as a string
    IntField(&'static str),
}

impl IdentityRule {
    /// Field supplying the identity, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Fixed(_) => None,
            Self::StringField(name) | Self::IntField(name) => Some(name),
        }
    }
}

/// Client verb used for initial provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateVerb {
    /// Independent create call
    Create,
    /// Update used as upsert (global settings objects)
    Update,
}

/// A parent-object segment on the configuration path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeParam {
    /// Local field carrying the value
    pub local: &'static str,
    /// Key in the scope parameter map
    pub key: &'static str,
}

impl ScopeParam {
    /// Parent segment whose local name and key coincide.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            local: name,
            key: name,
        }
    }
}

/// Scoping parameters a resource needs on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeRule {
    /// Whether the object lives inside a VDOM
    pub vdom: bool,
    /// Parent segments, outermost first
    pub parents: &'static [ScopeParam],
}

impl ScopeRule {
    /// Device-global object.
    pub const DEVICE: Self = Self {
        vdom: false,
        parents: &[],
    };

    /// VDOM-scoped object.
    pub const VDOM: Self = Self {
        vdom: true,
        parents: &[],
    };

    /// Device-global object below parent objects.
    #[must_use]
    pub const fn device_with_parents(parents: &'static [ScopeParam]) -> Self {
        Self {
            vdom: false,
            parents,
        }
    }

    /// VDOM-scoped object below parent objects.
    #[must_use]
    pub const fn vdom_with_parents(parents: &'static [ScopeParam]) -> Self {
        Self {
            vdom: true,
            parents,
        }
    }

    /// Local names of every scoping field, in resolution order.
    #[must_use]
    pub fn local_names(&self) -> Vec<&'static str> {
        let mut names = vec![DEVICE_NAME];
        if self.vdom {
            names.push(DEVICE_VDOM);
        }
        names.extend(self.parents.iter().map(|p| p.local));
        names
    }
}

/// Complete definition of one configuration object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Terraform type name
    pub type_name: &'static str,
    /// API name handed to the client
    pub api_name: &'static str,
    /// Identity derivation
    pub identity: IdentityRule,
    /// Provisioning verb
    pub create_verb: CreateVerb,
    /// Scoping parameters
    pub scope: ScopeRule,
    /// Whether calls carry workspace parameters when locking is enabled
    pub locks_workspace: bool,
    /// Ordered field table
    pub fields: &'static [FieldDescriptor],
}

impl ResourceDescriptor {
    /// Look up a top-level field by local name.
    #[must_use]
    pub fn field(&self, local: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.local == local)
    }

    /// Whether the object is a singleton with a fixed identity.
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        matches!(self.identity, IdentityRule::Fixed(_))
    }

    /// Check the structural rules of the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDescriptor`] when local or wire names repeat at any
    /// level, the identity field is missing or of the wrong kind, or a scoping field
    /// collides with an object field.
    pub fn validate(&self) -> Result<()> {
        if self.type_name.is_empty() || self.api_name.is_empty() {
            return Err(Error::InvalidDescriptor(
                "type and API names must be set".to_string(),
            ));
        }

        validate_fields(self.api_name, "", self.fields)?;

        match self.identity {
            IdentityRule::Fixed(literal) if literal.is_empty() => {
                return Err(self.invalid("fixed identity is empty"));
            }
            IdentityRule::Fixed(_) => {}
            IdentityRule::StringField(name) => self.expect_identity_kind(name, FieldKind::String)?,
            IdentityRule::IntField(name) => self.expect_identity_kind(name, FieldKind::Int)?,
        }

        for name in self.scope.local_names() {
            if self.field(name).is_some() {
                return Err(self.invalid(&format!("scope field `{name}` shadows an object field")));
            }
        }

        Ok(())
    }

    /// Reject creation when a required field is unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] naming the first missing field.
    pub fn check_required(&self, data: &ResourceData) -> Result<()> {
        match self
            .fields
            .iter()
            .find(|f| f.required && data.get(f.local).is_none())
        {
            Some(field) => Err(Error::ValidationError(format!(
                "{}: required field `{}` is not set",
                self.api_name, field.local
            ))),
            None => Ok(()),
        }
    }

    /// Whether the pending changes require destroying and recreating the object.
    ///
    /// Changes to the identity field, a `force_new` field or any scoping field
    /// cannot be applied in place.
    #[must_use]
    pub fn requires_replacement(&self, data: &ResourceData) -> bool {
        let identity_changed = self
            .identity
            .field()
            .is_some_and(|name| data.has_change(name));
        let forced = self
            .fields
            .iter()
            .any(|f| f.force_new && data.has_change(f.local));
        let rescoped = self
            .scope
            .local_names()
            .into_iter()
            .any(|name| data.has_change(name));
        identity_changed || forced || rescoped
    }

    /// State for applying `planned` on top of `prior`.
    ///
    /// Computed fields left out of `planned` keep their prior value, at any nesting
    /// level, so remote defaults picked up by a refresh are neither reported as
    /// removed nor reset on the device.
    #[must_use]
    pub fn plan_state(&self, prior: Option<&ResourceData>, mut planned: Record) -> ResourceData {
        if let Some(prior) = prior {
            carry_computed(self.fields, prior.values(), &mut planned);
        }
        ResourceData::from_plan(prior, planned)
    }

    fn expect_identity_kind(&self, name: &str, kind: FieldKind) -> Result<()> {
        match self.field(name) {
            Some(field) if field.kind == kind => Ok(()),
            Some(field) => Err(self.invalid(&format!(
                "identity field `{name}` is a {}, expected {}",
                field.kind.name(),
                kind.name()
            ))),
            None => Err(self.invalid(&format!("identity field `{name}` is not declared"))),
        }
    }

    fn invalid(&self, message: &str) -> Error {
        Error::InvalidDescriptor(format!("{}: {message}", self.api_name))
    }
}

fn carry_computed(fields: &[FieldDescriptor], prior: &Record, planned: &mut Record) {
    for field in fields {
        let Some(old) = prior.get(field.local) else {
            continue;
        };
        if !planned.contains_key(field.local) {
            if field.computed {
                planned.insert(field.local.to_string(), old.clone());
            }
            continue;
        }
        if let (FieldKind::List(children), Some(LocalValue::List(rows)), Some(old_rows)) =
            (field.kind, planned.get_mut(field.local), old.as_list())
        {
            for (row, old_row) in rows.iter_mut().zip(old_rows) {
                carry_computed(children, old_row, row);
            }
        }
    }
}

fn validate_fields(resource: &str, prefix: &str, fields: &[FieldDescriptor]) -> Result<()> {
    let mut locals = BTreeSet::new();
    let mut wires = BTreeSet::new();

    for field in fields {
        if field.local.is_empty() || field.wire.is_empty() {
            return Err(Error::InvalidDescriptor(format!(
                "{resource}: empty field name under `{prefix}`"
            )));
        }
        if !locals.insert(field.local) {
            return Err(Error::InvalidDescriptor(format!(
                "{resource}: duplicate local name `{prefix}{}`",
                field.local
            )));
        }
        if !wires.insert(field.wire) {
            return Err(Error::InvalidDescriptor(format!(
                "{resource}: duplicate wire name `{prefix}{}`",
                field.wire
            )));
        }
        if let FieldKind::List(children) = field.kind {
            if children.is_empty() {
                return Err(Error::InvalidDescriptor(format!(
                    "{resource}: list `{prefix}{}` declares no fields",
                    field.local
                )));
            }
            validate_fields(resource, &format!("{prefix}{}.", field.local), children)?;
        }
    }

    Ok(())
}
