//! Local state to remote object conversion.
//!
//! A field is sent when it is set locally or when it changed. A changed field that
//! is no longer set is sent as its zero value so the remote side clears it.

use std::collections::BTreeSet;

use fortimanager_core::{Error, RemoteObject, Result, WireValue};

use crate::data::{LocalValue, Record, ResourceData};
use crate::schema::{FieldDescriptor, FieldKind, ResourceDescriptor};

/// Build the remote object for a create or update call.
///
/// # Errors
///
/// Returns [`Error::InvalidFieldValue`] when a local value does not match its
/// field kind.
pub fn expand_object(descriptor: &ResourceDescriptor, data: &ResourceData) -> Result<RemoteObject> {
    let expander = Expander {
        resource: descriptor.api_name,
        data,
    };
    expander.record(descriptor.fields, data.values(), "")
}

/// Set of strings as the ordered list the remote side expects.
#[must_use]
pub fn expand_string_list(items: &BTreeSet<String>) -> WireValue {
    WireValue::List(items.iter().map(|s| WireValue::Str(s.clone())).collect())
}

/// Zero value sent for a cleared field.
#[must_use]
pub const fn zero_value(kind: &FieldKind) -> WireValue {
    match kind {
        FieldKind::String => WireValue::Str(String::new()),
        FieldKind::Int => WireValue::Int(0),
        FieldKind::StringSet | FieldKind::List(_) => WireValue::List(Vec::new()),
    }
}

struct Expander<'a> {
    resource: &'a str,
    data: &'a ResourceData,
}

impl Expander<'_> {
    fn record(
        &self,
        fields: &[FieldDescriptor],
        values: &Record,
        prefix: &str,
    ) -> Result<RemoteObject> {
        let mut object = RemoteObject::new();

        for field in fields {
            let path = format!("{prefix}{}", field.local);
            if let Some(value) = values.get(field.local) {
                object.insert(field.wire.to_string(), self.value(field, value, &path)?);
            } else if self.data.has_change(&path) {
                object.insert(field.wire.to_string(), zero_value(&field.kind));
            }
        }

        Ok(object)
    }

    fn value(&self, field: &FieldDescriptor, value: &LocalValue, path: &str) -> Result<WireValue> {
        match (&field.kind, value) {
            (FieldKind::String, LocalValue::Str(s)) => Ok(WireValue::Str(s.clone())),
            (FieldKind::Int, LocalValue::Int(v)) => Ok(WireValue::Int(*v)),
            (FieldKind::StringSet, LocalValue::Set(items)) => Ok(expand_string_list(items)),
            (FieldKind::List(children), LocalValue::List(rows)) => rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    self.record(children, row, &format!("{path}.{i}."))
                        .map(WireValue::Map)
                })
                .collect::<Result<Vec<_>>>()
                .map(WireValue::List),
            (kind, other) => Err(Error::InvalidFieldValue {
                resource: self.resource.to_string(),
                field: path.to_string(),
                message: format!("expected {}, found {}", kind.name(), other.kind_name()),
            }),
        }
    }
}
