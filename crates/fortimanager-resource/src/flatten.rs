//! Remote object to local state conversion.

use std::collections::BTreeSet;

use fortimanager_core::{Error, RemoteObject, Result, WireValue};
use tracing::warn;

use crate::data::{LocalValue, Record, ResourceData};
use crate::patch::{fortiapi_patch, patch_path};
use crate::schema::{FieldDescriptor, FieldKind, ResourceDescriptor};

/// Refresh local state from a remote object.
///
/// Sensitive fields are left untouched. A top-level nested list is only refreshed
/// when it is set locally or when `import_tables` is enabled. Scalars absent from
/// the remote object are removed from local state.
///
/// # Errors
///
/// Returns [`Error::FieldReadError`] when a remote value has the wrong shape and the
/// compatibility patch cannot recover it.
pub fn flatten_object(
    descriptor: &ResourceDescriptor,
    object: &RemoteObject,
    data: &mut ResourceData,
    import_tables: bool,
) -> Result<()> {
    for field in descriptor.fields {
        if field.sensitive {
            continue;
        }
        if matches!(field.kind, FieldKind::List(_))
            && !import_tables
            && data.get_ok(field.local).is_none()
        {
            continue;
        }

        let value = object.get(field.wire);
        let prior = data.get(field.local);
        match flatten_field(descriptor.api_name, field, value, prior, field.local)? {
            Some(value) => data.set(field.local, value),
            None => {
                data.unset(field.local);
            }
        }
    }

    Ok(())
}

/// List of remote strings as a set; `None` if any entry is not a string.
#[must_use]
pub fn flatten_string_list(items: &[WireValue]) -> Option<BTreeSet<String>> {
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// Flatten one remote value into its local form.
///
/// An absent nested list becomes an empty list; any other absent value yields
/// `None`. `prior` is the current local value; inside nested records a sensitive
/// field keeps its local value when one is set.
///
/// # Errors
///
/// Returns [`Error::FieldReadError`] naming `path` when the value cannot be
/// flattened even after patching.
pub fn flatten_field(
    resource: &str,
    field: &FieldDescriptor,
    value: Option<&WireValue>,
    prior: Option<&LocalValue>,
    path: &str,
) -> Result<Option<LocalValue>> {
    let Some(value) = value else {
        return Ok(match field.kind {
            FieldKind::List(_) => Some(LocalValue::List(Vec::new())),
            _ => None,
        });
    };

    match strict(resource, field, value, prior, path) {
        Ok(local) => Ok(Some(local)),
        Err(Mismatch::Field(err)) => Err(err),
        Err(Mismatch::Shape(message)) => match fortiapi_patch(value, &field.kind) {
            Some(local) => {
                warn!(
                    path = %patch_path(resource, path),
                    found = value.kind_name(),
                    expected = field.kind.name(),
                    "Patched remote value with unexpected shape"
                );
                Ok(Some(local))
            }
            None => Err(Error::FieldReadError {
                resource: resource.to_string(),
                field: path.to_string(),
                message,
            }),
        },
    }
}

enum Mismatch {
    Shape(String),
    Field(Error),
}

fn shape(field: &FieldDescriptor, value: &WireValue) -> Mismatch {
    Mismatch::Shape(format!(
        "expected {}, found {}",
        field.kind.name(),
        value.kind_name()
    ))
}

fn strict(
    resource: &str,
    field: &FieldDescriptor,
    value: &WireValue,
    prior: Option<&LocalValue>,
    path: &str,
) -> std::result::Result<LocalValue, Mismatch> {
    match (&field.kind, value) {
        (FieldKind::String, WireValue::Str(s)) => Ok(LocalValue::Str(s.clone())),
        (FieldKind::Int, WireValue::Int(v)) => Ok(LocalValue::Int(*v)),
        (FieldKind::StringSet, WireValue::List(items)) => flatten_string_list(items)
            .map(LocalValue::Set)
            .ok_or_else(|| shape(field, value)),
        (FieldKind::List(children), WireValue::List(items)) => {
            let prior_rows = prior.and_then(LocalValue::as_list).unwrap_or_default();
            let mut rows = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let WireValue::Map(entry) = item else {
                    return Err(shape(field, value));
                };
                let prefix = format!("{path}.{i}");
                let row = flatten_record(resource, children, entry, prior_rows.get(i), &prefix)
                    .map_err(Mismatch::Field)?;
                rows.push(row);
            }
            Ok(LocalValue::List(rows))
        }
        _ => Err(shape(field, value)),
    }
}

fn flatten_record(
    resource: &str,
    fields: &[FieldDescriptor],
    entry: &RemoteObject,
    prior: Option<&Record>,
    prefix: &str,
) -> Result<Record> {
    let mut record = Record::new();

    for field in fields {
        let prior_value = prior.and_then(|row| row.get(field.local));
        if field.sensitive {
            if let Some(local) = prior_value.filter(|v| !v.is_zero()) {
                record.insert(field.local.to_string(), local.clone());
                continue;
            }
        }
        let Some(value) = entry.get(field.wire) else {
            continue;
        };
        let path = format!("{prefix}.{}", field.local);
        if let Some(local) = flatten_field(resource, field, Some(value), prior_value, &path)? {
            record.insert(field.local.to_string(), local);
        }
    }

    Ok(record)
}
