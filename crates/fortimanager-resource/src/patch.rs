//! Compatibility fallback for remote values that arrive in an unexpected shape.
//!
//! Different device firmware versions return some fields with a different shape than
//! the schema declares: single-element lists for scalars, integers for enum strings
//! and so on. When strict flattening fails the read path tries [`fortiapi_patch`]
//! before reporting a field error.

use fortimanager_core::WireValue;

use crate::data::LocalValue;
use crate::schema::FieldKind;

/// Coerce a mis-shaped scalar or set value into the declared kind.
///
/// Nested lists are never patched.
#[must_use]
pub fn fortiapi_patch(value: &WireValue, kind: &FieldKind) -> Option<LocalValue> {
    match (kind, value) {
        (FieldKind::String | FieldKind::Int, WireValue::List(items)) if items.len() == 1 => {
            strict_scalar(&items[0], kind).or_else(|| fortiapi_patch(&items[0], kind))
        }
        (FieldKind::String, WireValue::Int(v)) => Some(LocalValue::Str(v.to_string())),
        (FieldKind::String, WireValue::Bool(b)) => Some(LocalValue::from(enable_flag(*b))),
        (FieldKind::Int, WireValue::Str(s)) => s.trim().parse().ok().map(LocalValue::Int),
        (FieldKind::Int, WireValue::Bool(b)) => Some(LocalValue::Int(i64::from(*b))),
        (FieldKind::StringSet, WireValue::Str(s)) => Some(LocalValue::set([s.as_str()])),
        (FieldKind::StringSet, WireValue::List(items)) => items
            .iter()
            .map(|item| match item {
                WireValue::Str(s) => Some(s.clone()),
                WireValue::Int(v) => Some(v.to_string()),
                _ => None,
            })
            .collect::<Option<_>>()
            .map(LocalValue::Set),
        _ => None,
    }
}

/// Field path in the remote log format, e.g. `AntivirusQuarantine-DropBlocked`.
#[must_use]
pub fn patch_path(resource: &str, field_path: &str) -> String {
    let segments: Vec<String> = field_path
        .split('.')
        .filter(|segment| segment.parse::<usize>().is_err())
        .map(camel_case)
        .collect();
    format!("{resource}-{}", segments.join("-"))
}

fn strict_scalar(value: &WireValue, kind: &FieldKind) -> Option<LocalValue> {
    match (kind, value) {
        (FieldKind::String, WireValue::Str(s)) => Some(LocalValue::Str(s.clone())),
        (FieldKind::Int, WireValue::Int(v)) => Some(LocalValue::Int(*v)),
        _ => None,
    }
}

const fn enable_flag(value: bool) -> &'static str {
    if value {
        "enable"
    } else {
        "disable"
    }
}

fn camel_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}
