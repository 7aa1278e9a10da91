//! Local resource state.
//!
//! [`ResourceData`] holds the locally declared values of one object (keyed by local
//! field name), its identity once created, and the set of field paths whose value
//! differs from the prior state. Paths into nested lists are positional:
//! `free_style.0.category`.

use std::collections::{BTreeMap, BTreeSet};

/// One local record: local field name to value.
pub type Record = BTreeMap<String, LocalValue>;

/// A locally held field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalValue {
    /// String scalar
    Str(String),
    /// Integer scalar
    Int(i64),
    /// Unordered string set
    Set(BTreeSet<String>),
    /// Nested records
    List(Vec<Record>),
}

impl LocalValue {
    /// Build a set value.
    pub fn set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// Short name of the value's shape.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Set(_) => "string set",
            Self::List(_) => "list",
        }
    }

    /// String payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload, if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Set payload, if any.
    #[must_use]
    pub const fn as_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// List payload, if any.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Record]> {
        match self {
            Self::List(rows) => Some(rows),
            _ => None,
        }
    }

    /// Whether this is the zero value of its kind.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Int(v) => *v == 0,
            Self::Set(items) => items.is_empty(),
            Self::List(rows) => rows.is_empty(),
        }
    }
}

impl From<&str> for LocalValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for LocalValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for LocalValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for LocalValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<BTreeSet<String>> for LocalValue {
    fn from(value: BTreeSet<String>) -> Self {
        Self::Set(value)
    }
}

impl From<Vec<Record>> for LocalValue {
    fn from(value: Vec<Record>) -> Self {
        Self::List(value)
    }
}

/// Build a [`Record`] from `name => value` pairs.
///
/// ```
/// use fortimanager_resource::{record, LocalValue};
///
/// let row = record! { "category" => "traffic", "id" => 1 };
/// assert_eq!(row["id"], LocalValue::Int(1));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(
                ::std::string::String::from($name),
                $crate::LocalValue::from($value),
            );
        )+
        record
    }};
}

/// Local state of one object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceData {
    id: Option<String>,
    values: Record,
    changed: BTreeSet<String>,
}

impl ResourceData {
    /// Empty state with no identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State holding `values` with no recorded changes.
    #[must_use]
    pub fn from_values(values: Record) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// State for applying `planned` on top of `prior`.
    ///
    /// The identity carries over from `prior` and every path whose value differs
    /// between the two is recorded as changed, including fields present only in
    /// `prior` (cleared by the plan).
    #[must_use]
    pub fn from_plan(prior: Option<&Self>, planned: Record) -> Self {
        let empty = Record::new();
        let prior_values = prior.map_or(&empty, |p| &p.values);

        let mut changed = BTreeSet::new();
        diff_records("", prior_values, &planned, &mut changed);

        Self {
            id: prior.and_then(|p| p.id.clone()),
            values: planned,
            changed,
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<LocalValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder-style [`set_id`](Self::set_id).
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Identity, once the object exists.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Record the identity.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Forget the identity, marking the object as gone.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Value of a field, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LocalValue> {
        self.values.get(name)
    }

    /// Value of a field if set to something other than its zero value.
    #[must_use]
    pub fn get_ok(&self, name: &str) -> Option<&LocalValue> {
        self.get(name).filter(|v| !v.is_zero())
    }

    /// String value of a field.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(LocalValue::as_str)
    }

    /// Integer value of a field.
    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(LocalValue::as_int)
    }

    /// Set a field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<LocalValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Remove a field, returning its previous value.
    pub fn unset(&mut self, name: &str) -> Option<LocalValue> {
        self.values.remove(name)
    }

    /// All field values.
    #[must_use]
    pub const fn values(&self) -> &Record {
        &self.values
    }

    /// Take the field values.
    #[must_use]
    pub fn into_values(self) -> Record {
        self.values
    }

    /// Record that the value at `path` changed.
    pub fn mark_changed(&mut self, path: impl Into<String>) {
        self.changed.insert(path.into());
    }

    /// Whether the value at `path` changed.
    #[must_use]
    pub fn has_change(&self, path: &str) -> bool {
        self.changed.contains(path)
    }

    /// Changed paths in lexical order.
    pub fn changed_paths(&self) -> impl Iterator<Item = &str> {
        self.changed.iter().map(String::as_str)
    }

    /// Forget recorded changes, typically after a successful apply.
    pub fn clear_changes(&mut self) {
        self.changed.clear();
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn diff_records(
    prefix: &str,
    prior: &Record,
    planned: &Record,
    changed: &mut BTreeSet<String>,
) -> bool {
    let names: BTreeSet<&String> = prior.keys().chain(planned.keys()).collect();
    let mut any = false;

    for name in names {
        let path = join(prefix, name);
        let differs = match (prior.get(name), planned.get(name)) {
            (Some(LocalValue::List(a)), Some(LocalValue::List(b))) => {
                diff_lists(&path, a, b, changed)
            }
            (Some(LocalValue::List(a)), other) => {
                diff_lists(&path, a, &[], changed);
                other.is_some() || !a.is_empty()
            }
            (other, Some(LocalValue::List(b))) => {
                diff_lists(&path, &[], b, changed);
                other.is_some() || !b.is_empty()
            }
            (a, b) => a != b,
        };
        if differs {
            changed.insert(path);
            any = true;
        }
    }

    any
}

fn diff_lists(
    path: &str,
    prior: &[Record],
    planned: &[Record],
    changed: &mut BTreeSet<String>,
) -> bool {
    let empty = Record::new();
    let mut any = prior.len() != planned.len();

    for i in 0..prior.len().max(planned.len()) {
        let a = prior.get(i).unwrap_or(&empty);
        let b = planned.get(i).unwrap_or(&empty);
        any |= diff_records(&format!("{path}.{i}"), a, b, changed);
    }

    any
}
