//! Scoping and workspace parameter maps.
//!
//! Every remote call is addressed by a small string map naming the managed device,
//! its VDOM and any parent objects on the configuration path. Workspace-aware calls
//! also carry the ADOM to lock.

use serde::Serialize;
use std::collections::BTreeMap;

/// Key under which the managed device name travels.
pub const DEVICE_KEY: &str = "device";
/// Key under which the VDOM travels.
pub const VDOM_KEY: &str = "vdom";
/// Key under which the ADOM travels in workspace parameters.
pub const ADOM_KEY: &str = "adom";

/// Addressing context accompanying every remote call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScopeParams(BTreeMap<String, String>);

impl ScopeParams {
    /// Create an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Device name, if present.
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        self.get(DEVICE_KEY)
    }

    /// VDOM, if present.
    #[must_use]
    pub fn vdom(&self) -> Option<&str> {
        self.get(VDOM_KEY)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ScopeParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Workspace parameters for ADOM-aware locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WsParams {
    /// ADOM to lock while the call is in flight.
    pub adom: String,
}

impl WsParams {
    /// Create workspace parameters for an ADOM.
    #[must_use]
    pub fn new(adom: impl Into<String>) -> Self {
        Self { adom: adom.into() }
    }

    /// Render as a string map, the shape clients forward on the wire.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(ADOM_KEY.to_string(), self.adom.clone())])
    }
}
