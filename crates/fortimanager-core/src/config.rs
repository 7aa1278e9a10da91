//! Provider configuration.
//!
//! [`ProviderConfig`] carries the connection settings handed to the external client
//! and the ambient scope defaults consulted when a resource leaves a scoping field
//! blank.
//!
//! `username`, `password`, `insecure`, `cabundlefile`, `request_timeout_secs` and
//! `max_retries` are forwarded to the client unread.

use crate::Error;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;
use validator::Validate;

/// ADOM used when `scopetype = inherit` and no ADOM is configured.
pub const DEFAULT_ADOM: &str = "root";

/// ADOM reported for `scopetype = global`.
pub const GLOBAL_ADOM: &str = "global";

/// How the ADOM for a call is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeType {
    /// Use the provider-level ADOM
    #[default]
    Inherit,
    /// Use the resource's own `adom` value
    Adom,
    /// Use the global ADOM
    Global,
}

/// Workspace locking mode of the FortiManager instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceMode {
    /// No locking
    #[default]
    Disable,
    /// Lock the ADOM around each change
    Normal,
    /// Workflow sessions
    Workflow,
}

impl WorkspaceMode {
    /// Whether calls must carry workspace parameters.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disable)
    }
}

/// Configuration for a provider instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderConfig {
    /// FortiManager host name or address
    #[validate(length(min = 1))]
    pub hostname: String,

    /// Login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Login password
    #[serde(default, skip_serializing, deserialize_with = "deserialize_secret")]
    pub password: Option<SecretString>,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,

    /// Optional path to a CA bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabundlefile: Option<PathBuf>,

    /// How the ADOM is chosen
    #[serde(default)]
    pub scopetype: ScopeType,

    /// Provider-level ADOM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adom: Option<String>,

    /// Workspace locking mode
    #[serde(default)]
    pub workspace_mode: WorkspaceMode,

    /// Default managed device name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,

    /// Default VDOM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_vdom: Option<String>,

    /// `key=value` entries consulted when a scoping field is blank during read
    #[serde(default)]
    pub import_options: Vec<String>,

    /// Refresh nested tables on read even when not configured locally
    #[serde(default)]
    pub import_tables: bool,

    /// Request timeout in seconds, forwarded to the client
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum retry attempts, forwarded to the client
    #[validate(range(min = 0, max = 10))]
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(SecretString::from))
}

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_max_retries() -> u32 {
    3
}

impl ProviderConfig {
    /// Create a new provider configuration with required parameters.
    ///
    /// # Arguments
    ///
    /// * `hostname` - FortiManager host (e.g. "fmg.example.com")
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn new(hostname: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            hostname: hostname.into(),
            username: None,
            password: None,
            insecure: false,
            cabundlefile: None,
            scopetype: ScopeType::default(),
            adom: None,
            workspace_mode: WorkspaceMode::default(),
            device_name: None,
            device_vdom: None,
            import_options: Vec::new(),
            import_tables: false,
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
        };

        config.check()?;
        Ok(config)
    }

    /// Validate the configuration, mapping failures to [`Error::ConfigError`].
    ///
    /// # Errors
    ///
    /// Returns an error if any field is out of range.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))
    }

    /// Set login credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Skip TLS certificate verification.
    #[must_use]
    pub const fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Set a custom CA bundle path.
    #[must_use]
    pub fn with_ca_bundle(mut self, path: PathBuf) -> Self {
        self.cabundlefile = Some(path);
        self
    }

    /// Set the scope type.
    #[must_use]
    pub const fn with_scopetype(mut self, scopetype: ScopeType) -> Self {
        self.scopetype = scopetype;
        self
    }

    /// Set the provider-level ADOM.
    #[must_use]
    pub fn with_adom(mut self, adom: impl Into<String>) -> Self {
        self.adom = Some(adom.into());
        self
    }

    /// Set the workspace mode.
    #[must_use]
    pub const fn with_workspace_mode(mut self, mode: WorkspaceMode) -> Self {
        self.workspace_mode = mode;
        self
    }

    /// Set the default device name.
    #[must_use]
    pub fn with_device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = Some(name.into());
        self
    }

    /// Set the default VDOM.
    #[must_use]
    pub fn with_device_vdom(mut self, vdom: impl Into<String>) -> Self {
        self.device_vdom = Some(vdom.into());
        self
    }

    /// Add a `key=value` import option.
    #[must_use]
    pub fn with_import_option(mut self, key: &str, value: &str) -> Self {
        self.import_options.push(format!("{key}={value}"));
        self
    }

    /// Refresh nested tables on every read.
    #[must_use]
    pub const fn with_import_tables(mut self, enabled: bool) -> Self {
        self.import_tables = enabled;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set maximum retry attempts.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// JSON-RPC endpoint of the configured host.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot form a valid URL.
    pub fn base_url(&self) -> Result<Url, Error> {
        Url::parse(&format!("https://{}/jsonrpc", self.hostname))
            .map_err(|e| Error::ConfigError(format!("Invalid hostname: {e}")))
    }

    /// Look up an import option by key.
    ///
    /// Entries are `key=value`; surrounding whitespace is ignored and the first match
    /// wins.
    #[must_use]
    pub fn import_option(&self, key: &str) -> Option<&str> {
        self.import_options.iter().find_map(|entry| {
            let (k, v) = entry.split_once('=')?;
            (k.trim() == key).then_some(v.trim())
        })
    }

    /// ADOM the provider operates in when `scopetype = inherit`.
    #[must_use]
    pub fn inherited_adom(&self) -> &str {
        self.adom
            .as_deref()
            .filter(|adom| !adom.is_empty())
            .unwrap_or(DEFAULT_ADOM)
    }
}
