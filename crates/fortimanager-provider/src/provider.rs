//! Provider facade.

use std::sync::Arc;

use fortimanager_core::{Error, FortiClient, ProviderConfig};
use fortimanager_resource::ResourceAdapter;
use tracing::{error, info};

use crate::registry::ResourceRegistry;
use crate::Result;

/// Configured provider handing out resource adapters by type name.
#[derive(Clone)]
pub struct Provider {
    registry: Arc<ResourceRegistry>,
    client: Arc<dyn FortiClient>,
    config: Arc<ProviderConfig>,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("hostname", &self.config.hostname)
            .field("resources", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl Provider {
    /// Configure a provider serving every built-in resource type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid and
    /// [`Error::InvalidDescriptor`] if a built-in descriptor is malformed.
    pub fn configure(config: ProviderConfig, client: Arc<dyn FortiClient>) -> Result<Self> {
        let registry = ResourceRegistry::builtin().map_err(log_error)?;
        Self::with_registry(config, client, registry)
    }

    /// Configure a provider serving the types in `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid or the host
    /// name cannot form an endpoint URL.
    pub fn with_registry(
        config: ProviderConfig,
        client: Arc<dyn FortiClient>,
        registry: ResourceRegistry,
    ) -> Result<Self> {
        config.check().map_err(log_error)?;
        let endpoint = config.base_url().map_err(log_error)?;

        info!(
            endpoint = %endpoint,
            scopetype = ?config.scopetype,
            resources = registry.len(),
            "Provider configured"
        );

        Ok(Self {
            registry: Arc::new(registry),
            client,
            config: Arc::new(config),
        })
    }

    /// Provider configuration.
    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Descriptor registry.
    #[must_use]
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Every served type name, sorted.
    #[must_use]
    pub fn resource_types(&self) -> Vec<&'static str> {
        self.registry.type_names().collect()
    }

    /// Adapter for one resource type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownResource`] for an unregistered type name.
    pub fn adapter(&self, type_name: &str) -> Result<ResourceAdapter> {
        let descriptor = self.registry.get(type_name)?;
        Ok(ResourceAdapter::new(
            descriptor,
            Arc::clone(&self.client),
            Arc::clone(&self.config),
        ))
    }
}

/// Log an error worth surfacing and hand it back.
pub(crate) fn log_error(err: Error) -> Error {
    if err.should_log() {
        let diagnostic = err.clone().into_diagnostic();
        error!(
            code = %diagnostic.code,
            detail = ?diagnostic.detail,
            "{}",
            diagnostic.summary
        );
    }
    err
}
